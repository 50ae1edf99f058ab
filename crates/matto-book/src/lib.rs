//! Opening books for matto: JSON book documents, endorsement-ranked lookup,
//! and resolution of algebraic recommendations to concrete moves.

mod book;
mod error;
mod resolve;

pub use book::{BookDocument, BookLine, BookSet};
pub use error::BookError;
pub use resolve::resolve_san;
