//! Evaluation, search, game history, and top-level play for matto.

pub mod eval;
mod history;
mod player;
mod search;

pub use eval::{evaluate, evaluate_absolute};
pub use history::{Ledger, LedgerError};
pub use player::{DEFAULT_OPENING_PLIES, Engine, EngineMove};
pub use search::{DEFAULT_DEPTH, MATE_SCORE, SearchResult, Searcher, apply_engine_move};
