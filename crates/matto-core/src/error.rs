//! Error types for snapshot decoding, board validation, and notation parsing.

use crate::color::Color;
use crate::square::Square;

/// Errors from structural validation of a [`Board`](crate::board::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A side does not have exactly one king.
    #[error("expected 1 {color} king, found {count}")]
    InvalidKingCount {
        /// Which side has the wrong king count.
        color: Color,
        /// Number of kings found.
        count: usize,
    },
    /// The square array and the piece index disagree about a square.
    #[error("square {square} disagrees with the piece index")]
    IndexMismatch {
        /// The inconsistent square.
        square: Square,
    },
    /// Only one half of the en-passant target/victim pair is set.
    #[error("en-passant target and victim must be set together")]
    HalfSetEnPassant,
    /// The en-passant target square is not on a capture rank.
    #[error("en-passant target {square} is not on rank 3 or rank 6")]
    BadEnPassantRank {
        /// The offending target square.
        square: Square,
    },
}

/// Errors when decoding a 64-character position snapshot.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotError {
    /// The snapshot is not exactly 64 characters long.
    #[error("snapshot must be 64 characters, found {found}")]
    WrongLength {
        /// Number of characters found.
        found: usize,
    },
    /// A character outside the piece alphabet appeared.
    #[error("invalid snapshot character '{character}' at index {index}")]
    InvalidChar {
        /// The invalid character.
        character: char,
        /// Its position in the snapshot string.
        index: usize,
    },
    /// The decoded position fails structural validation.
    #[error("invalid position: {0}")]
    InvalidPosition(#[from] BoardError),
}

/// Errors when interpreting short algebraic notation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    /// The token does not match any recognized algebraic form.
    #[error("unrecognized algebraic token \"{token}\"")]
    UnknownToken {
        /// The offending token.
        token: String,
    },
    /// The token parses but no legal move of the position matches it.
    #[error("\"{token}\" does not match a legal move in this position")]
    NoMatchingMove {
        /// The offending token.
        token: String,
    },
}
