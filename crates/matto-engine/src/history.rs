//! The game ledger: an append-only log of position snapshots.
//!
//! The ledger is the source of truth for the two history-dependent draw
//! rules. Threefold repetition compares raw snapshot strings; the fifty-move
//! rule uses the piece-count proxy of the persisted format (fifty ledger
//! entries with an unchanged piece count). Both checks answer `false` on an
//! empty or unusable ledger.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use matto_core::{Board, san_sequence};

/// Ledger entries examined by the fifty-move check.
const FIFTY_MOVE_WINDOW: usize = 50;

/// Errors when reading or writing a ledger file.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    /// The ledger file could not be read or written.
    #[error("ledger file {path}: {source}")]
    Io {
        /// The file involved.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Append-only sequence of board snapshots, one per position the game has
/// visited (including the starting position).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    snapshots: Vec<String>,
}

impl Ledger {
    /// An empty ledger.
    pub fn new() -> Ledger {
        Ledger::default()
    }

    /// Load a ledger from its file: one snapshot per line, blank lines
    /// ignored.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read; callers treat that as an empty
    /// ledger after logging (draw checks then answer `false`).
    pub fn load(path: &Path) -> Result<Ledger, LedgerError> {
        let text = fs::read_to_string(path).map_err(|source| LedgerError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let snapshots = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        Ok(Ledger { snapshots })
    }

    /// Write the ledger to its file, one snapshot per line.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), LedgerError> {
        let mut text = self.snapshots.join("\n");
        if !text.is_empty() {
            text.push('\n');
        }
        fs::write(path, text).map_err(|source| LedgerError::Io {
            path: path.display().to_string(),
            source,
        })
    }

    /// Append the current position of `board`.
    pub fn record(&mut self, board: &Board) {
        self.snapshots.push(board.to_snapshot());
    }

    /// All recorded snapshots, oldest first.
    pub fn snapshots(&self) -> &[String] {
        &self.snapshots
    }

    /// Number of plies played: one less than the recorded positions.
    pub fn ply_count(&self) -> usize {
        self.snapshots.len().saturating_sub(1)
    }

    /// The algebraic tokens of the game, derived from consecutive snapshot
    /// diffs.
    pub fn san_tokens(&self) -> Vec<String> {
        san_sequence(&self.snapshots)
    }

    /// Threefold repetition: some snapshot occurs at least three times.
    pub fn is_threefold_repetition(&self) -> bool {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for snapshot in &self.snapshots {
            let seen = counts.entry(snapshot.as_str()).or_default();
            *seen += 1;
            if *seen >= 3 {
                return true;
            }
        }
        false
    }

    /// Fifty-move proxy: the last fifty entries all carry the same piece
    /// count. Entries of the wrong length disqualify the check.
    pub fn is_fifty_move_draw(&self) -> bool {
        if self.snapshots.len() < FIFTY_MOVE_WINDOW {
            return false;
        }
        let window = &self.snapshots[self.snapshots.len() - FIFTY_MOVE_WINDOW..];
        let mut counts = window.iter().filter_map(|snapshot| {
            (snapshot.chars().count() == 64).then(|| piece_count(snapshot))
        });
        let Some(first) = counts.next() else {
            return false;
        };
        let mut seen = 1;
        for count in counts {
            if count != first {
                return false;
            }
            seen += 1;
        }
        seen == FIFTY_MOVE_WINDOW
    }
}

/// Number of occupied squares in a snapshot line.
fn piece_count(snapshot: &str) -> usize {
    snapshot.chars().filter(|&c| c != '.').count()
}
