//! Top-level move choice: opening book first, search otherwise.
//!
//! The engine asks the book only during the opening phase (20 plies by
//! default). A book suggestion that resolves to a legal move is played as
//! is; anything else silently falls through to the alpha-beta search. After
//! every move the game status is classified with the ledger draws layered
//! on top of the position status.

use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::{debug, info, warn};

use matto_book::{BookSet, resolve_san};
use matto_core::{Board, GameStatus, Move, position_status};

use crate::history::Ledger;
use crate::search::{DEFAULT_DEPTH, SearchResult, Searcher, apply_engine_move};

/// Plies during which the opening book is consulted.
pub const DEFAULT_OPENING_PLIES: usize = 20;

/// Where a chosen move came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineMove {
    /// Straight out of the opening book.
    Book(Move),
    /// Found by the search, with its white-perspective score.
    Search(SearchResult),
}

impl EngineMove {
    /// The move itself, regardless of provenance.
    pub fn chess_move(self) -> Move {
        match self {
            EngineMove::Book(mv) => mv,
            EngineMove::Search(result) => result.best,
        }
    }
}

/// The playing engine: books, searcher, and the book RNG.
#[derive(Debug)]
pub struct Engine {
    books: BookSet,
    searcher: Searcher,
    rng: SmallRng,
    opening_plies: usize,
}

impl Engine {
    /// Create an engine with the default search depth and opening window.
    pub fn new(books: BookSet) -> Engine {
        Engine {
            books,
            searcher: Searcher::new(DEFAULT_DEPTH),
            rng: SmallRng::from_entropy(),
            opening_plies: DEFAULT_OPENING_PLIES,
        }
    }

    /// Replace the search depth.
    pub fn set_depth(&mut self, depth: u32) {
        self.searcher = Searcher::new(depth);
    }

    /// Replace the opening-book window (in plies).
    pub fn set_opening_plies(&mut self, plies: usize) {
        self.opening_plies = plies;
    }

    /// Reseed the book RNG; the single source of non-determinism.
    pub fn seed_rng(&mut self, seed: u64) {
        self.rng = SmallRng::seed_from_u64(seed);
    }

    /// Nodes visited by the most recent search.
    pub fn nodes_searched(&self) -> u64 {
        self.searcher.nodes()
    }

    /// Choose a move for the side to move, or `None` when there is none.
    pub fn choose_move(&mut self, board: &Board, ledger: &Ledger) -> Option<EngineMove> {
        if ledger.ply_count() <= self.opening_plies {
            let played = ledger.san_tokens();
            if let Some(token) = self.books.pick(&played, &mut self.rng) {
                match resolve_san(board, &token) {
                    Ok(mv) => {
                        info!(%token, %mv, "playing book move");
                        return Some(EngineMove::Book(mv));
                    }
                    Err(err) => {
                        debug!(%token, error = %err, "book suggestion dropped");
                    }
                }
            }
        }
        self.searcher.best_move(board).map(EngineMove::Search)
    }

    /// Classify the game for the side to move, draws included.
    ///
    /// Precedence: repetition, then checkmate, then stalemate, then the
    /// fifty-move rule, then check.
    pub fn status(&self, board: &Board, ledger: &Ledger) -> GameStatus {
        if ledger.is_threefold_repetition() {
            return GameStatus::Repetition;
        }
        match position_status(board) {
            status @ (GameStatus::Checkmate | GameStatus::Stalemate) => status,
            status => {
                if ledger.is_fifty_move_draw() {
                    GameStatus::FiftyMove
                } else {
                    status
                }
            }
        }
    }

    /// Play one engine move: choose it, apply it, record the new position,
    /// and report the resulting status.
    ///
    /// Returns `None` without touching the position when the game is
    /// already over or no move exists.
    pub fn play(
        &mut self,
        board: &mut Board,
        ledger: &mut Ledger,
    ) -> Option<(EngineMove, GameStatus)> {
        let status = self.status(board, ledger);
        if status.is_terminal() {
            warn!(%status, "move refused: game is over");
            return None;
        }
        let chosen = self.choose_move(board, ledger)?;
        apply_engine_move(board, chosen.chess_move());
        ledger.record(board);
        Some((chosen, self.status(board, ledger)))
    }
}
