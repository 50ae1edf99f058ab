//! Fixed-depth alpha-beta minimax over the legal move generator.
//!
//! Scores are always from White's perspective: White nodes maximize, Black
//! nodes minimize, and leaves return the static evaluation. Terminal nodes
//! are scored before the depth cutoff so that even a depth-1 search sees a
//! mate it can deliver.

use tracing::debug;

use matto_core::{
    Board, Color, Move, PieceKind, all_legal_moves, castle_side_of_king_move, in_check,
};

use crate::eval::evaluate_absolute;

/// Default search depth in plies.
pub const DEFAULT_DEPTH: u32 = 3;

/// Mate magnitude; the king's nominal material value.
pub const MATE_SCORE: i32 = 20_000;

/// Sentinel bound outside every reachable score.
const INFINITY: i32 = 1_000_000;

/// A completed search: the chosen move and its white-perspective score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// The best move found for the side to move.
    pub best: Move,
    /// Score of the move from White's perspective, in centipawns.
    pub score: i32,
}

/// Depth-limited alpha-beta searcher with a node counter.
#[derive(Debug)]
pub struct Searcher {
    depth: u32,
    nodes: u64,
}

impl Searcher {
    /// Create a searcher with the given ply depth (at least 1).
    pub fn new(depth: u32) -> Searcher {
        Searcher { depth: depth.max(1), nodes: 0 }
    }

    /// Nodes visited by the most recent search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Find the best move for the side to move, or `None` when there is no
    /// legal move (mate or stalemate).
    ///
    /// Every candidate is applied to a copy of the position and searched to
    /// the remaining depth with a fresh full window; White picks the
    /// maximum, Black the minimum.
    pub fn best_move(&mut self, board: &Board) -> Option<SearchResult> {
        self.nodes = 0;
        let moves = all_legal_moves(board);
        if moves.is_empty() {
            return None;
        }

        let maximizing = board.side_to_move() == Color::White;
        let mut best = None;
        let mut best_score = if maximizing { -INFINITY } else { INFINITY };

        for mv in moves {
            let mut child = board.clone();
            apply_engine_move(&mut child, mv);
            let score = self.minimax(&child, self.depth - 1, -INFINITY, INFINITY, 1);
            let improves = if maximizing {
                score > best_score
            } else {
                score < best_score
            };
            if improves {
                best_score = score;
                best = Some(mv);
            }
        }

        let result = best.map(|mv| SearchResult { best: mv, score: best_score });
        if let Some(found) = result {
            debug!(best = %found.best, score = found.score, nodes = self.nodes, "search finished");
        }
        result
    }

    pub(crate) fn minimax(
        &mut self,
        board: &Board,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        ply: u32,
    ) -> i32 {
        self.nodes += 1;

        let moves = all_legal_moves(board);
        if moves.is_empty() {
            return terminal_score(board, ply);
        }
        if depth == 0 {
            return evaluate_absolute(board);
        }

        if board.side_to_move() == Color::White {
            let mut best = -INFINITY;
            for mv in moves {
                let mut child = board.clone();
                apply_engine_move(&mut child, mv);
                let score = self.minimax(&child, depth - 1, alpha, beta, ply + 1);
                best = best.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = INFINITY;
            for mv in moves {
                let mut child = board.clone();
                apply_engine_move(&mut child, mv);
                let score = self.minimax(&child, depth - 1, alpha, beta, ply + 1);
                best = best.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }
}

impl Default for Searcher {
    fn default() -> Searcher {
        Searcher::new(DEFAULT_DEPTH)
    }
}

/// Score for a side with no legal moves: a mate against the side to move
/// (closer mates score larger), or zero for stalemate.
fn terminal_score(board: &Board, ply: u32) -> i32 {
    if in_check(board) {
        let magnitude = MATE_SCORE - ply as i32;
        match board.side_to_move() {
            Color::White => -magnitude,
            Color::Black => magnitude,
        }
    } else {
        0
    }
}

/// Apply a generator move, dispatching to the right mutation: an explicit
/// promotion, a two-file king move as a castle, a pawn reaching the last
/// rank as an automatic queen, or a plain move.
pub fn apply_engine_move(board: &mut Board, mv: Move) {
    if let Some(kind) = mv.promotion {
        board.apply_promotion(mv.from, mv.to, kind);
        return;
    }
    if let Some(side) = castle_side_of_king_move(board, mv.from, mv.to) {
        let Some(color) = board.piece_on(mv.from).map(|piece| piece.color()) else {
            return;
        };
        board.apply_castling(mv.from, mv.to, side.rook_home(color), side.rook_target(color));
        return;
    }
    if let Some(piece) = board.piece_on(mv.from)
        && piece.kind() == PieceKind::Pawn
        && mv.to.row() == piece.color().promotion_row()
    {
        board.apply_promotion(mv.from, mv.to, PieceKind::Queen);
        return;
    }
    board.apply_move(mv.from, mv.to);
}
