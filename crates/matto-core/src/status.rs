//! Position status: check, checkmate, stalemate, and the draw states
//! contributed by the game ledger.

use std::fmt;

use crate::attacks::is_king_attacked;
use crate::board::Board;
use crate::movegen::legal_moves_for;
use crate::square::Square;

/// The status of a game as seen by the side to move.
///
/// `Checkmate` and the draw states are terminal: no further moves are
/// accepted once they are reported. The draw variants are produced by the
/// ledger layer; this module classifies the first four from the position
/// alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Normal,
    Check,
    Checkmate,
    Stalemate,
    /// Fifty half-moves without a capture (ledger piece-count proxy).
    FiftyMove,
    /// The same snapshot occurred three times in the ledger.
    Repetition,
}

impl GameStatus {
    /// Return `true` for statuses that end the game.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            GameStatus::Checkmate
                | GameStatus::Stalemate
                | GameStatus::FiftyMove
                | GameStatus::Repetition
        )
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameStatus::Normal => "normal",
            GameStatus::Check => "check",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
            GameStatus::FiftyMove => "fifty-move draw",
            GameStatus::Repetition => "repetition draw",
        };
        write!(f, "{text}")
    }
}

/// Return `true` if the side to move is in check.
pub fn in_check(board: &Board) -> bool {
    is_king_attacked(board, board.side_to_move())
}

/// Return `true` if the side to move has at least one legal move.
pub fn has_legal_move(board: &Board) -> bool {
    let mover = board.side_to_move();
    Square::all().any(|sq| {
        board
            .piece_on(sq)
            .is_some_and(|piece| piece.color() == mover)
            && !legal_moves_for(board, sq).is_empty()
    })
}

/// Classify the position for the side to move: checkmate when checked with
/// no reply, stalemate when unchecked with no reply, otherwise check or
/// normal. Ledger draws are layered on top by the caller.
pub fn position_status(board: &Board) -> GameStatus {
    let checked = in_check(board);
    let movable = has_legal_move(board);
    match (checked, movable) {
        (true, false) => GameStatus::Checkmate,
        (false, false) => GameStatus::Stalemate,
        (true, true) => GameStatus::Check,
        (false, true) => GameStatus::Normal,
    }
}
