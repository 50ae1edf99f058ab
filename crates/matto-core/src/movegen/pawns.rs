//! Pawn move candidates: pushes, captures, en passant.

use crate::board::Board;
use crate::color::Color;
use crate::square::Square;

/// Row a pawn must stand on to capture en passant (the 5th rank for White,
/// the 4th for Black).
const fn en_passant_row(color: Color) -> usize {
    match color {
        Color::White => 3,
        Color::Black => 4,
    }
}

/// Candidate destinations for a pawn of `color` on `sq`.
///
/// Emits, in order: the initial double push, the single push, then the two
/// diagonal captures (including the en-passant capture onto the armed target
/// square). Promotion is not a separate destination: a push or capture onto
/// the last rank is the promotion move, with the piece choice deferred to
/// the caller.
pub(crate) fn pseudo(board: &Board, sq: Square, color: Color) -> Vec<Square> {
    let mut moves = Vec::new();
    let step = color.pawn_step();

    if sq.row() == color.pawn_home_row()
        && let (Some(one), Some(two)) = (sq.offset(step, 0), sq.offset(2 * step, 0))
        && board.is_empty(one)
        && board.is_empty(two)
    {
        moves.push(two);
    }

    if let Some(one) = sq.offset(step, 0)
        && board.is_empty(one)
    {
        moves.push(one);
    }

    for dc in [-1, 1] {
        let Some(target) = sq.offset(step, dc) else {
            continue;
        };
        match board.piece_on(target) {
            Some(piece) if piece.color() != color => moves.push(target),
            None => {
                if board.en_passant_target() == Some(target)
                    && sq.row() == en_passant_row(color)
                {
                    moves.push(target);
                }
            }
            _ => {}
        }
    }

    moves
}
