//! Knight move candidates.

use crate::attacks::KNIGHT_JUMPS;
use crate::board::Board;
use crate::color::Color;
use crate::square::Square;

/// Candidate destinations for a knight of `color` on `sq`: the eight jumps,
/// filtered by board bounds and friendly occupancy.
pub(crate) fn pseudo(board: &Board, sq: Square, color: Color) -> Vec<Square> {
    KNIGHT_JUMPS
        .iter()
        .filter_map(|&(dr, dc)| sq.offset(dr, dc))
        .filter(|&target| match board.piece_on(target) {
            Some(piece) => piece.color() != color,
            None => true,
        })
        .collect()
}
