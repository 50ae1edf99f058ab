//! Sliding-piece candidates: rook, bishop, and queen rays.

use crate::attacks::{DIAGONAL_DIRS, ORTHOGONAL_DIRS};
use crate::board::Board;
use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Candidate destinations for a slider of `color` and `kind` on `sq`.
///
/// Walks each ray of the piece: empty squares are added, the first enemy
/// square is added and ends the ray, a friendly square ends the ray.
pub(crate) fn pseudo(board: &Board, sq: Square, color: Color, kind: PieceKind) -> Vec<Square> {
    debug_assert!(kind.is_slider(), "slider generator called for {kind}");
    let mut moves = Vec::new();

    if kind == PieceKind::Rook || kind == PieceKind::Queen {
        walk_rays(board, sq, color, &ORTHOGONAL_DIRS, &mut moves);
    }
    if kind == PieceKind::Bishop || kind == PieceKind::Queen {
        walk_rays(board, sq, color, &DIAGONAL_DIRS, &mut moves);
    }

    moves
}

fn walk_rays(
    board: &Board,
    sq: Square,
    color: Color,
    dirs: &[(i8, i8); 4],
    moves: &mut Vec<Square>,
) {
    for &(dr, dc) in dirs {
        let mut current = sq;
        while let Some(next) = current.offset(dr, dc) {
            match board.piece_on(next) {
                None => {
                    moves.push(next);
                    current = next;
                }
                Some(piece) => {
                    if piece.color() != color {
                        moves.push(next);
                    }
                    break;
                }
            }
        }
    }
}
