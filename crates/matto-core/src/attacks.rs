//! Attack detection: "is square S attacked by side C?".
//!
//! All queries walk offsets outward from the queried square and look at the
//! first piece met, so they allocate nothing and finish in a bounded number
//! of steps.

use crate::board::Board;
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// The four orthogonal ray directions as (row, col) deltas.
pub(crate) const ORTHOGONAL_DIRS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// The four diagonal ray directions.
pub(crate) const DIAGONAL_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// The eight knight jumps.
pub(crate) const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (2, 1), (2, -1), (-2, 1), (-2, -1),
    (1, 2), (1, -2), (-1, 2), (-1, -2),
];

/// The eight king steps.
pub(crate) const KING_STEPS: [(i8, i8); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1), (0, 1),
    (1, -1), (1, 0), (1, 1),
];

/// Return `true` if `color`'s king stands on a square attacked by the enemy.
///
/// The king's presence is a precondition (§ position invariants), enforced
/// by [`Board::king_square`].
pub fn is_king_attacked(board: &Board, color: Color) -> bool {
    is_square_attacked(board, board.king_square(color), color.flip())
}

/// Return `true` if any piece of `by` attacks `sq`.
pub fn is_square_attacked(board: &Board, sq: Square, by: Color) -> bool {
    attacked_along_rays(board, sq, by, &ORTHOGONAL_DIRS, PieceKind::Rook)
        || attacked_along_rays(board, sq, by, &DIAGONAL_DIRS, PieceKind::Bishop)
        || attacked_by_jump(board, sq, by, &KNIGHT_JUMPS, PieceKind::Knight)
        || attacked_by_jump(board, sq, by, &KING_STEPS, PieceKind::King)
        || attacked_by_pawn(board, sq, by)
}

/// Walk each ray until a piece is met; an attack exists iff that piece is an
/// enemy queen or the given `slider` kind.
fn attacked_along_rays(
    board: &Board,
    sq: Square,
    by: Color,
    dirs: &[(i8, i8); 4],
    slider: PieceKind,
) -> bool {
    for &(dr, dc) in dirs {
        let mut current = sq;
        while let Some(next) = current.offset(dr, dc) {
            match board.piece_on(next) {
                None => current = next,
                Some(piece) => {
                    if piece.color() == by
                        && (piece.kind() == slider || piece.kind() == PieceKind::Queen)
                    {
                        return true;
                    }
                    break;
                }
            }
        }
    }
    false
}

/// Check fixed offsets for an enemy piece of the given kind.
fn attacked_by_jump(
    board: &Board,
    sq: Square,
    by: Color,
    offsets: &[(i8, i8); 8],
    kind: PieceKind,
) -> bool {
    offsets.iter().any(|&(dr, dc)| {
        sq.offset(dr, dc)
            .and_then(|target| board.piece_on(target))
            == Some(Piece::new(kind, by))
    })
}

/// A pawn of `by` attacks `sq` from one row behind its own push direction.
fn attacked_by_pawn(board: &Board, sq: Square, by: Color) -> bool {
    let source_row = -by.pawn_step();
    [-1, 1].into_iter().any(|dc| {
        sq.offset(source_row, dc)
            .and_then(|source| board.piece_on(source))
            == Some(Piece::new(PieceKind::Pawn, by))
    })
}
