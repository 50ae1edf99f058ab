//! King move candidates, including castling.

use crate::attacks::{KING_STEPS, is_king_attacked, is_square_attacked};
use crate::board::Board;
use crate::castling::CastleSide;
use crate::color::Color;
use crate::movegen::filter_self_check;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Candidate destinations for the king of `color` on `sq`.
///
/// The eight steps are filtered by bounds, friendly occupancy, and the
/// kings-not-adjacent rule. Castling destinations are included whenever the
/// moved flags, the rook, and the empty squares between them allow it; the
/// check-related conditions belong to [`legal`].
pub(crate) fn pseudo(board: &Board, sq: Square, color: Color) -> Vec<Square> {
    let mut moves = steps(board, sq, color);
    for side in CastleSide::ALL {
        if castle_geometry_allows(board, color, side, sq) {
            moves.push(side.king_target(color));
        }
    }
    moves
}

/// Legal destinations for the king of `color` on `sq`: the plain steps that
/// survive the self-check filter, plus each castle whose full conditions
/// hold (never moved, path empty, not in check, transit and landing squares
/// unattacked).
pub(crate) fn legal(board: &Board, sq: Square, color: Color) -> Vec<Square> {
    let mut moves = filter_self_check(board, sq, color, steps(board, sq, color));
    for side in CastleSide::ALL {
        if castle_is_legal(board, color, side, sq) {
            moves.push(side.king_target(color));
        }
    }
    moves
}

/// The eight king steps, excluding friendly squares and squares adjacent to
/// the enemy king.
fn steps(board: &Board, sq: Square, color: Color) -> Vec<Square> {
    let enemy_king = board.king_square(color.flip());
    KING_STEPS
        .iter()
        .filter_map(|&(dr, dc)| sq.offset(dr, dc))
        .filter(|&target| match board.piece_on(target) {
            Some(piece) => piece.color() != color,
            None => true,
        })
        .filter(|&target| {
            target.row().abs_diff(enemy_king.row()) > 1
                || target.col().abs_diff(enemy_king.col()) > 1
        })
        .collect()
}

/// Moved flags, rook presence, and empty in-between squares — the conditions
/// a castle shares between pseudo and legal generation.
fn castle_geometry_allows(
    board: &Board,
    color: Color,
    side: CastleSide,
    king_sq: Square,
) -> bool {
    let king_home = match color {
        Color::White => Square::E1,
        Color::Black => Square::E8,
    };
    if king_sq != king_home || !board.castling().castle_available(color, side) {
        return false;
    }
    let rook_home = side.rook_home(color);
    if board.piece_on(rook_home) != Some(Piece::new(PieceKind::Rook, color)) {
        return false;
    }
    between_squares(color, side)
        .iter()
        .all(|&sq| board.is_empty(sq))
}

/// Full castle legality: geometry plus the three check conditions.
fn castle_is_legal(board: &Board, color: Color, side: CastleSide, king_sq: Square) -> bool {
    if !castle_geometry_allows(board, color, side, king_sq) {
        return false;
    }
    if is_king_attacked(board, color) {
        return false;
    }
    let enemy = color.flip();
    crossing_squares(color, side)
        .iter()
        .all(|&sq| !is_square_attacked(board, sq, enemy))
}

/// Squares that must be empty between king and rook.
fn between_squares(color: Color, side: CastleSide) -> &'static [Square] {
    match (color, side) {
        (Color::White, CastleSide::Kingside) => &[Square::F1, Square::G1],
        (Color::White, CastleSide::Queenside) => &[Square::B1, Square::C1, Square::D1],
        (Color::Black, CastleSide::Kingside) => &[Square::F8, Square::G8],
        (Color::Black, CastleSide::Queenside) => &[Square::B8, Square::C8, Square::D8],
    }
}

/// Squares the king passes through or lands on; none may be attacked.
fn crossing_squares(color: Color, side: CastleSide) -> &'static [Square] {
    match (color, side) {
        (Color::White, CastleSide::Kingside) => &[Square::F1, Square::G1],
        (Color::White, CastleSide::Queenside) => &[Square::D1, Square::C1],
        (Color::Black, CastleSide::Kingside) => &[Square::F8, Square::G8],
        (Color::Black, CastleSide::Queenside) => &[Square::D8, Square::C8],
    }
}
