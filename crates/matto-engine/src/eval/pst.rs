//! Piece-square tables for three game phases, linearly interpolated.
//!
//! Tables are written from White's perspective in snapshot order (index 0 =
//! a8, index 63 = h1). White looks a square up directly; Black mirrors the
//! index (63 − i) and negates the value. The continuous phase interpolates
//! opening→middlegame over `[0, 0.5)` and middlegame→endgame over `[0.5, 1]`.

use matto_core::{Board, Color, PieceKind, Square};

use crate::eval::phase::game_phase;

#[rustfmt::skip]
const PAWN_OPENING: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
    50, 50, 50, 50, 50, 50, 50, 50,
    10, 10, 20, 30, 30, 20, 10, 10,
     5,  5, 10, 25, 25, 10,  5,  5,
     0,  0,  0, 20, 20,  0,  0,  0,
     5, -5,-10,  0,  0,-10, -5,  5,
     5, 10, 10,-20,-20, 10, 10,  5,
     0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
const PAWN_MIDDLEGAME: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
    80, 80, 80, 80, 80, 80, 80, 80,
    25, 25, 30, 40, 40, 30, 25, 25,
    15, 15, 20, 35, 35, 20, 15, 15,
     5,  5, 10, 30, 30, 10,  5,  5,
     5, -5,-10,  5,  5,-10, -5,  5,
     5, 10, 10,-15,-15, 10, 10,  5,
     0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
const PAWN_ENDGAME: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
   120,120,120,120,120,120,120,120,
    60, 60, 60, 60, 60, 60, 60, 60,
    40, 40, 40, 40, 40, 40, 40, 40,
    20, 20, 20, 20, 20, 20, 20, 20,
    10, 10, 10, 10, 10, 10, 10, 10,
     5,  5,  5,  5,  5,  5,  5,  5,
     0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
const KNIGHT_OPENING: [i32; 64] = [
    -50,-40,-30,-30,-30,-30,-40,-50,
    -40,-20,  0,  0,  0,  0,-20,-40,
    -30,  0, 10, 15, 15, 10,  0,-30,
    -30,  5, 15, 20, 20, 15,  5,-30,
    -30,  0, 15, 20, 20, 15,  0,-30,
    -30,  5, 10, 15, 15, 10,  5,-30,
    -40,-20,  0,  5,  5,  0,-20,-40,
    -50,-40,-30,-30,-30,-30,-40,-50,
];

#[rustfmt::skip]
const KNIGHT_MIDDLEGAME: [i32; 64] = [
    -50,-40,-30,-30,-30,-30,-40,-50,
    -40,-20,  0,  5,  5,  0,-20,-40,
    -30,  0, 15, 25, 25, 15,  0,-30,
    -30,  5, 25, 35, 35, 25,  5,-30,
    -30,  0, 25, 35, 35, 25,  0,-30,
    -30,  5, 15, 25, 25, 15,  5,-30,
    -40,-20,  0,  5,  5,  0,-20,-40,
    -50,-40,-30,-30,-30,-30,-40,-50,
];

#[rustfmt::skip]
const KNIGHT_ENDGAME: [i32; 64] = [
    -50,-40,-30,-30,-30,-30,-40,-50,
    -40,-20, -5, -5, -5, -5,-20,-40,
    -30, -5, 10, 15, 15, 10, -5,-30,
    -30, -5, 15, 20, 20, 15, -5,-30,
    -30, -5, 15, 20, 20, 15, -5,-30,
    -30, -5, 10, 15, 15, 10, -5,-30,
    -40,-20, -5, -5, -5, -5,-20,-40,
    -50,-40,-30,-30,-30,-30,-40,-50,
];

#[rustfmt::skip]
const BISHOP_OPENING: [i32; 64] = [
    -20,-10,-10,-10,-10,-10,-10,-20,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -10,  0,  5, 10, 10,  5,  0,-10,
    -10,  5,  5, 10, 10,  5,  5,-10,
    -10,  0, 10, 10, 10, 10,  0,-10,
    -10, 10, 10, 10, 10, 10, 10,-10,
    -10,  5,  0,  0,  0,  0,  5,-10,
    -20,-10,-10,-10,-10,-10,-10,-20,
];

#[rustfmt::skip]
const BISHOP_MIDDLEGAME: [i32; 64] = [
    -20,-10,-10,-10,-10,-10,-10,-20,
    -10,  5,  0,  0,  0,  0,  5,-10,
    -10, 10, 10, 15, 15, 10, 10,-10,
    -10,  0, 15, 20, 20, 15,  0,-10,
    -10,  5, 10, 20, 20, 10,  5,-10,
    -10,  0, 10, 15, 15, 10,  0,-10,
    -10,  5,  5,  5,  5,  5,  5,-10,
    -20,-10,-10,-10,-10,-10,-10,-20,
];

#[rustfmt::skip]
const BISHOP_ENDGAME: [i32; 64] = [
    -20,-10,-10,-10,-10,-10,-10,-20,
    -10,  0, -5, -5, -5, -5,  0,-10,
    -10, -5,  5, 10, 10,  5, -5,-10,
    -10, -5, 10, 15, 15, 10, -5,-10,
    -10, -5, 10, 15, 15, 10, -5,-10,
    -10, -5,  5, 10, 10,  5, -5,-10,
    -10,  0, -5, -5, -5, -5,  0,-10,
    -20,-10,-10,-10,-10,-10,-10,-20,
];

#[rustfmt::skip]
const ROOK_OPENING: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
     5, 10, 10, 10, 10, 10, 10,  5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
     0,  0,  0,  5,  5,  0,  0,  0,
];

#[rustfmt::skip]
const ROOK_MIDDLEGAME: [i32; 64] = [
     0,  0,  0,  5,  5,  0,  0,  0,
    15, 20, 20, 20, 20, 20, 20, 15,
     0,  5,  5,  5,  5,  5,  5,  0,
     0,  5,  5,  5,  5,  5,  5,  0,
     0,  5,  5,  5,  5,  5,  5,  0,
     0,  5,  5,  5,  5,  5,  5,  0,
     0,  5,  5,  5,  5,  5,  5,  0,
     5,  5,  5, 10, 10,  5,  5,  5,
];

#[rustfmt::skip]
const ROOK_ENDGAME: [i32; 64] = [
    10, 10, 10, 10, 10, 10, 10, 10,
    10, 15, 15, 15, 15, 15, 15, 10,
     5, 10, 10, 10, 10, 10, 10,  5,
     5, 10, 10, 10, 10, 10, 10,  5,
     5, 10, 10, 10, 10, 10, 10,  5,
     5, 10, 10, 10, 10, 10, 10,  5,
     5, 10, 10, 10, 10, 10, 10,  5,
    10, 10, 10, 15, 15, 10, 10, 10,
];

#[rustfmt::skip]
const QUEEN_OPENING: [i32; 64] = [
    -20,-10,-10, -5, -5,-10,-10,-20,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -10,  0,  5,  5,  5,  5,  0,-10,
     -5,  0,  5,  5,  5,  5,  0, -5,
      0,  0,  5,  5,  5,  5,  0, -5,
    -10,  5,  5,  5,  5,  5,  0,-10,
    -10,  0,  5,  0,  0,  0,  0,-10,
    -20,-10,-10, -5, -5,-10,-10,-20,
];

#[rustfmt::skip]
const QUEEN_MIDDLEGAME: [i32; 64] = [
    -20,-10,-10, -5, -5,-10,-10,-20,
    -10,  0,  5,  0,  0,  0,  0,-10,
    -10,  5, 10, 10, 10, 10,  0,-10,
      0,  0, 10, 15, 15, 10,  0,  0,
     -5,  5, 10, 15, 15, 10,  0, -5,
    -10,  0, 10, 10, 10, 10,  0,-10,
    -10,  0,  5,  5,  5,  5,  0,-10,
    -20,-10,-10, -5, -5,-10,-10,-20,
];

#[rustfmt::skip]
const QUEEN_ENDGAME: [i32; 64] = [
    -20,-10,-10, -5, -5,-10,-10,-20,
    -10,  0,  5,  5,  5,  5,  0,-10,
    -10,  5, 15, 20, 20, 15,  5,-10,
     -5,  5, 20, 25, 25, 20,  5, -5,
     -5,  5, 20, 25, 25, 20,  5, -5,
    -10,  5, 15, 20, 20, 15,  5,-10,
    -10,  0,  5,  5,  5,  5,  0,-10,
    -20,-10,-10, -5, -5,-10,-10,-20,
];

#[rustfmt::skip]
const KING_OPENING: [i32; 64] = [
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -20,-30,-30,-40,-40,-30,-30,-20,
    -10,-20,-20,-20,-20,-20,-20,-10,
     20, 20,  0,  0,  0,  0, 20, 20,
     20, 30, 10,  0,  0, 10, 30, 20,
];

#[rustfmt::skip]
const KING_MIDDLEGAME: [i32; 64] = [
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -20,-30,-30,-40,-40,-30,-30,-20,
    -10,-20,-20,-20,-20,-20,-20,-10,
     25, 25,  5,  5,  5,  5, 25, 25,
     25, 35, 15,  5,  5, 15, 35, 25,
];

#[rustfmt::skip]
const KING_ENDGAME: [i32; 64] = [
    -50,-40,-30,-20,-20,-30,-40,-50,
    -30,-20,-10,  0,  0,-10,-20,-30,
    -30,-10, 20, 30, 30, 20,-10,-30,
    -30,-10, 30, 40, 40, 30,-10,-30,
    -30,-10, 30, 40, 40, 30,-10,-30,
    -30,-10, 20, 30, 30, 20,-10,-30,
    -30,-30,  0,  0,  0,  0,-30,-30,
    -50,-30,-30,-30,-30,-30,-30,-50,
];

fn tables(kind: PieceKind) -> (&'static [i32; 64], &'static [i32; 64], &'static [i32; 64]) {
    match kind {
        PieceKind::Pawn => (&PAWN_OPENING, &PAWN_MIDDLEGAME, &PAWN_ENDGAME),
        PieceKind::Knight => (&KNIGHT_OPENING, &KNIGHT_MIDDLEGAME, &KNIGHT_ENDGAME),
        PieceKind::Bishop => (&BISHOP_OPENING, &BISHOP_MIDDLEGAME, &BISHOP_ENDGAME),
        PieceKind::Rook => (&ROOK_OPENING, &ROOK_MIDDLEGAME, &ROOK_ENDGAME),
        PieceKind::Queen => (&QUEEN_OPENING, &QUEEN_MIDDLEGAME, &QUEEN_ENDGAME),
        PieceKind::King => (&KING_OPENING, &KING_MIDDLEGAME, &KING_ENDGAME),
    }
}

/// The table value for one piece on one square at the given phase, signed
/// by color: White reads directly, Black mirrors the square and negates.
pub fn pst_value(kind: PieceKind, color: Color, sq: Square, phase: f32) -> f32 {
    let (opening, middlegame, endgame) = tables(kind);
    let index = match color {
        Color::White => sq.index(),
        Color::Black => 63 - sq.index(),
    };
    let value = interpolate(
        opening[index] as f32,
        middlegame[index] as f32,
        endgame[index] as f32,
        phase,
    );
    match color {
        Color::White => value,
        Color::Black => -value,
    }
}

/// Linear interpolation: opening→middlegame over the first half of the
/// phase range, middlegame→endgame over the second.
fn interpolate(opening: f32, middlegame: f32, endgame: f32, phase: f32) -> f32 {
    if phase < 0.5 {
        let factor = phase * 2.0;
        opening + (middlegame - opening) * factor
    } else {
        let factor = (phase - 0.5) * 2.0;
        middlegame + (endgame - middlegame) * factor
    }
}

/// The positional score of the whole board: the signed table value of every
/// piece, rounded to whole centipawns at the end.
pub fn position_score(board: &Board) -> i32 {
    let phase = game_phase(board);
    let mut score = 0.0;
    for sq in Square::all() {
        if let Some(piece) = board.piece_on(sq) {
            score += pst_value(piece.kind(), piece.color(), sq, phase);
        }
    }
    score.round() as i32
}
