//! King safety: pawn shield and nearby open files. Suppressed in the endgame,
//! where the king is meant to leave its shelter.

use matto_core::{Board, Color, Piece, PieceKind};

/// King-safety difference, White minus Black. Returns 0 in the endgame.
pub fn king_safety(board: &Board, endgame: bool) -> i32 {
    if endgame {
        return 0;
    }
    side_safety(board, Color::White) - side_safety(board, Color::Black)
}

fn side_safety(board: &Board, color: Color) -> i32 {
    let king = board.king_square(color);
    let mut safety = 0;

    // Pawn shield: only for a king on its back two rows. A pawn directly in
    // front of the king counts 10, one a square further counts 5.
    let on_back_rows = match color {
        Color::White => king.row() >= 6,
        Color::Black => king.row() <= 1,
    };
    if on_back_rows {
        let step = color.pawn_step();
        let pawn = Piece::new(PieceKind::Pawn, color);
        for dc in -1..=1 {
            let near = king.offset(step, dc);
            let far = king.offset(2 * step, dc);
            if near.is_some_and(|sq| board.piece_on(sq) == Some(pawn)) {
                safety += 10;
            } else if far.is_some_and(|sq| board.piece_on(sq) == Some(pawn)) {
                safety += 5;
            }
        }
    }

    // Files around the king with no friendly pawn at all are highways for
    // enemy rooks and queens.
    let pawn_cols: Vec<usize> = board
        .positions(Piece::new(PieceKind::Pawn, color))
        .iter()
        .map(|sq| sq.col())
        .collect();
    let king_col = king.col() as i8;
    for col in (king_col - 1)..=(king_col + 1) {
        if (0..8).contains(&col) && !pawn_cols.contains(&(col as usize)) {
            safety -= 15;
        }
    }

    safety
}
