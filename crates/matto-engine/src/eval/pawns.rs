//! Pawn-structure terms: doubled, isolated, passed, backward, connected.

use matto_core::{Board, Color, Piece, PieceKind, Square};

/// Pawn-structure difference, White minus Black.
pub fn pawn_structure(board: &Board, endgame: bool) -> i32 {
    side_structure(board, Color::White, endgame) - side_structure(board, Color::Black, endgame)
}

fn side_structure(board: &Board, color: Color, endgame: bool) -> i32 {
    let own: &[Square] = board.positions(Piece::new(PieceKind::Pawn, color));
    let enemy: &[Square] = board.positions(Piece::new(PieceKind::Pawn, color.flip()));
    let step = color.pawn_step();
    let mut score = 0;

    for &pawn in own {
        let row = pawn.row();
        let col = pawn.col();

        // Doubled: each twin on the same file costs 15.
        let twins = own
            .iter()
            .filter(|&&other| other != pawn && other.col() == col)
            .count() as i32;
        score -= 15 * twins;

        // Isolated: no friendly pawn on either adjacent file.
        let supported_file = own
            .iter()
            .any(|&other| other.col().abs_diff(col) == 1);
        if !supported_file {
            score -= 25;
        }

        // Passed: no enemy pawn ahead on this or the adjacent files. The
        // bonus grows with every rank already travelled and doubles in the
        // endgame.
        let passed = !enemy.iter().any(|&other| {
            other.col().abs_diff(col) <= 1 && is_ahead(other.row(), row, color)
        });
        if passed {
            let advancement = match color {
                Color::White => 7 - row as i32,
                Color::Black => row as i32,
            };
            let mut bonus = 20 + advancement * 15;
            if endgame {
                bonus *= 2;
            }
            score += bonus;
        }

        // Backward: the pawn could advance, but every adjacent-file friend
        // is already behind it and cannot cover the advance. Pawns still on
        // their first two rows are exempt.
        let past_home = match color {
            Color::White => row < 6,
            Color::Black => row > 1,
        };
        if past_home {
            let stop_free = pawn
                .offset(step, 0)
                .is_some_and(|stop| board.is_empty(stop));
            let has_equal_or_leading_neighbor = own.iter().any(|&other| {
                other.col().abs_diff(col) == 1
                    && (other.row() == row || is_ahead(other.row(), row, color))
            });
            if stop_free && !has_equal_or_leading_neighbor {
                score -= 15;
            }
        }

        // Connected: an adjacent-file friend beside or directly covering it.
        let behind_row = (row as i8 - step) as usize;
        let connected = own.iter().any(|&other| {
            other.col().abs_diff(col) == 1
                && (other.row() == row || other.row() == behind_row)
        });
        if connected {
            score += 5;
        }
    }

    score
}

/// Is `row_a` strictly ahead of `row_b` from `color`'s point of view?
fn is_ahead(row_a: usize, row_b: usize, color: Color) -> bool {
    match color {
        Color::White => row_a < row_b,
        Color::Black => row_a > row_b,
    }
}
