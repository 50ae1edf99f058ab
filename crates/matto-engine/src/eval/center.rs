//! Center control and opening tempo.

use matto_core::{Board, Color, Piece, PieceKind, Square};

/// The four center squares.
const CENTER: [Square; 4] = [Square::D5, Square::E5, Square::D4, Square::E4];

/// The twelve squares ringing the center.
const EXTENDED_CENTER: [Square; 12] = [
    Square::C6, Square::D6, Square::E6, Square::F6,
    Square::C5, Square::F5, Square::C4, Square::F4,
    Square::C3, Square::D3, Square::E3, Square::F3,
];

/// Center-control difference, White minus Black: occupying a center square
/// counts 20, a pawn bearing on one counts 15, extended-center occupancy 5.
pub fn center_control(board: &Board) -> i32 {
    let mut score = 0;

    for sq in CENTER {
        if let Some(piece) = board.piece_on(sq) {
            score += signed(20, piece.color());
        }
        for color in Color::ALL {
            let source_row = -color.pawn_step();
            let pawn = Piece::new(PieceKind::Pawn, color);
            for dc in [-1, 1] {
                if sq
                    .offset(source_row, dc)
                    .is_some_and(|from| board.piece_on(from) == Some(pawn))
                {
                    score += signed(15, color);
                }
            }
        }
    }

    for sq in EXTENDED_CENTER {
        if let Some(piece) = board.piece_on(sq) {
            score += signed(5, piece.color());
        }
    }

    score
}

/// Development tempo, applied only while the board is still crowded (at
/// least 20 pieces) and outside the endgame: each minor still on its home
/// square costs 10, a visibly castled king earns 25.
pub fn tempo(board: &Board, endgame: bool) -> i32 {
    if endgame || board.occupied_count() < 20 {
        return 0;
    }
    side_tempo(board, Color::White) - side_tempo(board, Color::Black)
}

fn side_tempo(board: &Board, color: Color) -> i32 {
    let mut score = 0;
    let back = color.back_row() as i8;

    let home_minors = [
        (PieceKind::Knight, 1),
        (PieceKind::Knight, 6),
        (PieceKind::Bishop, 2),
        (PieceKind::Bishop, 5),
    ];
    for (kind, col) in home_minors {
        if Square::from_row_col(back, col)
            .is_some_and(|sq| board.piece_on(sq) == Some(Piece::new(kind, color)))
        {
            score -= 10;
        }
    }

    let king = board.king_square(color);
    if king.row() as i8 == back && (king.col() <= 2 || king.col() >= 6) {
        score += 25;
    }

    score
}

fn signed(value: i32, color: Color) -> i32 {
    match color {
        Color::White => value,
        Color::Black => -value,
    }
}

#[cfg(test)]
mod tests {
    use matto_core::{Board, Square};

    use super::{center_control, tempo};

    #[test]
    fn starting_position_is_balanced() {
        let board = Board::starting_position();
        assert_eq!(center_control(&board), 0);
        assert_eq!(tempo(&board, false), 0);
    }

    #[test]
    fn central_pawn_earns_occupancy_and_control() {
        // After 1.e4: White occupies e4 (+20) and the e4 pawn bears on d5
        // and f5 (not center), while it no longer bears on d3/f3 squares'
        // occupants; net must favor White.
        let mut board = Board::starting_position();
        board.apply_move(Square::E2, Square::E4);
        assert!(center_control(&board) > 0);
    }

    #[test]
    fn developed_minor_stops_paying_tempo() {
        let mut board = Board::starting_position();
        board.apply_move(Square::G1, Square::F3);
        // White has three home minors left against Black's four.
        assert_eq!(tempo(&board, false), 10);
    }

    #[test]
    fn castled_king_earns_the_bonus() {
        let mut board = Board::starting_position();
        for (from, to) in [
            (Square::E2, Square::E4),
            (Square::E7, Square::E5),
            (Square::G1, Square::F3),
            (Square::B8, Square::C6),
            (Square::F1, Square::C4),
            (Square::F8, Square::C5),
        ] {
            board.apply_move(from, to);
        }
        let before = tempo(&board, false);
        board.apply_castling(Square::E1, Square::G1, Square::H1, Square::F1);
        let after = tempo(&board, false);
        assert_eq!(after - before, 25);
    }

    #[test]
    fn tempo_live_at_exactly_twenty_pieces() {
        // Kings, a rook, an undeveloped white knight, and sixteen pawns:
        // exactly 20 occupied squares, the inclusive edge of the trigger.
        let mut cells = vec!['.'; 64];
        cells[Square::E1.index()] = 'K';
        cells[Square::E8.index()] = 'k';
        cells[Square::A1.index()] = 'R';
        cells[Square::B1.index()] = 'N';
        for col in 0..8 {
            cells[Square::A2.index() + col] = 'P';
            cells[Square::A7.index() + col] = 'p';
        }
        let board = Board::from_snapshot(&cells.into_iter().collect::<String>()).unwrap();
        assert_eq!(board.occupied_count(), 20);
        assert_eq!(tempo(&board, false), -10);
    }

    #[test]
    fn tempo_silent_below_twenty_pieces() {
        // The same shape minus the rook drops to 19 pieces and mutes the term.
        let mut cells = vec!['.'; 64];
        cells[Square::E1.index()] = 'K';
        cells[Square::E8.index()] = 'k';
        cells[Square::B1.index()] = 'N';
        for col in 0..8 {
            cells[Square::A2.index() + col] = 'P';
            cells[Square::A7.index() + col] = 'p';
        }
        let board = Board::from_snapshot(&cells.into_iter().collect::<String>()).unwrap();
        assert_eq!(board.occupied_count(), 19);
        assert_eq!(tempo(&board, false), 0);
    }

    #[test]
    fn tempo_silent_on_sparse_boards() {
        let mut cells = vec!['.'; 64];
        cells[Square::G1.index()] = 'K';
        cells[Square::G8.index()] = 'k';
        cells[Square::B1.index()] = 'N';
        let board = Board::from_snapshot(&cells.into_iter().collect::<String>()).unwrap();
        assert_eq!(tempo(&board, false), 0);
        assert_eq!(tempo(&board, true), 0);
    }
}
