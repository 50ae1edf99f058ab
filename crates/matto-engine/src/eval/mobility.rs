//! Mobility, space, and trapped-piece terms, all from pseudo-move counts.

use matto_core::{Board, Color, Piece, PieceKind, Square, pseudo_moves_for};

/// Per-move weights: knights profit most from each extra square, queens
/// least (they rarely lack squares).
const MOBILITY_WEIGHTS: [(PieceKind, i32); 4] = [
    (PieceKind::Knight, 4),
    (PieceKind::Bishop, 3),
    (PieceKind::Rook, 2),
    (PieceKind::Queen, 1),
];

/// Weighted pseudo-move count difference, White minus Black.
pub fn mobility(board: &Board) -> i32 {
    side_mobility(board, Color::White) - side_mobility(board, Color::Black)
}

fn side_mobility(board: &Board, color: Color) -> i32 {
    let mut total = 0;
    for (kind, weight) in MOBILITY_WEIGHTS {
        for &sq in board.positions(Piece::new(kind, color)) {
            total += pseudo_moves_for(board, sq).len() as i32 * weight;
        }
    }
    total
}

/// Space: pseudo-move destinations inside the enemy half, White minus Black.
/// Every piece counts here, pawns and kings included.
pub fn space(board: &Board) -> i32 {
    side_space(board, Color::White) - side_space(board, Color::Black)
}

fn side_space(board: &Board, color: Color) -> i32 {
    let mut total = 0;
    for kind in PieceKind::ALL {
        for &sq in board.positions(Piece::new(kind, color)) {
            total += pseudo_moves_for(board, sq)
                .iter()
                .filter(|target| in_enemy_half(**target, color))
                .count() as i32;
        }
    }
    total
}

fn in_enemy_half(sq: Square, color: Color) -> bool {
    match color {
        Color::White => sq.row() < 4,
        Color::Black => sq.row() >= 4,
    }
}

/// Penalty for pieces with almost nowhere to go: a knight or bishop with at
/// most two pseudo-moves costs 50, a rook with none costs 100. White minus
/// Black.
pub fn trapped_pieces(board: &Board) -> i32 {
    side_trapped(board, Color::White) - side_trapped(board, Color::Black)
}

fn side_trapped(board: &Board, color: Color) -> i32 {
    let mut penalty = 0;
    for kind in [PieceKind::Knight, PieceKind::Bishop] {
        for &sq in board.positions(Piece::new(kind, color)) {
            if pseudo_moves_for(board, sq).len() <= 2 {
                penalty -= 50;
            }
        }
    }
    for &sq in board.positions(Piece::new(PieceKind::Rook, color)) {
        if pseudo_moves_for(board, sq).is_empty() {
            penalty -= 100;
        }
    }
    penalty
}

#[cfg(test)]
mod tests {
    use matto_core::{Board, Square};

    use super::{mobility, space, trapped_pieces};

    #[test]
    fn starting_position_is_balanced() {
        let board = Board::starting_position();
        assert_eq!(mobility(&board), 0);
        assert_eq!(space(&board), 0);
    }

    #[test]
    fn open_lines_raise_mobility() {
        // 1.e4 frees the f1 bishop and the queen while Black is untouched.
        let mut board = Board::starting_position();
        board.apply_move(Square::E2, Square::E4);
        assert!(mobility(&board) > 0);
        assert!(space(&board) > 0);
    }

    #[test]
    fn starting_rooks_are_not_trapped() {
        // The corner rooks have zero moves, which is exactly the trapped-rook
        // penalty for both sides at once; it must cancel.
        let board = Board::starting_position();
        assert_eq!(trapped_pieces(&board), 0);
    }

    #[test]
    fn lone_boxed_rook_is_penalized() {
        // White rook on a1 walled in by its own pieces; Black's rook roams on
        // an open board.
        let mut cells = vec!['.'; 64];
        cells[Square::E1.index()] = 'K';
        cells[Square::A1.index()] = 'R';
        cells[Square::A2.index()] = 'P';
        cells[Square::B1.index()] = 'N';
        cells[Square::B2.index()] = 'P';
        cells[Square::E8.index()] = 'k';
        cells[Square::D4.index()] = 'r';
        let board = Board::from_snapshot(&cells.into_iter().collect::<String>()).unwrap();
        assert!(trapped_pieces(&board) <= -100, "got {}", trapped_pieces(&board));
    }

    #[test]
    fn cornered_knight_is_penalized() {
        let mut cells = vec!['.'; 64];
        cells[Square::E1.index()] = 'K';
        cells[Square::E8.index()] = 'k';
        cells[Square::A1.index()] = 'N';
        let board = Board::from_snapshot(&cells.into_iter().collect::<String>()).unwrap();
        // Two jumps from the corner is within the trapped threshold.
        assert_eq!(trapped_pieces(&board), -50);
    }
}
