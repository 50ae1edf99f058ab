//! Piece-coordination and tactical pattern terms.
//!
//! Everything here is summed per side and returned as White minus Black:
//! batteries, the bishop pair and bad bishops, knight forks and outposts,
//! rook placement patterns, the queenside majority, endgame king activity,
//! pins against the king, weak squares, fianchettos, and connected rooks.

use matto_core::{Board, Color, Piece, PieceKind, Square};

const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (2, 1), (2, -1), (-2, 1), (-2, -1),
    (1, 2), (1, -2), (-1, 2), (-1, -2),
];

/// Pattern-term difference, White minus Black.
pub fn patterns(board: &Board, phase: f32) -> i32 {
    side_patterns(board, Color::White, phase) - side_patterns(board, Color::Black, phase)
        + queenside_majority(board, phase)
}

fn side_patterns(board: &Board, color: Color, phase: f32) -> i32 {
    let mut score = 0;
    score += batteries(board, color);
    score += bishop_patterns(board, color);
    score += knight_forks(board, color);
    score += rook_patterns(board, color);
    score += knight_outposts(board, color);
    score += pins_against_king(board, color);
    score += weak_squares(board, color);
    score += fianchettos(board, color);
    score += connected_rooks(board, color);
    if phase > 0.7 {
        score += king_activity(board, color);
    }
    score
}

/// Queen and rook lined up on a file (15, plus 10 when the file carries an
/// enemy pawn ahead of them) or on a rank (12).
fn batteries(board: &Board, color: Color) -> i32 {
    let mut score = 0;
    for &queen in board.positions(Piece::new(PieceKind::Queen, color)) {
        for &rook in board.positions(Piece::new(PieceKind::Rook, color)) {
            if queen.col() == rook.col() {
                score += 15;
                if file_has_enemy_pawn_ahead(board, color, queen, rook) {
                    score += 10;
                }
            } else if queen.row() == rook.row() {
                score += 12;
            }
        }
    }
    score
}

fn file_has_enemy_pawn_ahead(board: &Board, color: Color, a: Square, b: Square) -> bool {
    let enemy_pawn = Piece::new(PieceKind::Pawn, color.flip());
    let col = a.col() as i8;
    let rows: Vec<usize> = match color {
        Color::White => (0..a.row().min(b.row())).collect(),
        Color::Black => (a.row().max(b.row()) + 1..8).collect(),
    };
    rows.into_iter().any(|row| {
        Square::from_row_col(row as i8, col)
            .is_some_and(|sq| board.piece_on(sq) == Some(enemy_pawn))
    })
}

/// Bishop pair (35, plus 15 when the two stand on opposite shades) and the
/// bad-bishop penalty for own pawns crowding the bishop's shade.
fn bishop_patterns(board: &Board, color: Color) -> i32 {
    let bishops = board.positions(Piece::new(PieceKind::Bishop, color));
    let pawns = board.positions(Piece::new(PieceKind::Pawn, color));
    let mut score = 0;

    if bishops.len() >= 2 {
        score += 35;
        if bishops.len() == 2 && shade(bishops[0]) != shade(bishops[1]) {
            score += 15;
        }
    }

    for &bishop in bishops {
        let crowding = pawns
            .iter()
            .filter(|&&pawn| shade(pawn) == shade(bishop))
            .count();
        if crowding >= 5 {
            score -= 25;
        } else if crowding >= 3 {
            score -= 10;
        }
    }

    score
}

fn shade(sq: Square) -> usize {
    (sq.row() + sq.col()) % 2
}

/// Knights attacking two or more enemy pieces (5, plus 10 when a rook or
/// queen is among the targets).
fn knight_forks(board: &Board, color: Color) -> i32 {
    let mut score = 0;
    for &knight in board.positions(Piece::new(PieceKind::Knight, color)) {
        let mut targets = 0;
        let mut heavy_targets = 0;
        for (dr, dc) in KNIGHT_JUMPS {
            let Some(piece) = knight.offset(dr, dc).and_then(|sq| board.piece_on(sq)) else {
                continue;
            };
            if piece.color() != color {
                targets += 1;
                if matches!(piece.kind(), PieceKind::Rook | PieceKind::Queen) {
                    heavy_targets += 1;
                }
            }
        }
        if targets >= 2 {
            score += 5;
            if heavy_targets >= 1 {
                score += 10;
            }
        }
    }
    score
}

/// Rook placement: doubled rooks on a file, a rook behind a passed pawn,
/// rooks on the seventh rank, and rooks on open or semi-open files.
fn rook_patterns(board: &Board, color: Color) -> i32 {
    let rooks = board.positions(Piece::new(PieceKind::Rook, color));
    let own_pawns = board.positions(Piece::new(PieceKind::Pawn, color));
    let enemy_pawns = board.positions(Piece::new(PieceKind::Pawn, color.flip()));
    let mut score = 0;

    // Doubled rooks; better still on a file without an own pawn.
    for (i, &first) in rooks.iter().enumerate() {
        for &second in &rooks[i + 1..] {
            if first.col() == second.col() {
                score += 20;
                if own_pawns.iter().all(|pawn| pawn.col() != first.col()) {
                    score += 15;
                }
            }
        }
    }

    // Rook behind an own passed pawn.
    let step = color.pawn_step();
    for &pawn in own_pawns {
        let passed = !enemy_pawns.iter().any(|other| {
            other.col().abs_diff(pawn.col()) <= 1 && is_ahead(other.row(), pawn.row(), color)
        });
        if !passed {
            continue;
        }
        let mut current = pawn;
        while let Some(next) = current.offset(-step, 0) {
            match board.piece_on(next) {
                None => current = next,
                Some(piece) => {
                    if piece == Piece::new(PieceKind::Rook, color) {
                        score += 20;
                    }
                    break;
                }
            }
        }
    }

    // Rook on the seventh rank, more with a partner there.
    let seventh = (color.promotion_row() as i8 - step) as usize;
    for &rook in rooks {
        if rook.row() == seventh {
            score += 20;
            if rooks
                .iter()
                .any(|&other| other != rook && other.row() == seventh)
            {
                score += 10;
            }
        }
    }

    // Open and semi-open files (counted once per file).
    for col in 0..8 {
        let has_rook = rooks.iter().any(|rook| rook.col() == col);
        let has_own_pawn = own_pawns.iter().any(|pawn| pawn.col() == col);
        let has_enemy_pawn = enemy_pawns.iter().any(|pawn| pawn.col() == col);
        if has_rook && !has_own_pawn {
            score += if has_enemy_pawn { 12 } else { 25 };
        }
    }

    score
}

/// A knight in enemy territory, shielded by an own pawn and out of reach of
/// every enemy pawn, is worth 30.
fn knight_outposts(board: &Board, color: Color) -> i32 {
    let own_pawn = Piece::new(PieceKind::Pawn, color);
    let enemy_pawns = board.positions(Piece::new(PieceKind::Pawn, color.flip()));
    let step = color.pawn_step();
    let mut score = 0;

    for &knight in board.positions(Piece::new(PieceKind::Knight, color)) {
        if !in_enemy_territory(knight, color) {
            continue;
        }
        let protected = [-1, 1].into_iter().any(|dc| {
            knight
                .offset(-step, dc)
                .is_some_and(|sq| board.piece_on(sq) == Some(own_pawn))
        });
        if !protected {
            continue;
        }
        let evictable = enemy_pawns.iter().any(|pawn| {
            pawn.col().abs_diff(knight.col()) == 1 && is_ahead(pawn.row(), knight.row(), color)
        });
        if !evictable {
            score += 30;
        }
    }
    score
}

fn in_enemy_territory(sq: Square, color: Color) -> bool {
    match color {
        Color::White => sq.row() <= 3,
        Color::Black => sq.row() >= 4,
    }
}

/// Penalty for an own piece standing between the king and an enemy bishop
/// or queen on a diagonal.
fn pins_against_king(board: &Board, color: Color) -> i32 {
    let king = board.king_square(color);
    let mut score = 0;

    for (dr, dc) in DIAGONALS {
        let Some((shield_sq, shield)) = first_piece_along(board, king, dr, dc) else {
            continue;
        };
        if shield.color() != color || shield.kind() == PieceKind::King {
            continue;
        }
        if let Some((_, pinner)) = first_piece_along(board, shield_sq, dr, dc)
            && pinner.color() != color
            && matches!(pinner.kind(), PieceKind::Bishop | PieceKind::Queen)
        {
            score -= 15;
        }
    }
    score
}

fn first_piece_along(board: &Board, from: Square, dr: i8, dc: i8) -> Option<(Square, Piece)> {
    let mut current = from;
    while let Some(next) = current.offset(dr, dc) {
        if let Some(piece) = board.piece_on(next) {
            return Some((next, piece));
        }
        current = next;
    }
    None
}

/// Holes in the pawn structure: squares in the outpost zone that no own
/// pawn can ever attack cost 5, and 10 more when an enemy piece sits there.
fn weak_squares(board: &Board, color: Color) -> i32 {
    let own_pawns = board.positions(Piece::new(PieceKind::Pawn, color));
    let rows: [usize; 2] = match color {
        Color::White => [2, 3],
        Color::Black => [4, 5],
    };
    let mut score = 0;

    for row in rows {
        for col in 0..8usize {
            let coverable = own_pawns.iter().any(|pawn| {
                pawn.col().abs_diff(col) == 1 && is_ahead(row, pawn.row(), color)
            });
            if coverable {
                continue;
            }
            score -= 5;
            let sq = Square::from_row_col(row as i8, col as i8)
                .expect("outpost zone coordinates are on the board");
            if board.piece_on(sq).is_some_and(|piece| piece.color() != color) {
                score -= 10;
            }
        }
    }
    score
}

/// A bishop on its long-diagonal home flanked by the three shield pawns.
fn fianchettos(board: &Board, color: Color) -> i32 {
    let bishop = Piece::new(PieceKind::Bishop, color);
    let pawn = Piece::new(PieceKind::Pawn, color);
    let step = color.pawn_step();
    let bishop_row = color.back_row() as i8 + step;
    let shield_row = bishop_row + step;
    let mut score = 0;

    for col in [1i8, 6] {
        let seated = Square::from_row_col(bishop_row, col)
            .is_some_and(|sq| board.piece_on(sq) == Some(bishop));
        if !seated {
            continue;
        }
        let shielded = (col - 1..=col + 1).all(|shield_col| {
            Square::from_row_col(shield_row, shield_col)
                .is_some_and(|sq| board.piece_on(sq) == Some(pawn))
        });
        if shielded {
            score += 10;
        }
    }
    score
}

/// Two rooks seeing each other along an empty rank or file.
fn connected_rooks(board: &Board, color: Color) -> i32 {
    let rooks = board.positions(Piece::new(PieceKind::Rook, color));
    if rooks.len() != 2 {
        return 0;
    }
    let (a, b) = (rooks[0], rooks[1]);
    let clear = if a.row() == b.row() {
        let (lo, hi) = (a.col().min(b.col()), a.col().max(b.col()));
        (lo + 1..hi).all(|col| {
            Square::from_row_col(a.row() as i8, col as i8)
                .is_some_and(|sq| board.is_empty(sq))
        })
    } else if a.col() == b.col() {
        let (lo, hi) = (a.row().min(b.row()), a.row().max(b.row()));
        (lo + 1..hi).all(|row| {
            Square::from_row_col(row as i8, a.col() as i8)
                .is_some_and(|sq| board.is_empty(sq))
        })
    } else {
        return 0;
    };
    if clear { 8 } else { 0 }
}

/// Centralized king and king-supported pawns, once the endgame is near.
fn king_activity(board: &Board, color: Color) -> i32 {
    let king = board.king_square(color);
    let mut score = 0;
    if (2..=5).contains(&king.row()) && (2..=5).contains(&king.col()) {
        score += 20;
    }
    for &pawn in board.positions(Piece::new(PieceKind::Pawn, color)) {
        if pawn.row().abs_diff(king.row()) <= 1 && pawn.col().abs_diff(king.col()) <= 1 {
            score += 5;
        }
    }
    score
}

/// More pawns than the enemy on the a–d files matters once the game leans
/// toward the endgame.
fn queenside_majority(board: &Board, phase: f32) -> i32 {
    if phase <= 0.6 {
        return 0;
    }
    let count = |color| {
        board
            .positions(Piece::new(PieceKind::Pawn, color))
            .iter()
            .filter(|sq| sq.col() <= 3)
            .count()
    };
    let white = count(Color::White);
    let black = count(Color::Black);
    if white > black {
        15
    } else if black > white {
        -15
    } else {
        0
    }
}

fn is_ahead(row_a: usize, row_b: usize, color: Color) -> bool {
    match color {
        Color::White => row_a < row_b,
        Color::Black => row_a > row_b,
    }
}
