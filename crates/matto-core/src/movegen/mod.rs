//! Legal move generation.
//!
//! Each piece module enumerates pseudo-moves (geometry and blockers only);
//! the self-check filter then applies every candidate to a cloned position
//! and keeps it only if the mover's own king ends up unattacked. Consumers
//! of [`legal_moves_for`] therefore only ever see legal moves.

mod king;
mod knights;
mod pawns;
mod sliders;

use crate::attacks::is_king_attacked;
use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Pseudo-move destinations for the piece on `sq`.
///
/// Respects piece geometry and blockers but not king safety. An empty square
/// yields no moves. Castling candidates appear here once the moved flags and
/// the empty path allow them; their check conditions are left to the
/// legality layer.
pub fn pseudo_moves_for(board: &Board, sq: Square) -> Vec<Square> {
    let Some(piece) = board.piece_on(sq) else {
        return Vec::new();
    };
    let color = piece.color();
    match piece.kind() {
        PieceKind::Pawn => pawns::pseudo(board, sq, color),
        PieceKind::Knight => knights::pseudo(board, sq, color),
        PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
            sliders::pseudo(board, sq, color, piece.kind())
        }
        PieceKind::King => king::pseudo(board, sq, color),
    }
}

/// Legal destinations for the piece on `sq`.
pub fn legal_moves_for(board: &Board, sq: Square) -> Vec<Square> {
    let Some(piece) = board.piece_on(sq) else {
        return Vec::new();
    };
    let color = piece.color();
    match piece.kind() {
        PieceKind::King => king::legal(board, sq, color),
        _ => filter_self_check(board, sq, color, pseudo_moves_for(board, sq)),
    }
}

/// All legal moves for the side to move, scanning squares in index order.
///
/// A pawn move onto the last rank is emitted once with the promotion choice
/// deferred; callers that apply such a move pick the promoted piece.
pub fn all_legal_moves(board: &Board) -> Vec<Move> {
    let mover = board.side_to_move();
    let mut moves = Vec::new();
    for from in Square::all() {
        let Some(piece) = board.piece_on(from) else {
            continue;
        };
        if piece.color() != mover {
            continue;
        }
        for to in legal_moves_for(board, from) {
            moves.push(Move::new(from, to));
        }
    }
    moves
}

/// Keep only the candidates that leave the mover's king unattacked after a
/// speculative apply on a cloned position.
pub(crate) fn filter_self_check(
    board: &Board,
    from: Square,
    mover: Color,
    candidates: Vec<Square>,
) -> Vec<Square> {
    candidates
        .into_iter()
        .filter(|&to| {
            let mut probe = board.clone();
            probe.apply_move(from, to);
            !is_king_attacked(&probe, mover)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{all_legal_moves, legal_moves_for, pseudo_moves_for};
    use crate::board::Board;
    use crate::color::Color;
    use crate::square::Square;

    fn board_with(side: Color, pieces: &[(Square, char)]) -> Board {
        let mut cells = vec!['.'; 64];
        for &(sq, c) in pieces {
            cells[sq.index()] = c;
        }
        Board::from_snapshot_for(&cells.into_iter().collect::<String>(), side).unwrap()
    }

    #[test]
    fn starting_position_has_twenty_moves() {
        let board = Board::starting_position();
        assert_eq!(all_legal_moves(&board).len(), 20);
    }

    #[test]
    fn empty_square_yields_nothing() {
        let board = Board::starting_position();
        assert!(pseudo_moves_for(&board, Square::E4).is_empty());
        assert!(legal_moves_for(&board, Square::E4).is_empty());
    }

    #[test]
    fn legal_moves_are_a_subset_of_pseudo_moves() {
        let mut board = Board::starting_position();
        let line = [
            (Square::E2, Square::E4),
            (Square::E7, Square::E5),
            (Square::G1, Square::F3),
            (Square::B8, Square::C6),
            (Square::F1, Square::B5),
            (Square::D7, Square::D6),
        ];
        for (from, to) in line {
            for sq in Square::all() {
                let pseudo = pseudo_moves_for(&board, sq);
                for dest in legal_moves_for(&board, sq) {
                    assert!(
                        pseudo.contains(&dest),
                        "legal {sq}->{dest} missing from pseudo set"
                    );
                }
            }
            board.apply_move(from, to);
        }
    }

    #[test]
    fn absolutely_pinned_piece_cannot_move() {
        // White knight on e4 is pinned against the king by the e8 rook.
        let board = board_with(
            Color::White,
            &[
                (Square::E1, 'K'),
                (Square::E4, 'N'),
                (Square::E8, 'r'),
                (Square::A8, 'k'),
            ],
        );
        assert!(legal_moves_for(&board, Square::E4).is_empty());
        assert!(!pseudo_moves_for(&board, Square::E4).is_empty());
    }

    #[test]
    fn pinned_slider_may_move_along_the_pin() {
        let board = board_with(
            Color::White,
            &[
                (Square::E1, 'K'),
                (Square::E4, 'R'),
                (Square::E8, 'r'),
                (Square::A8, 'k'),
            ],
        );
        let moves = legal_moves_for(&board, Square::E4);
        assert!(moves.contains(&Square::E5));
        assert!(moves.contains(&Square::E8), "capturing the pinner is legal");
        assert!(!moves.contains(&Square::D4));
        assert!(!moves.contains(&Square::H4));
    }

    #[test]
    fn check_must_be_answered() {
        // Black queen gives check on the e-file; only blocks, captures, or
        // king moves are legal.
        let board = board_with(
            Color::White,
            &[
                (Square::E1, 'K'),
                (Square::D1, 'Q'),
                (Square::A2, 'P'),
                (Square::E7, 'q'),
                (Square::A8, 'k'),
            ],
        );
        let moves = all_legal_moves(&board);
        for mv in &moves {
            assert_ne!(mv.from, Square::A2, "pawn moves cannot answer the check");
        }
        assert!(
            moves.iter().any(|m| m.from == Square::D1 && m.to == Square::E2),
            "queen block on e2 must be found"
        );
    }

    #[test]
    fn en_passant_capture_is_legal() {
        let mut board = Board::starting_position();
        board.apply_move(Square::E2, Square::E4);
        board.apply_move(Square::A7, Square::A6);
        board.apply_move(Square::E4, Square::E5);
        board.apply_move(Square::D7, Square::D5);

        let moves = legal_moves_for(&board, Square::E5);
        assert!(moves.contains(&Square::D6));

        board.apply_move(Square::E5, Square::D6);
        assert!(board.is_empty(Square::D5));
        assert!(board.is_empty(Square::E5));
    }

    #[test]
    fn en_passant_refused_when_it_exposes_the_king() {
        // King and enemy rook share the 5th rank with both pawns; taking en
        // passant would remove both blockers at once.
        let mut board = board_with(
            Color::Black,
            &[
                (Square::A5, 'K'),
                (Square::B5, 'P'),
                (Square::C7, 'p'),
                (Square::H5, 'r'),
                (Square::H8, 'k'),
            ],
        );
        board.apply_move(Square::C7, Square::C5);
        assert_eq!(board.en_passant_target(), Some(Square::C6));
        let moves = legal_moves_for(&board, Square::B5);
        assert!(
            !moves.contains(&Square::C6),
            "en passant would leave the king in check: {moves:?}"
        );
    }

    #[test]
    fn castling_available_in_developed_italian() {
        // 1.Nf3 Nc6 2.e4 e5 3.Bc4 Bc5: White may castle kingside.
        let mut board = Board::starting_position();
        for (from, to) in [
            (Square::G1, Square::F3),
            (Square::B8, Square::C6),
            (Square::E2, Square::E4),
            (Square::E7, Square::E5),
            (Square::F1, Square::C4),
            (Square::F8, Square::C5),
        ] {
            board.apply_move(from, to);
        }
        let moves = legal_moves_for(&board, Square::E1);
        assert!(moves.contains(&Square::G1), "kingside castle expected: {moves:?}");
        assert!(!moves.contains(&Square::C1));
    }

    #[test]
    fn stalemated_side_has_no_moves() {
        // Black king in the corner, boxed in by the white queen.
        let board = board_with(
            Color::Black,
            &[(Square::A8, 'k'), (Square::B6, 'Q'), (Square::C7, 'K')],
        );
        assert!(all_legal_moves(&board).is_empty());
    }

    #[test]
    fn promotion_push_appears_once() {
        let board = board_with(
            Color::White,
            &[(Square::E1, 'K'), (Square::H8, 'k'), (Square::A7, 'P')],
        );
        let moves: Vec<_> = all_legal_moves(&board)
            .into_iter()
            .filter(|m| m.from == Square::A7)
            .collect();
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].to, Square::A8);
        assert_eq!(moves[0].promotion, None, "piece choice is deferred");
    }
}
