//! The three mutation operations: plain move, promotion, and castling.
//!
//! Every operation preserves the position invariants and toggles the side to
//! move. Speculative application clones the board first; these methods then
//! mutate in place.

use crate::board::Board;
use crate::castling::CastleSide;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

impl Board {
    /// Apply a plain move from `from` to `to`.
    ///
    /// Handles captures, the en-passant capture (a pawn landing on the
    /// current en-passant target removes the victim pawn), the double pawn
    /// push (which arms a new en-passant pair for exactly one ply), and
    /// castling-flag updates for kings and original-square rooks.
    ///
    /// An empty source square is a caller bug; the board is left unchanged.
    pub fn apply_move(&mut self, from: Square, to: Square) {
        let old_target = self.en_passant_target();
        let old_victim = self.en_passant_victim();
        self.clear_en_passant();

        let Some(moving) = self.piece_on(from) else {
            debug_assert!(false, "apply_move from empty square {from}");
            return;
        };

        self.update_castling_flags(from, moving);

        // A pawn landing on the armed target square captures en passant.
        if moving.kind() == PieceKind::Pawn
            && old_target == Some(to)
            && let Some(victim) = old_victim
        {
            self.remove_piece(victim);
        }

        // A double push arms the passed-over square for the next ply.
        if moving.kind() == PieceKind::Pawn && from.row().abs_diff(to.row()) == 2 {
            let step = moving.color().pawn_step();
            if let Some(passed) = from.offset(step, 0) {
                self.set_en_passant(passed, to);
            }
        }

        if !self.is_empty(to) {
            self.remove_piece(to);
        }
        self.remove_piece(from);
        self.place_piece(to, moving);

        self.switch_side();
    }

    /// Apply a pawn promotion: as [`Board::apply_move`], but the piece placed
    /// on `to` is the chosen promotion piece.
    pub fn apply_promotion(&mut self, from: Square, to: Square, promoted: PieceKind) {
        self.clear_en_passant();

        let Some(pawn) = self.piece_on(from) else {
            debug_assert!(false, "apply_promotion from empty square {from}");
            return;
        };
        debug_assert_eq!(pawn.kind(), PieceKind::Pawn, "apply_promotion of a non-pawn");

        if !self.is_empty(to) {
            self.remove_piece(to);
        }
        self.remove_piece(from);
        self.place_piece(to, Piece::new(promoted, pawn.color()));

        self.switch_side();
    }

    /// Apply a castle as one atomic two-piece move.
    ///
    /// No capture is possible; the en-passant pair is cleared and both the
    /// king-moved and the relevant rook-moved flags are set.
    pub fn apply_castling(
        &mut self,
        king_from: Square,
        king_to: Square,
        rook_from: Square,
        rook_to: Square,
    ) {
        self.clear_en_passant();

        let (Some(king), Some(rook)) = (self.piece_on(king_from), self.piece_on(rook_from))
        else {
            debug_assert!(false, "apply_castling without king and rook in place");
            return;
        };

        self.update_castling_flags(king_from, king);
        self.update_castling_flags(rook_from, rook);

        self.remove_piece(king_from);
        self.place_piece(king_to, king);
        self.remove_piece(rook_from);
        self.place_piece(rook_to, rook);

        self.switch_side();
    }

    /// Set the moved flag for a king leaving its square or a rook leaving its
    /// home corner.
    fn update_castling_flags(&mut self, from: Square, moving: Piece) {
        let color = moving.color();
        match moving.kind() {
            PieceKind::King => self.castling_mut().mark_king_moved(color),
            PieceKind::Rook => {
                for side in CastleSide::ALL {
                    if side.rook_home(color) == from {
                        self.castling_mut().mark_rook_moved(color, side);
                    }
                }
            }
            _ => {}
        }
    }
}

/// Geometry helper: the castle wing implied by a two-file king move, if any.
pub fn castle_side_of_king_move(board: &Board, from: Square, to: Square) -> Option<CastleSide> {
    let piece = board.piece_on(from)?;
    if piece.kind() != PieceKind::King || from.row() != to.row() {
        return None;
    }
    match to.col() as i8 - from.col() as i8 {
        2 => Some(CastleSide::Kingside),
        -2 => Some(CastleSide::Queenside),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::castle_side_of_king_move;
    use crate::board::Board;
    use crate::castling::CastleSide;
    use crate::color::Color;
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    fn board_with(side: Color, pieces: &[(Square, char)]) -> Board {
        let mut cells = vec!['.'; 64];
        for &(sq, c) in pieces {
            cells[sq.index()] = c;
        }
        let snapshot: String = cells.into_iter().collect();
        Board::from_snapshot_for(&snapshot, side).unwrap()
    }

    #[test]
    fn double_push_arms_en_passant() {
        let mut board = Board::starting_position();
        board.apply_move(Square::E2, Square::E4);

        assert_eq!(board.piece_on(Square::E4), Some(Piece::WHITE_PAWN));
        assert_eq!(board.piece_on(Square::E2), None);
        assert_eq!(board.en_passant_target(), Some(Square::E3));
        assert_eq!(board.en_passant_victim(), Some(Square::E4));
        assert_eq!(board.side_to_move(), Color::Black);
        board.validate().unwrap();
    }

    #[test]
    fn en_passant_disarms_after_one_ply() {
        let mut board = Board::starting_position();
        board.apply_move(Square::E2, Square::E4);
        board.apply_move(Square::G8, Square::F6);
        assert_eq!(board.en_passant_target(), None);
        assert_eq!(board.en_passant_victim(), None);
    }

    #[test]
    fn single_push_does_not_arm_en_passant() {
        let mut board = Board::starting_position();
        board.apply_move(Square::E2, Square::E3);
        assert_eq!(board.en_passant_target(), None);
    }

    #[test]
    fn capture_removes_piece_from_index() {
        // 1.e4 d5 2.exd5
        let mut board = Board::starting_position();
        board.apply_move(Square::E2, Square::E4);
        board.apply_move(Square::D7, Square::D5);
        board.apply_move(Square::E4, Square::D5);

        assert_eq!(board.piece_on(Square::D5), Some(Piece::WHITE_PAWN));
        assert_eq!(board.piece_on(Square::E4), None);
        assert_eq!(board.positions(Piece::BLACK_PAWN).len(), 7);
        board.validate().unwrap();
    }

    #[test]
    fn en_passant_capture_removes_victim() {
        // White pawn on e5; Black answers with the double push d7-d5.
        let mut board = board_with(
            Color::Black,
            &[
                (Square::E1, 'K'),
                (Square::E8, 'k'),
                (Square::E5, 'P'),
                (Square::D7, 'p'),
            ],
        );
        board.apply_move(Square::D7, Square::D5);
        assert_eq!(board.en_passant_target(), Some(Square::D6));
        assert_eq!(board.en_passant_victim(), Some(Square::D5));

        board.apply_move(Square::E5, Square::D6);
        assert_eq!(board.piece_on(Square::D6), Some(Piece::WHITE_PAWN));
        assert_eq!(board.piece_on(Square::D5), None);
        assert_eq!(board.piece_on(Square::E5), None);
        assert!(board.positions(Piece::BLACK_PAWN).is_empty());
        board.validate().unwrap();
    }

    #[test]
    fn promotion_swaps_pawn_for_chosen_piece() {
        let mut board = board_with(
            Color::White,
            &[(Square::E1, 'K'), (Square::E8, 'k'), (Square::A7, 'P')],
        );
        board.apply_promotion(Square::A7, Square::A8, PieceKind::Queen);

        assert_eq!(board.piece_on(Square::A8), Some(Piece::WHITE_QUEEN));
        assert_eq!(board.piece_on(Square::A7), None);
        assert!(board.positions(Piece::WHITE_PAWN).is_empty());
        assert_eq!(board.positions(Piece::WHITE_QUEEN), &[Square::A8]);
        board.validate().unwrap();
    }

    #[test]
    fn capture_promotion() {
        let mut board = board_with(
            Color::White,
            &[
                (Square::E1, 'K'),
                (Square::E8, 'k'),
                (Square::B7, 'P'),
                (Square::A8, 'r'),
            ],
        );
        board.apply_promotion(Square::B7, Square::A8, PieceKind::Knight);
        assert_eq!(board.piece_on(Square::A8), Some(Piece::WHITE_KNIGHT));
        assert!(board.positions(Piece::BLACK_ROOK).is_empty());
        board.validate().unwrap();
    }

    #[test]
    fn kingside_castle_moves_both_pieces() {
        let mut board = board_with(
            Color::White,
            &[
                (Square::E1, 'K'),
                (Square::H1, 'R'),
                (Square::A1, 'R'),
                (Square::E8, 'k'),
            ],
        );
        board.apply_castling(Square::E1, Square::G1, Square::H1, Square::F1);

        assert_eq!(board.piece_on(Square::G1), Some(Piece::WHITE_KING));
        assert_eq!(board.piece_on(Square::F1), Some(Piece::WHITE_ROOK));
        assert_eq!(board.piece_on(Square::E1), None);
        assert_eq!(board.piece_on(Square::H1), None);
        assert!(board.castling().king_moved(Color::White));
        assert!(board.castling().rook_moved(Color::White, CastleSide::Kingside));
        assert_eq!(board.side_to_move(), Color::Black);
        board.validate().unwrap();
    }

    #[test]
    fn queenside_castle_black() {
        let mut board = board_with(
            Color::Black,
            &[
                (Square::E8, 'k'),
                (Square::A8, 'r'),
                (Square::E1, 'K'),
            ],
        );
        board.apply_castling(Square::E8, Square::C8, Square::A8, Square::D8);
        assert_eq!(board.piece_on(Square::C8), Some(Piece::BLACK_KING));
        assert_eq!(board.piece_on(Square::D8), Some(Piece::BLACK_ROOK));
        assert!(board.castling().rook_moved(Color::Black, CastleSide::Queenside));
        board.validate().unwrap();
    }

    #[test]
    fn rook_leaving_home_sets_its_flag_only() {
        let mut board = Board::starting_position();
        board.apply_move(Square::H2, Square::H4);
        board.apply_move(Square::H7, Square::H5);
        board.apply_move(Square::H1, Square::H3);

        assert!(board.castling().rook_moved(Color::White, CastleSide::Kingside));
        assert!(!board.castling().rook_moved(Color::White, CastleSide::Queenside));
        assert!(!board.castling().king_moved(Color::White));
    }

    #[test]
    fn king_move_sets_king_flag() {
        let mut board = Board::starting_position();
        board.apply_move(Square::E2, Square::E4);
        board.apply_move(Square::E7, Square::E5);
        board.apply_move(Square::E1, Square::E2);
        assert!(board.castling().king_moved(Color::White));
    }

    #[test]
    fn flags_are_monotonic_over_a_line() {
        let mut board = Board::starting_position();
        let mut previous = *board.castling();
        let line = [
            (Square::E2, Square::E4),
            (Square::E7, Square::E5),
            (Square::G1, Square::F3),
            (Square::B8, Square::C6),
            (Square::F1, Square::C4),
            (Square::F8, Square::C5),
            (Square::E1, Square::E2),
        ];
        for (from, to) in line {
            board.apply_move(from, to);
            let current = *board.castling();
            assert!(previous.monotonic_le(&current));
            previous = current;
        }
    }

    #[test]
    fn castle_side_detection() {
        let board = board_with(
            Color::White,
            &[(Square::E1, 'K'), (Square::H1, 'R'), (Square::E8, 'k')],
        );
        assert_eq!(
            castle_side_of_king_move(&board, Square::E1, Square::G1),
            Some(CastleSide::Kingside)
        );
        assert_eq!(
            castle_side_of_king_move(&board, Square::E1, Square::C1),
            Some(CastleSide::Queenside)
        );
        assert_eq!(castle_side_of_king_move(&board, Square::E1, Square::F1), None);
        assert_eq!(castle_side_of_king_move(&board, Square::H1, Square::F1), None);
    }
}
