//! Resolution of algebraic tokens against a live position.
//!
//! A book recommendation is just text; this module turns it into a concrete
//! move by parsing the token, scanning the mover's pieces of the named kind,
//! and keeping the one whose legal moves include the target. Disambiguators
//! are honored before the scan, so `Nbd2` never resolves to the f3 knight.

use tracing::debug;

use matto_core::{
    Board, Move, NotationError, Piece, PieceKind, SanMove, legal_moves_for, parse_san,
};

/// Resolve an algebraic token to a legal move of the side to move.
///
/// # Errors
///
/// [`NotationError::UnknownToken`] when the token does not parse, and
/// [`NotationError::NoMatchingMove`] when no legal move of the position
/// matches it.
pub fn resolve_san(board: &Board, token: &str) -> Result<Move, NotationError> {
    let no_match = || NotationError::NoMatchingMove { token: token.to_string() };
    let mover = board.side_to_move();

    match parse_san(token)? {
        SanMove::Castle(side) => {
            let king_sq = board.king_square(mover);
            let target = side.king_target(mover);
            if legal_moves_for(board, king_sq).contains(&target) {
                Ok(Move::new(king_sq, target))
            } else {
                Err(no_match())
            }
        }
        SanMove::Normal { piece, from_file, from_rank, capture: _, target, promotion } => {
            let sources = board.positions(Piece::new(piece, mover));
            let mut candidates = sources.iter().copied().filter(|&sq| {
                if let Some(file) = from_file
                    && sq.file() != file
                {
                    return false;
                }
                if let Some(rank) = from_rank
                    && sq.rank() != rank
                {
                    return false;
                }
                // A pawn move without a capture mark is a push from the
                // target's own file.
                if piece == PieceKind::Pawn && from_file.is_none() && sq.col() != target.col() {
                    return false;
                }
                legal_moves_for(board, sq).contains(&target)
            });

            let from = candidates.next().ok_or_else(no_match)?;
            debug!(%token, %from, %target, "resolved book move");
            match promotion {
                Some(kind) => Ok(Move::promoting(from, target, kind)),
                None => Ok(Move::new(from, target)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::resolve_san;
    use matto_core::{Board, Color, Move, NotationError, PieceKind, Square};

    fn board_with(side: Color, pieces: &[(Square, char)]) -> Board {
        let mut cells = vec!['.'; 64];
        for &(sq, c) in pieces {
            cells[sq.index()] = c;
        }
        Board::from_snapshot_for(&cells.into_iter().collect::<String>(), side).unwrap()
    }

    #[test]
    fn pawn_push_resolves_to_home_pawn() {
        let board = Board::starting_position();
        assert_eq!(
            resolve_san(&board, "e4"),
            Ok(Move::new(Square::E2, Square::E4))
        );
    }

    #[test]
    fn knight_move_resolves() {
        let board = Board::starting_position();
        assert_eq!(
            resolve_san(&board, "Nf3"),
            Ok(Move::new(Square::G1, Square::F3))
        );
    }

    #[test]
    fn black_reply_resolves_after_switch() {
        let mut board = Board::starting_position();
        board.apply_move(Square::E2, Square::E4);
        assert_eq!(
            resolve_san(&board, "e5"),
            Ok(Move::new(Square::E7, Square::E5))
        );
        assert_eq!(
            resolve_san(&board, "Nc6"),
            Ok(Move::new(Square::B8, Square::C6))
        );
    }

    #[test]
    fn pawn_capture_uses_source_file() {
        let mut board = Board::starting_position();
        board.apply_move(Square::E2, Square::E4);
        board.apply_move(Square::D7, Square::D5);
        assert_eq!(
            resolve_san(&board, "exd5"),
            Ok(Move::new(Square::E4, Square::D5))
        );
    }

    #[test]
    fn push_never_resolves_to_a_diagonal_pawn() {
        // White pawns on c4 and e4, black pawn on d5: "d5" must not match a
        // capture from c4 or e4 (that would be "cxd5" / "exd5").
        let board = board_with(
            Color::White,
            &[
                (Square::E1, 'K'),
                (Square::E8, 'k'),
                (Square::C4, 'P'),
                (Square::E4, 'P'),
                (Square::D5, 'p'),
            ],
        );
        assert!(matches!(
            resolve_san(&board, "d5"),
            Err(NotationError::NoMatchingMove { .. })
        ));
    }

    #[test]
    fn castle_tokens_resolve_to_king_moves() {
        let board = board_with(
            Color::White,
            &[
                (Square::E1, 'K'),
                (Square::A1, 'R'),
                (Square::H1, 'R'),
                (Square::E8, 'k'),
            ],
        );
        assert_eq!(
            resolve_san(&board, "O-O"),
            Ok(Move::new(Square::E1, Square::G1))
        );
        assert_eq!(
            resolve_san(&board, "O-O-O"),
            Ok(Move::new(Square::E1, Square::C1))
        );
    }

    #[test]
    fn castle_refused_without_the_right() {
        let mut board = board_with(
            Color::White,
            &[
                (Square::E1, 'K'),
                (Square::H1, 'R'),
                (Square::E8, 'k'),
            ],
        );
        board.apply_move(Square::H1, Square::H2);
        board.apply_move(Square::E8, Square::E7);
        board.apply_move(Square::H2, Square::H1);
        board.apply_move(Square::E7, Square::E8);
        assert!(matches!(
            resolve_san(&board, "O-O"),
            Err(NotationError::NoMatchingMove { .. })
        ));
    }

    #[test]
    fn file_disambiguator_is_honored() {
        let board = board_with(
            Color::White,
            &[
                (Square::E1, 'K'),
                (Square::B1, 'N'),
                (Square::F3, 'N'),
                (Square::H8, 'k'),
            ],
        );
        assert_eq!(
            resolve_san(&board, "Nbd2"),
            Ok(Move::new(Square::B1, Square::D2))
        );
        assert_eq!(
            resolve_san(&board, "Nfd2"),
            Ok(Move::new(Square::F3, Square::D2))
        );
    }

    #[test]
    fn rank_disambiguator_is_honored() {
        let board = board_with(
            Color::White,
            &[
                (Square::E1, 'K'),
                (Square::A1, 'R'),
                (Square::A5, 'R'),
                (Square::H8, 'k'),
            ],
        );
        assert_eq!(
            resolve_san(&board, "R1a3"),
            Ok(Move::new(Square::A1, Square::A3))
        );
        assert_eq!(
            resolve_san(&board, "R5a3"),
            Ok(Move::new(Square::A5, Square::A3))
        );
    }

    #[test]
    fn promotion_token_carries_the_piece() {
        let board = board_with(
            Color::White,
            &[(Square::E1, 'K'), (Square::H6, 'k'), (Square::A7, 'P')],
        );
        assert_eq!(
            resolve_san(&board, "a8=N"),
            Ok(Move::promoting(Square::A7, Square::A8, PieceKind::Knight))
        );
    }

    #[test]
    fn unknown_token_is_reported() {
        let board = Board::starting_position();
        assert!(matches!(
            resolve_san(&board, "Zf3"),
            Err(NotationError::UnknownToken { .. })
        ));
    }

    #[test]
    fn unreachable_target_is_no_match() {
        let board = Board::starting_position();
        assert!(matches!(
            resolve_san(&board, "Nf5"),
            Err(NotationError::NoMatchingMove { .. })
        ));
    }

    #[test]
    fn annotated_token_still_resolves() {
        let board = Board::starting_position();
        assert_eq!(
            resolve_san(&board, "e3+"),
            Ok(Move::new(Square::E2, Square::E3))
        );
    }

    #[test]
    fn emitted_tokens_resolve_back_to_the_same_moves() {
        // Play a line, derive each move's token from the snapshot diff, and
        // re-resolve it on the position it was played from.
        use matto_core::san_from_snapshots;

        let mut board = Board::starting_position();
        for (from, to) in [
            (Square::E2, Square::E4),
            (Square::E7, Square::E5),
            (Square::G1, Square::F3),
            (Square::B8, Square::C6),
            (Square::F1, Square::B5),
            (Square::A7, Square::A6),
            (Square::B5, Square::C6),
            (Square::D7, Square::C6),
        ] {
            let before = board.clone();
            let mover = board.side_to_move();
            board.apply_move(from, to);
            let token =
                san_from_snapshots(&before.to_snapshot(), &board.to_snapshot(), mover)
                    .expect("every played move must emit a token");
            assert_eq!(
                resolve_san(&before, &token),
                Ok(Move::new(from, to)),
                "token {token:?} did not round-trip"
            );
        }
    }
}
