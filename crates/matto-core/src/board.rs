//! The board: a 64-square mailbox with a per-piece square index.

use std::fmt;

use crate::castling::CastlingFlags;
use crate::color::Color;
use crate::error::BoardError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::snapshot::STARTING_SNAPSHOT;
use crate::square::Square;

/// Complete position state.
///
/// The square array is the source of truth for occupancy; the piece index
/// (one square list per colored piece) mirrors it and is kept consistent by
/// every mutation. Cloning the board is the deep copy used for speculative
/// move application.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    /// One cell per square in snapshot order (index 0 = a8).
    squares: [Option<Piece>; Square::COUNT],
    /// Squares occupied by each colored piece, indexed by [`Piece::index()`].
    positions: [Vec<Square>; Piece::COUNT],
    /// Which side moves next.
    side_to_move: Color,
    /// Monotonic king/rook moved flags.
    castling: CastlingFlags,
    /// The empty square a capturing pawn would land on, if the last move
    /// was a double pawn push.
    en_passant_target: Option<Square>,
    /// The pawn that would be captured en passant. Set and cleared together
    /// with the target.
    en_passant_victim: Option<Square>,
}

impl Board {
    /// Return the standard starting position.
    pub fn starting_position() -> Board {
        Board::from_snapshot(STARTING_SNAPSHOT)
            .expect("the starting snapshot literal is a valid position")
    }

    /// Construct an empty board with `side` to move. Used by the snapshot decoder.
    pub(crate) fn empty(side: Color) -> Board {
        Board {
            squares: [None; Square::COUNT],
            positions: std::array::from_fn(|_| Vec::new()),
            side_to_move: side,
            castling: CastlingFlags::unmoved(),
            en_passant_target: None,
            en_passant_victim: None,
        }
    }

    /// Return the piece on the given square, if any.
    #[inline]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    /// Return `true` if the given square is empty.
    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_none()
    }

    /// Return the squares occupied by the given colored piece.
    #[inline]
    pub fn positions(&self, piece: Piece) -> &[Square] {
        &self.positions[piece.index()]
    }

    /// Return the square of `color`'s king.
    ///
    /// # Panics
    ///
    /// Panics when the board has no king of that color; such a board violates
    /// the position invariants and must not reach this query.
    pub fn king_square(&self, color: Color) -> Square {
        self.positions(Piece::new(PieceKind::King, color))
            .first()
            .copied()
            .expect("position must contain a king of each color")
    }

    /// Return the side to move.
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Return the castling moved flags.
    #[inline]
    pub fn castling(&self) -> &CastlingFlags {
        &self.castling
    }

    /// Return the en-passant target square, if any.
    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    /// Return the square of the pawn capturable en passant, if any.
    #[inline]
    pub fn en_passant_victim(&self) -> Option<Square> {
        self.en_passant_victim
    }

    /// Count occupied squares.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|cell| cell.is_some()).count()
    }

    /// Toggle the side to move.
    pub(crate) fn switch_side(&mut self) {
        self.side_to_move = self.side_to_move.flip();
    }

    /// Mutable access to the castling flags for the mutation operations.
    pub(crate) fn castling_mut(&mut self) -> &mut CastlingFlags {
        &mut self.castling
    }

    /// Set both halves of the en-passant pair.
    pub(crate) fn set_en_passant(&mut self, target: Square, victim: Square) {
        self.en_passant_target = Some(target);
        self.en_passant_victim = Some(victim);
    }

    /// Clear both halves of the en-passant pair.
    pub(crate) fn clear_en_passant(&mut self) {
        self.en_passant_target = None;
        self.en_passant_victim = None;
    }

    /// Put a piece on an empty square, updating the piece index.
    pub(crate) fn place_piece(&mut self, sq: Square, piece: Piece) {
        debug_assert!(self.is_empty(sq), "place_piece on occupied {sq}");
        self.squares[sq.index()] = Some(piece);
        self.positions[piece.index()].push(sq);
    }

    /// Remove and return the piece on a square, updating the piece index.
    pub(crate) fn remove_piece(&mut self, sq: Square) -> Option<Piece> {
        let piece = self.squares[sq.index()].take()?;
        let list = &mut self.positions[piece.index()];
        if let Some(at) = list.iter().position(|&s| s == sq) {
            list.swap_remove(at);
        }
        Some(piece)
    }

    /// Validate the structural invariants of the position.
    ///
    /// Checks that the square array and the piece index agree cell for cell,
    /// that each side has exactly one king, and that the en-passant pair is
    /// either fully set (on the capture ranks) or fully unset.
    pub fn validate(&self) -> Result<(), BoardError> {
        // Every indexed square must hold the piece that indexed it.
        for piece in Piece::ALL {
            for &sq in self.positions(piece) {
                if self.squares[sq.index()] != Some(piece) {
                    return Err(BoardError::IndexMismatch { square: sq });
                }
            }
        }

        // Every occupied square must appear in its piece's list.
        for sq in Square::all() {
            if let Some(piece) = self.squares[sq.index()]
                && !self.positions(piece).contains(&sq)
            {
                return Err(BoardError::IndexMismatch { square: sq });
            }
        }

        for color in Color::ALL {
            let count = self.positions(Piece::new(PieceKind::King, color)).len();
            if count != 1 {
                return Err(BoardError::InvalidKingCount { color, count });
            }
        }

        match (self.en_passant_target, self.en_passant_victim) {
            (None, None) => {}
            (Some(target), Some(_)) => {
                if target.row() != 2 && target.row() != 5 {
                    return Err(BoardError::BadEnPassantRank { square: target });
                }
            }
            _ => return Err(BoardError::HalfSetEnPassant),
        }

        Ok(())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8 {
            write!(f, "{}  ", 8 - row)?;
            for col in 0..8 {
                let sq = Square::from_row_col(row as i8, col as i8)
                    .expect("row and col are in 0..8");
                let c = match self.piece_on(sq) {
                    Some(piece) => piece.snapshot_char(),
                    None => '.',
                };
                if col < 7 {
                    write!(f, "{c} ")?;
                } else {
                    writeln!(f, "{c}")?;
                }
            }
        }
        write!(f, "   a b c d e f g h")
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\", {} to move)", self.to_snapshot(), self.side_to_move)
    }
}
