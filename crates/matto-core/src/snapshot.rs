//! The 64-character position snapshot format.
//!
//! One character per square in index order (a8..h8, a7..h7, ..., a1..h1),
//! over the alphabet `{K,Q,R,B,N,P,k,q,r,b,n,p,.}`. This is the ledger line
//! format and the repetition key, so the encoding must stay byte-stable.

use std::str::FromStr;

use crate::board::Board;
use crate::castling::CastleSide;
use crate::color::Color;
use crate::error::SnapshotError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Snapshot of the standard starting position.
pub const STARTING_SNAPSHOT: &str =
    "rnbqkbnrpppppppp................................PPPPPPPPRNBQKBNR";

impl Board {
    /// Decode a snapshot with White to move.
    pub fn from_snapshot(snapshot: &str) -> Result<Board, SnapshotError> {
        Board::from_snapshot_for(snapshot, Color::White)
    }

    /// Decode a snapshot with the given side to move.
    ///
    /// The snapshot format carries no castling information, so the moved
    /// flags are derived conservatively: a king or rook that is not on its
    /// home square is marked as having moved. The en-passant pair is left
    /// unset for the same reason.
    ///
    /// # Errors
    ///
    /// Fails on a wrong length, a character outside the piece alphabet, or
    /// a decoded position that violates the structural invariants.
    pub fn from_snapshot_for(snapshot: &str, side: Color) -> Result<Board, SnapshotError> {
        let length = snapshot.chars().count();
        if length != Square::COUNT {
            return Err(SnapshotError::WrongLength { found: length });
        }

        let mut board = Board::empty(side);
        for (index, character) in snapshot.chars().enumerate() {
            if character == '.' {
                continue;
            }
            let piece = Piece::from_snapshot_char(character)
                .ok_or(SnapshotError::InvalidChar { character, index })?;
            let sq = Square::from_index(index).expect("enumerate stays below 64");
            board.place_piece(sq, piece);
        }

        derive_castling_flags(&mut board);
        board.validate()?;
        Ok(board)
    }

    /// Encode this position as a snapshot string.
    pub fn to_snapshot(&self) -> String {
        Square::all()
            .map(|sq| match self.piece_on(sq) {
                Some(piece) => piece.snapshot_char(),
                None => '.',
            })
            .collect()
    }
}

/// Mark every king or rook that is away from its home square as moved.
fn derive_castling_flags(board: &mut Board) {
    for color in Color::ALL {
        let king_home = match color {
            Color::White => Square::E1,
            Color::Black => Square::E8,
        };
        if board.piece_on(king_home) != Some(Piece::new(PieceKind::King, color)) {
            board.castling_mut().mark_king_moved(color);
        }
        for side in CastleSide::ALL {
            let home = side.rook_home(color);
            if board.piece_on(home) != Some(Piece::new(PieceKind::Rook, color)) {
                board.castling_mut().mark_rook_moved(color, side);
            }
        }
    }
}

impl FromStr for Board {
    type Err = SnapshotError;

    fn from_str(s: &str) -> Result<Board, SnapshotError> {
        Board::from_snapshot(s)
    }
}
