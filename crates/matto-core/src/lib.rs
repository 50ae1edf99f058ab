//! Core chess types: the mailbox board, move generation, mutation, position
//! status, snapshots, and algebraic notation.

mod attacks;
mod board;
mod castling;
mod chess_move;
mod color;
mod error;
mod file;
mod make_move;
mod movegen;
mod notation;
mod piece;
mod piece_kind;
mod rank;
mod snapshot;
mod square;
mod status;

pub use attacks::{is_king_attacked, is_square_attacked};
pub use board::Board;
pub use castling::{CastleSide, CastlingFlags};
pub use chess_move::Move;
pub use color::Color;
pub use error::{BoardError, NotationError, SnapshotError};
pub use file::File;
pub use make_move::castle_side_of_king_move;
pub use movegen::{all_legal_moves, legal_moves_for, pseudo_moves_for};
pub use notation::{SanMove, parse_san, san_from_snapshots, san_sequence, strip_annotations};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use rank::Rank;
pub use snapshot::STARTING_SNAPSHOT;
pub use square::Square;
pub use status::{GameStatus, has_legal_move, in_check, position_status};
