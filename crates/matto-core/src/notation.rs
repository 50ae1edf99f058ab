//! Short algebraic notation: emission from snapshot diffs and token parsing.
//!
//! The ledger records positions, not moves, so algebraic tokens are derived
//! by diffing consecutive snapshots: a castle touches four squares, an
//! en-passant capture three, everything else two. Parsing produces the
//! structural pieces of a token; resolving them against a live position is
//! the book layer's job.

use crate::board::Board;
use crate::castling::CastleSide;
use crate::color::Color;
use crate::error::NotationError;
use crate::file::File;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::rank::Rank;
use crate::square::Square;
use crate::status::{GameStatus, position_status};

/// A parsed algebraic token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SanMove {
    /// `O-O` or `O-O-O`.
    Castle(CastleSide),
    /// Any other move.
    Normal {
        /// The moving piece ([`PieceKind::Pawn`] when no letter was given).
        piece: PieceKind,
        /// Source-file disambiguator, if present.
        from_file: Option<File>,
        /// Source-rank disambiguator, if present.
        from_rank: Option<Rank>,
        /// Whether the token carries a capture mark.
        capture: bool,
        /// The destination square.
        target: Square,
        /// Promotion piece from an `=X` suffix.
        promotion: Option<PieceKind>,
    },
}

/// Strip trailing check (`+`) and mate (`#`) marks from a token.
pub fn strip_annotations(token: &str) -> &str {
    token.trim_end_matches(['+', '#'])
}

/// Parse an algebraic token into its structural parts.
///
/// Accepts the forms of the interchange format: castling strings, pawn
/// pushes (`e4`), pawn captures (`exd5`), piece moves with an optional
/// file/rank disambiguator (`Nf3`, `Nbd2`, `R1e2`, `Qxe7`), and pawn
/// promotions (`e8=Q`, `dxe8=Q`). Trailing `+`/`#` marks are ignored.
///
/// # Errors
///
/// Returns [`NotationError::UnknownToken`] for anything else.
pub fn parse_san(token: &str) -> Result<SanMove, NotationError> {
    let unknown = || NotationError::UnknownToken { token: token.to_string() };
    let clean = strip_annotations(token);

    match clean {
        "O-O" => return Ok(SanMove::Castle(CastleSide::Kingside)),
        "O-O-O" => return Ok(SanMove::Castle(CastleSide::Queenside)),
        _ => {}
    }

    let (body, promotion) = match clean.split_once('=') {
        Some((body, suffix)) => {
            let mut chars = suffix.chars();
            let letter = chars.next().ok_or_else(unknown)?;
            if chars.next().is_some() {
                return Err(unknown());
            }
            let kind = PieceKind::from_san_letter(letter).ok_or_else(unknown)?;
            if !PieceKind::PROMOTIONS.contains(&kind) {
                return Err(unknown());
            }
            (body, Some(kind))
        }
        None => (clean, None),
    };

    let chars: Vec<char> = body.chars().collect();
    if chars.len() < 2 {
        return Err(unknown());
    }

    let target_text: String = chars[chars.len() - 2..].iter().collect();
    let target = Square::from_algebraic(&target_text).ok_or_else(unknown)?;

    let mut head = &chars[..chars.len() - 2];
    let capture = head.last() == Some(&'x');
    if capture {
        head = &head[..head.len() - 1];
    }

    let (piece, disambig) = match head.first() {
        Some(&c) if c.is_ascii_uppercase() => {
            let kind = PieceKind::from_san_letter(c).ok_or_else(unknown)?;
            if kind == PieceKind::Pawn {
                return Err(unknown());
            }
            (kind, &head[1..])
        }
        _ => (PieceKind::Pawn, head),
    };

    let mut from_file = None;
    let mut from_rank = None;
    match disambig {
        [] => {}
        [c] => {
            if let Some(file) = File::from_char(*c) {
                from_file = Some(file);
            } else if let Some(rank) = Rank::from_char(*c) {
                from_rank = Some(rank);
            } else {
                return Err(unknown());
            }
        }
        [f, r] => {
            from_file = Some(File::from_char(*f).ok_or_else(unknown)?);
            from_rank = Some(Rank::from_char(*r).ok_or_else(unknown)?);
        }
        _ => return Err(unknown()),
    }

    if promotion.is_some() && piece != PieceKind::Pawn {
        return Err(unknown());
    }
    if piece == PieceKind::Pawn && capture && from_file.is_none() {
        return Err(unknown());
    }

    Ok(SanMove::Normal { piece, from_file, from_rank, capture, target, promotion })
}

/// One changed square between two snapshots.
struct Diff {
    sq: Square,
    old: Option<Piece>,
    new: Option<Piece>,
}

/// Derive the algebraic token for the move between two consecutive
/// snapshots, played by `mover`.
///
/// Returns `None` when the snapshots are malformed or the diff does not
/// describe a recognizable move; callers drop such entries.
pub fn san_from_snapshots(old: &str, new: &str, mover: Color) -> Option<String> {
    let diffs = diff_snapshots(old, new)?;
    let body = match diffs.len() {
        4 => castle_san(&diffs, mover)?,
        3 => en_passant_san(&diffs, mover)?,
        2 => promotion_san(&diffs, mover).or_else(|| normal_san(old, &diffs, mover))?,
        _ => return None,
    };
    Some(format!("{body}{}", annotation_suffix(new, mover)))
}

/// Derive the algebraic token sequence of a whole game from its snapshot
/// log, White moving first. Undecodable diffs are skipped.
pub fn san_sequence(snapshots: &[String]) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut mover = Color::White;
    for pair in snapshots.windows(2) {
        if let Some(token) = san_from_snapshots(&pair[0], &pair[1], mover) {
            tokens.push(token);
        }
        mover = mover.flip();
    }
    tokens
}

fn diff_snapshots(old: &str, new: &str) -> Option<Vec<Diff>> {
    if old.chars().count() != Square::COUNT || new.chars().count() != Square::COUNT {
        return None;
    }
    let mut diffs = Vec::new();
    for ((index, old_char), new_char) in old.chars().enumerate().zip(new.chars()) {
        if old_char == new_char {
            continue;
        }
        diffs.push(Diff {
            sq: Square::from_index(index)?,
            old: Piece::from_snapshot_char(old_char),
            new: Piece::from_snapshot_char(new_char),
        });
    }
    Some(diffs)
}

/// The `+`/`#` suffix for the position after the move.
fn annotation_suffix(new: &str, mover: Color) -> &'static str {
    match Board::from_snapshot_for(new, mover.flip()) {
        Ok(board) => match position_status(&board) {
            GameStatus::Checkmate => "#",
            GameStatus::Check => "+",
            _ => "",
        },
        Err(_) => "",
    }
}

fn castle_san(diffs: &[Diff], mover: Color) -> Option<String> {
    let king = Piece::new(PieceKind::King, mover);
    let from = diffs.iter().find(|d| d.old == Some(king) && d.new.is_none())?;
    let to = diffs.iter().find(|d| d.new == Some(king))?;
    if from.sq.row() != to.sq.row() {
        return None;
    }
    match to.sq.col() as i8 - from.sq.col() as i8 {
        2 => Some("O-O".to_string()),
        -2 => Some("O-O-O".to_string()),
        _ => None,
    }
}

fn en_passant_san(diffs: &[Diff], mover: Color) -> Option<String> {
    let pawn = Piece::new(PieceKind::Pawn, mover);
    let victim = Piece::new(PieceKind::Pawn, mover.flip());
    let from = diffs.iter().find(|d| d.old == Some(pawn) && d.new.is_none())?;
    let to = diffs.iter().find(|d| d.new == Some(pawn))?;
    diffs
        .iter()
        .find(|d| d.old == Some(victim) && d.new.is_none() && d.sq != from.sq)?;
    if from.sq.col().abs_diff(to.sq.col()) != 1 {
        return None;
    }
    Some(format!("{}x{}", from.sq.file(), to.sq))
}

fn promotion_san(diffs: &[Diff], mover: Color) -> Option<String> {
    let pawn = Piece::new(PieceKind::Pawn, mover);
    let from = diffs.iter().find(|d| d.old == Some(pawn) && d.new.is_none())?;
    let to = diffs.iter().find(|d| {
        d.new
            .is_some_and(|p| p.color() == mover && PieceKind::PROMOTIONS.contains(&p.kind()))
    })?;
    if to.sq.row() != mover.promotion_row() || from.sq.offset(mover.pawn_step(), 0)?.row() != to.sq.row() {
        return None;
    }
    let promoted = to.new?.kind().san_letter();
    if to.old.is_some() {
        Some(format!("{}x{}={}", from.sq.file(), to.sq, promoted))
    } else {
        Some(format!("{}={}", to.sq, promoted))
    }
}

fn normal_san(old: &str, diffs: &[Diff], mover: Color) -> Option<String> {
    let from = diffs
        .iter()
        .find(|d| d.old.is_some_and(|p| p.color() == mover) && d.new.is_none())?;
    let to = diffs
        .iter()
        .find(|d| d.new.is_some_and(|p| p.color() == mover))?;
    let moving = from.old?;
    if to.new != Some(moving) {
        return None;
    }
    let capture = to.old.is_some();

    if moving.kind() == PieceKind::Pawn {
        return if capture {
            Some(format!("{}x{}", from.sq.file(), to.sq))
        } else {
            Some(format!("{}", to.sq))
        };
    }

    let disambig = disambiguation(old, moving, from.sq, to.sq);
    let capture_mark = if capture { "x" } else { "" };
    Some(format!(
        "{}{}{}{}",
        moving.kind().san_letter(),
        disambig,
        capture_mark,
        to.sq
    ))
}

/// Source-square qualifier for a non-pawn move: empty when the mover is the
/// only piece of its kind that could reach the target, otherwise its file,
/// its rank, or both.
///
/// Reachability is purely geometric (blockers are ignored), so the emitter
/// occasionally qualifies a move that strictly needs no qualifier; parsers
/// accept either way.
fn disambiguation(old: &str, moving: Piece, from: Square, target: Square) -> String {
    let peers: Vec<Square> = old
        .chars()
        .enumerate()
        .filter(|&(_, c)| Piece::from_snapshot_char(c) == Some(moving))
        .filter_map(|(index, _)| Square::from_index(index))
        .filter(|&sq| can_reach(moving.kind(), sq, target))
        .collect();

    if peers.len() <= 1 {
        return String::new();
    }

    let same_file = peers
        .iter()
        .any(|&sq| sq != from && sq.col() == from.col());
    let same_rank = peers
        .iter()
        .any(|&sq| sq != from && sq.row() == from.row());

    if !same_file {
        from.file().to_string()
    } else if !same_rank {
        from.rank().to_string()
    } else {
        format!("{}{}", from.file(), from.rank())
    }
}

/// Geometric reachability by piece kind, ignoring blockers.
fn can_reach(kind: PieceKind, from: Square, target: Square) -> bool {
    let dr = from.row().abs_diff(target.row());
    let dc = from.col().abs_diff(target.col());
    match kind {
        PieceKind::Pawn => dc <= 1 && dr == 1,
        PieceKind::Rook => dr == 0 || dc == 0,
        PieceKind::Knight => (dr == 2 && dc == 1) || (dr == 1 && dc == 2),
        PieceKind::Bishop => dr == dc,
        PieceKind::Queen => dr == dc || dr == 0 || dc == 0,
        PieceKind::King => dr <= 1 && dc <= 1,
    }
}
