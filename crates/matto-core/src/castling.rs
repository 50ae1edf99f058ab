//! Castling bookkeeping as monotonic "has moved" flags.
//!
//! Rights are tracked the way the game loop observes them: once a king or an
//! original-square rook has moved, the corresponding flag is set and never
//! cleared again. A castle is available only while both relevant flags are
//! still unset.

use crate::color::Color;
use crate::square::Square;

/// Which wing a castle happens on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    /// Toward the h-file rook (short castle).
    Kingside,
    /// Toward the a-file rook (long castle).
    Queenside,
}

impl CastleSide {
    /// Both sides, kingside first.
    pub const ALL: [CastleSide; 2] = [CastleSide::Kingside, CastleSide::Queenside];

    /// The rook's home square for this wing and color.
    pub const fn rook_home(self, color: Color) -> Square {
        match (color, self) {
            (Color::White, CastleSide::Kingside) => Square::H1,
            (Color::White, CastleSide::Queenside) => Square::A1,
            (Color::Black, CastleSide::Kingside) => Square::H8,
            (Color::Black, CastleSide::Queenside) => Square::A8,
        }
    }

    /// The square the rook lands on after castling.
    pub const fn rook_target(self, color: Color) -> Square {
        match (color, self) {
            (Color::White, CastleSide::Kingside) => Square::F1,
            (Color::White, CastleSide::Queenside) => Square::D1,
            (Color::Black, CastleSide::Kingside) => Square::F8,
            (Color::Black, CastleSide::Queenside) => Square::D8,
        }
    }

    /// The square the king lands on after castling.
    pub const fn king_target(self, color: Color) -> Square {
        match (color, self) {
            (Color::White, CastleSide::Kingside) => Square::G1,
            (Color::White, CastleSide::Queenside) => Square::C1,
            (Color::Black, CastleSide::Kingside) => Square::G8,
            (Color::Black, CastleSide::Queenside) => Square::C8,
        }
    }
}

/// The six monotonic moved flags that gate castling.
///
/// Flags only ever flip from `false` to `true`; there is no unset operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CastlingFlags {
    king_moved: [bool; Color::COUNT],
    kingside_rook_moved: [bool; Color::COUNT],
    queenside_rook_moved: [bool; Color::COUNT],
}

impl CastlingFlags {
    /// Fresh flags for the starting position: nothing has moved.
    pub const fn unmoved() -> CastlingFlags {
        CastlingFlags {
            king_moved: [false; 2],
            kingside_rook_moved: [false; 2],
            queenside_rook_moved: [false; 2],
        }
    }

    /// Record that `color`'s king has moved.
    pub fn mark_king_moved(&mut self, color: Color) {
        self.king_moved[color.index()] = true;
    }

    /// Record that `color`'s rook on the given wing has moved.
    pub fn mark_rook_moved(&mut self, color: Color, side: CastleSide) {
        match side {
            CastleSide::Kingside => self.kingside_rook_moved[color.index()] = true,
            CastleSide::Queenside => self.queenside_rook_moved[color.index()] = true,
        }
    }

    /// Return `true` if `color`'s king has moved.
    pub fn king_moved(&self, color: Color) -> bool {
        self.king_moved[color.index()]
    }

    /// Return `true` if `color`'s rook on the given wing has moved.
    pub fn rook_moved(&self, color: Color, side: CastleSide) -> bool {
        match side {
            CastleSide::Kingside => self.kingside_rook_moved[color.index()],
            CastleSide::Queenside => self.queenside_rook_moved[color.index()],
        }
    }

    /// Return `true` if the moved flags still allow `color` to castle on `side`.
    pub fn castle_available(&self, color: Color, side: CastleSide) -> bool {
        !self.king_moved(color) && !self.rook_moved(color, side)
    }

    /// Return `true` if every flag of `self` that is set is also set in `later`.
    ///
    /// Used by invariant tests: flags must be non-decreasing over a game.
    pub fn monotonic_le(&self, later: &CastlingFlags) -> bool {
        Color::ALL.into_iter().all(|color| {
            (!self.king_moved(color) || later.king_moved(color))
                && CastleSide::ALL.into_iter().all(|side| {
                    !self.rook_moved(color, side) || later.rook_moved(color, side)
                })
        })
    }
}
