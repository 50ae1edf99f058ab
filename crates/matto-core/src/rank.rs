//! Board ranks (rows 1–8).
//!
//! Ranks are numbered as players read them: Rank1 is White's back rank,
//! Rank8 is Black's. Square indices count rows from the *top* of the board
//! (row 0 = rank 8), so [`Rank::from_row`] and [`Rank::row`] convert between
//! the two views.

use std::fmt;

/// A rank (row) on the board, from Rank1 to Rank8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Rank1 = 0,
    Rank2 = 1,
    Rank3 = 2,
    Rank4 = 3,
    Rank5 = 4,
    Rank6 = 5,
    Rank7 = 6,
    Rank8 = 7,
}

impl Rank {
    /// Total number of ranks.
    pub const COUNT: usize = 8;

    /// All ranks in index order (Rank1 first).
    pub const ALL: [Rank; 8] = [
        Rank::Rank1,
        Rank::Rank2,
        Rank::Rank3,
        Rank::Rank4,
        Rank::Rank5,
        Rank::Rank6,
        Rank::Rank7,
        Rank::Rank8,
    ];

    /// Return the index (0 = Rank1, 7 = Rank8).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Create a rank from a zero-based index (0 = Rank1).
    #[inline]
    pub const fn from_index(index: usize) -> Option<Rank> {
        match index {
            0 => Some(Rank::Rank1),
            1 => Some(Rank::Rank2),
            2 => Some(Rank::Rank3),
            3 => Some(Rank::Rank4),
            4 => Some(Rank::Rank5),
            5 => Some(Rank::Rank6),
            6 => Some(Rank::Rank7),
            7 => Some(Rank::Rank8),
            _ => None,
        }
    }

    /// Create a rank from a board row (row 0 = Rank8, row 7 = Rank1).
    #[inline]
    pub const fn from_row(row: usize) -> Option<Rank> {
        if row < 8 { Rank::from_index(7 - row) } else { None }
    }

    /// Return the board row of this rank (Rank8 = row 0, Rank1 = row 7).
    #[inline]
    pub const fn row(self) -> usize {
        7 - self.index()
    }

    /// Parse an algebraic rank digit ('1'..'8').
    #[inline]
    pub fn from_char(c: char) -> Option<Rank> {
        if c.is_ascii_digit() && c != '0' {
            Rank::from_index((c as u8 - b'1') as usize)
        } else {
            None
        }
    }

    /// Return the algebraic digit for this rank.
    #[inline]
    pub const fn as_char(self) -> char {
        (b'1' + self as u8) as char
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::Rank;

    #[test]
    fn row_conversion() {
        assert_eq!(Rank::Rank8.row(), 0);
        assert_eq!(Rank::Rank1.row(), 7);
        for rank in Rank::ALL {
            assert_eq!(Rank::from_row(rank.row()), Some(rank));
        }
        assert_eq!(Rank::from_row(8), None);
    }

    #[test]
    fn from_char_roundtrip() {
        for rank in Rank::ALL {
            assert_eq!(Rank::from_char(rank.as_char()), Some(rank));
        }
        assert_eq!(Rank::from_char('0'), None);
        assert_eq!(Rank::from_char('9'), None);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Rank::Rank1), "1");
        assert_eq!(format!("{}", Rank::Rank8), "8");
    }
}
