//! Square types and coordinate conversions.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// Width of the padded board (8 files plus a 2-cell border on each side).
pub(crate) const PADDED_WIDTH: usize = 12;
/// Number of cells in the padded board.
pub(crate) const PADDED_SIZE: usize = PADDED_WIDTH * PADDED_WIDTH;
const BORDER: usize = 2;

/// A square on the playing area, as (rank, file).
///
/// Rank 0 is white's back rank ("1"), file 0 is the a-file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square {
    rank: u8,
    file: u8,
}

impl Square {
    /// Create a square, failing with a range error outside 0..=7.
    pub fn new(rank: usize, file: usize) -> Result<Self, SquareError> {
        if rank >= 8 {
            return Err(SquareError::RankOutOfBounds { rank });
        }
        if file >= 8 {
            return Err(SquareError::FileOutOfBounds { file });
        }
        Ok(Square::new_unchecked(rank, file))
    }

    #[inline]
    pub(crate) const fn new_unchecked(rank: usize, file: usize) -> Self {
        Square {
            rank: rank as u8,
            file: file as u8,
        }
    }

    /// Get the rank (0-7, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        self.rank as usize
    }

    /// Get the file (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        self.file as usize
    }

    /// Flip the square vertically (e.g., a1 <-> a8)
    #[inline]
    #[must_use]
    pub const fn flip_vertical(self) -> Self {
        Square::new_unchecked(7 - self.rank(), self.file())
    }

    /// Dense index (0-63, a1=0, b1=1, ..., h8=63)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.rank() * 8 + self.file()
    }

    /// Inverse of [`Square::index`]
    #[inline]
    #[must_use]
    pub const fn from_index(idx: usize) -> Self {
        Square::new_unchecked(idx / 8, idx % 8)
    }

    /// Index of this square in the padded 12x12 board.
    #[inline]
    pub(crate) const fn padded(self) -> usize {
        (self.rank() + BORDER) * PADDED_WIDTH + self.file() + BORDER
    }

    /// Inverse of [`Square::padded`]; `None` for border cells.
    #[inline]
    pub(crate) const fn from_padded(idx: usize) -> Option<Self> {
        let row = idx / PADDED_WIDTH;
        let col = idx % PADDED_WIDTH;
        if row < BORDER || row >= BORDER + 8 || col < BORDER || col >= BORDER + 8 {
            return None;
        }
        Some(Square::new_unchecked(row - BORDER, col - BORDER))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.file + b'a') as char, self.rank + 1)
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((rank, file): (usize, usize)) -> Result<Self, Self::Error> {
        Square::new(rank, file)
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };
        if !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
            return Err(invalid());
        }
        Ok(Square::new_unchecked(
            rank as usize - '1' as usize,
            file as usize - 'a' as usize,
        ))
    }
}
