use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChessError;

/// A square on the board as `(column, row)`.
///
/// Column 0 is file "a" and row 0 is rank 8, so White starts on rows 6-7 and
/// moves towards row 0.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coordinate {
    pub col: usize,
    pub row: usize,
}

impl Coordinate {
    pub const fn new(col: usize, row: usize) -> Self {
        Coordinate { col, row }
    }

    /// Build a coordinate from signed components, `None` when off the board.
    pub fn try_new(col: i32, row: i32) -> Option<Self> {
        if Self::in_bounds(col, row) {
            Some(Coordinate { col: col as usize, row: row as usize })
        } else {
            None
        }
    }

    pub fn in_bounds(col: i32, row: i32) -> bool {
        (0..8).contains(&col) && (0..8).contains(&row)
    }

    /// `new` and the public fields accept any value; this tells whether the
    /// square really exists.
    pub fn is_on_board(self) -> bool {
        self.col < 8 && self.row < 8
    }

    /// The square `(dc, dr)` away from this one, if it is on the board.
    pub fn offset(self, dc: i32, dr: i32) -> Option<Self> {
        Self::try_new(self.col as i32 + dc, self.row as i32 + dr)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col as u8) as char;
        let rank = 8 - self.row;
        write!(f, "{file}{rank}")
    }
}

impl FromStr for Coordinate {
    type Err = ChessError;

    /// Parse algebraic notation such as "e4".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.trim().as_bytes();
        if bytes.len() != 2 {
            return Err(ChessError::InvalidSquare(s.to_string()));
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(ChessError::InvalidSquare(s.to_string()));
        }
        Ok(Coordinate {
            col: (file - b'a') as usize,
            row: 7 - (rank - b'1') as usize,
        })
    }
}
