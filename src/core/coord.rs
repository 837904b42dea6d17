//! Cell coordinates and the two-character move code.
//!
//! Coordinates are 0-based `(row, col)` pairs ordered row-major, which is
//! the enumeration order everywhere in the engine (open cells, successor
//! generation, tie-breaking).
//!
//! The move code is the user-facing form: a capital letter for the column
//! (`A` = 0) followed by a digit for the row (`1` = 0), so `"A3"` is
//! `(row 2, col 0)`. Only boards up to 26 columns and 9 rows are
//! addressable in code form; wider boards still work through the
//! coordinate API.

use serde::{Deserialize, Serialize};

/// A 0-based grid coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    /// Row index, 0 at the top.
    pub row: usize,
    /// Column index, 0 at the left.
    pub col: usize,
}

impl Coord {
    /// Create a coordinate.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Encode as a move code (`"A1"` style), if representable.
    ///
    /// Returns `None` when the column exceeds `Z` or the row exceeds `9`.
    ///
    /// ```
    /// use mnk::Coord;
    ///
    /// assert_eq!(Coord::new(2, 0).code(), Some("A3".to_string()));
    /// assert_eq!(Coord::new(9, 0).code(), None);
    /// ```
    #[must_use]
    pub fn code(self) -> Option<String> {
        if self.col >= 26 || self.row >= 9 {
            return None;
        }
        let letter = (b'A' + self.col as u8) as char;
        let digit = (b'1' + self.row as u8) as char;
        Some(format!("{letter}{digit}"))
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.code() {
            Some(code) => write!(f, "{code}"),
            None => write!(f, "(row {}, col {})", self.row, self.col),
        }
    }
}
