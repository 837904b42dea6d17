//! Player marks.
//!
//! Two players only: `X` (by convention the human) and `O` (the computer).
//! The engine itself is symmetric — any API that searches or checks wins
//! takes the mark to act for.

use serde::{Deserialize, Serialize};

/// Character used for empty cells in both the canonical key and the
/// rendered display.
pub const EMPTY_CELL: char = '-';

/// One of the two player marks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The other player's mark.
    #[must_use]
    pub const fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// The character this mark occupies a cell with.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

/// Display character for a cell that may be empty.
#[must_use]
pub fn cell_char(cell: Option<Mark>) -> char {
    match cell {
        Some(mark) => mark.as_char(),
        None => EMPTY_CELL,
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_is_involution() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
        assert_eq!(Mark::X.opponent().opponent(), Mark::X);
    }

    #[test]
    fn test_cell_chars() {
        assert_eq!(cell_char(Some(Mark::X)), 'X');
        assert_eq!(cell_char(Some(Mark::O)), 'O');
        assert_eq!(cell_char(None), '-');
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Mark::X), "X");
        assert_eq!(format!("{}", Mark::O), "O");
    }
}
