//! The one error kind the engine surface can produce.
//!
//! Raised synchronously by the move-acceptance path; the search itself has
//! no failure mode. Every variant is recoverable — the caller reports the
//! reason and prompts again, the board is left untouched.

use thiserror::Error;

use crate::core::Coord;

/// A rejected move, with the specific reason.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidMove {
    #[error("move should be a capital letter followed by a digit, with no space")]
    MalformedCode,
    #[error("first character of move is not a capital letter")]
    ColumnLetter,
    #[error("second character of move is not a digit from 1 to 9")]
    RowDigit,
    #[error("column {0} is out of bounds")]
    ColumnOutOfBounds(usize),
    #[error("row {0} is out of bounds")]
    RowOutOfBounds(usize),
    #[error("cell {0} is already taken")]
    CellTaken(Coord),
}
