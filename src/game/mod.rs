//! Live game session: move acceptance, computer replies, rematches.

pub mod error;
pub mod session;

pub use error::InvalidMove;
pub use session::{parse_move_code, Game};
