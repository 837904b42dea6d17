//! Board model: immutable position snapshots with win/draw detection.

pub mod lines;
pub mod position;

pub use position::Position;
