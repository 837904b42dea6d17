//! Line directions for win detection.
//!
//! A winning run can lie along four directions: horizontal, vertical, and
//! the two diagonals. Scanning each direction once from every occupied
//! cell covers every line on the board (the reverse directions would find
//! the same runs from their other end).

use crate::core::Coord;

/// The four scan directions as (row, col) deltas.
pub const DIRECTIONS: [(isize, isize); 4] = [
    (0, 1),  // left to right
    (1, 0),  // top to bottom
    (1, 1),  // down-right diagonal
    (1, -1), // down-left diagonal
];

/// Step `k` cells from `start` along `delta`, if that stays on a
/// `width` x `height` grid.
#[must_use]
pub fn step(
    start: Coord,
    delta: (isize, isize),
    k: usize,
    width: usize,
    height: usize,
) -> Option<Coord> {
    let row = start.row as isize + delta.0 * k as isize;
    let col = start.col as isize + delta.1 * k as isize;
    if row < 0 || col < 0 || row >= height as isize || col >= width as isize {
        return None;
    }
    Some(Coord::new(row as usize, col as usize))
}
