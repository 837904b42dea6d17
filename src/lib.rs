//! # mnk-engine
//!
//! A generalized tic-tac-toe (m,n,k-game) engine: configurable width,
//! height, and run-length-to-win, with a memoized forced-win solver for the
//! computer opponent.
//!
//! ## Design Principles
//!
//! 1. **Immutable positions**: every search branch works on its own
//!    `Position` snapshot. Copy-on-branch, never mutate-and-undo, so
//!    sibling branches never alias mutable state.
//!
//! 2. **Explicit shared cache**: the memo table is a plain value passed by
//!    reference into every search call, not a hidden global. Tests inject a
//!    fresh or pre-populated cache; a game session shares one across turns
//!    and can hand it to a rematch.
//!
//! 3. **Contractual iteration order**: open cells are always enumerated in
//!    row-major order, and the solver returns the *first* move that
//!    satisfies the search. Tie-breaking is part of the public contract.
//!
//! ## Modules
//!
//! - `core`: marks, coordinates, configuration, RNG
//! - `board`: position snapshots, win/draw detection, rendering
//! - `search`: the depth-bounded memoized forced-win solver
//! - `game`: live session driving human and computer moves

pub mod board;
pub mod core;
pub mod game;
pub mod search;

// Re-export commonly used types
pub use crate::core::{Coord, GameConfig, GameRng, Mark};

pub use crate::board::Position;

pub use crate::search::{SearchCache, SearchStats, Solver};

pub use crate::game::{Game, InvalidMove};
