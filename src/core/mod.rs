//! Core value types: marks, coordinates, configuration, RNG.
//!
//! Everything in this module is plain data with no game-flow logic; the
//! board and search layers build on top of it.

pub mod config;
pub mod coord;
pub mod mark;
pub mod rng;

pub use config::GameConfig;
pub use coord::Coord;
pub use mark::Mark;
pub use rng::GameRng;
