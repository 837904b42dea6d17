//! The forced-win search: depth-bounded, memoized, strictly ordered.

pub mod cache;
pub mod solver;
pub mod stats;

pub use cache::{CacheKey, SearchCache};
pub use solver::Solver;
pub use stats::SearchStats;
