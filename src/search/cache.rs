//! Memoization cache for search results.
//!
//! Keyed by `(canonical position string, player to move)`. The game tree
//! for a fixed position, player, and win condition is deterministic, so a
//! stored result stays valid for the whole session: entries are added,
//! never overwritten or invalidated.
//!
//! One cache is owned per game session and passed by reference into every
//! recursive search call, so sibling branches and later turns reuse
//! results. A rematch within the same process can take the cache over via
//! [`crate::Game::into_cache`]. Keys carry no board dimensions; a cache
//! must only ever be shared between games with the same configuration.

use rustc_hash::FxHashMap;

use crate::core::{Coord, Mark};

/// Cache key: canonical position string plus the player to move.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub board: String,
    pub player: Mark,
}

impl CacheKey {
    #[must_use]
    pub fn new(board: String, player: Mark) -> Self {
        Self { board, player }
    }
}

/// Insert-if-absent map from positions to search outcomes.
///
/// `Some(coord)` means the player to move has a forced win and `coord` is
/// the first such move in row-major order; `None` means the search proved
/// there is nothing to find from that node (no live successors).
#[derive(Clone, Debug, Default)]
pub struct SearchCache {
    entries: FxHashMap<CacheKey, Option<Coord>>,
}

impl SearchCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a previously computed result.
    ///
    /// The outer `Option` is presence in the cache; the inner one is the
    /// stored outcome.
    #[must_use]
    pub fn lookup(&self, key: &CacheKey) -> Option<Option<Coord>> {
        self.entries.get(key).copied()
    }

    /// Store a result unless the key is already present.
    ///
    /// First writer wins; a racing recomputation must produce an equal
    /// result, so dropping the second write is sound.
    pub fn record(&mut self, key: CacheKey, result: Option<Coord>) {
        self.entries.entry(key).or_insert(result);
    }

    /// Number of cached entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
