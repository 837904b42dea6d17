//! Search instrumentation counters.

use serde::{Deserialize, Serialize};

/// Counters accumulated over one solver's lifetime.
///
/// `nodes_expanded` counts search nodes actually explored (cache misses);
/// a query answered entirely from the cache leaves it untouched, which is
/// what the cache-consistency tests assert on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes explored past the cache lookup.
    pub nodes_expanded: u64,
    /// Queries answered from the cache.
    pub cache_hits: u64,
    /// Results written into the cache.
    pub cache_stores: u64,
}

impl SearchStats {
    /// Reset all counters to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
