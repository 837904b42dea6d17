//! The forced-win solver.
//!
//! Recursive, depth-bounded, memoized search over successor positions.
//! For a position and a player to move it answers: does the player have a
//! move that forces a win within the horizon, and if so, which one?
//!
//! ## Horizon
//!
//! Depth counts the searching player's own moves and is threaded through
//! every call as a plain parameter. At `depth == win_count + 1` the search
//! gives up on that branch. The cutoff is a heuristic horizon, not a proof
//! that no win exists, so cutoff negatives are never memoized; only
//! definite results go into the cache (found wins, and the negative for a
//! node with no live successors at all).
//!
//! ## Ordering
//!
//! Successors are generated in row-major open-cell order and the first one
//! that satisfies the search is returned. Callers may rely on that
//! tie-break.

use tracing::trace;

use super::cache::{CacheKey, SearchCache};
use super::stats::SearchStats;
use crate::board::Position;
use crate::core::{Coord, Mark};

/// Search context borrowing the session cache.
///
/// Cheap to construct; the game session builds one per computer turn so
/// the cache borrow stays scoped, while the cache itself lives for the
/// whole session.
pub struct Solver<'c> {
    cache: &'c mut SearchCache,
    stats: SearchStats,
}

impl<'c> Solver<'c> {
    /// Create a solver over the given cache.
    pub fn new(cache: &'c mut SearchCache) -> Self {
        Self {
            cache,
            stats: SearchStats::default(),
        }
    }

    /// Find a move that forces a win for `player` within the horizon.
    ///
    /// Returns the first such move in row-major open-cell order, or `None`
    /// when the search finds nothing — which, past the horizon, does not
    /// prove nothing exists. Never fails: every "no solution" outcome is a
    /// `None`, not an error.
    pub fn forced_win(&mut self, position: &Position, player: Mark) -> Option<Coord> {
        self.search(position, player, 1)
    }

    /// Counters accumulated by this solver.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    fn search(&mut self, position: &Position, player: Mark, depth: u32) -> Option<Coord> {
        let key = CacheKey::new(position.key(), player);
        if let Some(result) = self.cache.lookup(&key) {
            self.stats.cache_hits += 1;
            trace!(board = %key.board, %player, "cache hit");
            return result;
        }
        self.stats.nodes_expanded += 1;

        // One successor per open cell, in row-major order.
        let successors: Vec<(Coord, Position)> = position
            .open_cells()
            .into_iter()
            .map(|coord| (coord, position.with_mark(coord, player)))
            .collect();

        // A move that wins outright beats everything, regardless of depth.
        if let Some((coord, _)) = successors
            .iter()
            .find(|(_, successor)| successor.winner() == Some(player))
        {
            let result = Some(*coord);
            self.store(key, result);
            return result;
        }

        // Heuristic horizon: an inconclusive answer, so not memoized.
        if depth == position.config().horizon() {
            return None;
        }

        // Dead branches: nothing can come of a drawn successor.
        let live: Vec<&(Coord, Position)> = successors
            .iter()
            .filter(|(_, successor)| !successor.is_draw())
            .collect();

        if live.is_empty() {
            self.store(key, None);
            return None;
        }

        let opponent = player.opponent();
        for (coord, successor) in live {
            // A successor the opponent can punish with a forced win of its
            // own is a blunder; skip it.
            if self.search(successor, opponent, depth).is_some() {
                continue;
            }
            if self.search(successor, player, depth + 1).is_some() {
                let result = Some(*coord);
                self.store(key, result);
                return result;
            }
        }

        // Exhausted without proof. Like the cutoff above this is not a
        // definite negative, so it is recomputed when queried again.
        None
    }

    fn store(&mut self, key: CacheKey, result: Option<Coord>) {
        self.stats.cache_stores += 1;
        self.cache.record(key, result);
    }
}
