//! Game configuration parameters.

use serde::{Deserialize, Serialize};

/// Board dimensions and the run length required to win.
///
/// The search horizon is derived from `win_count`; see [`GameConfig::horizon`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of columns.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
    /// Contiguous run of identical marks required to win.
    pub win_count: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 3,
            height: 3,
            win_count: 3,
        }
    }
}

impl GameConfig {
    /// Create a configuration.
    ///
    /// ## Panics
    ///
    /// Panics when a dimension is zero or `win_count` is zero or longer
    /// than the longest line on the board.
    #[must_use]
    pub fn new(width: usize, height: usize, win_count: usize) -> Self {
        assert!(width >= 1, "Board must be at least 1 cell wide");
        assert!(height >= 1, "Board must be at least 1 cell tall");
        assert!(win_count >= 1, "Win count must be at least 1");
        assert!(
            win_count <= width.max(height),
            "Win count cannot exceed the longest board dimension"
        );
        Self {
            width,
            height,
            win_count,
        }
    }

    /// Create a config with a custom width.
    #[must_use]
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Create a config with a custom height.
    #[must_use]
    pub fn with_height(mut self, height: usize) -> Self {
        self.height = height;
        self
    }

    /// Create a config with a custom win count.
    #[must_use]
    pub fn with_win_count(mut self, win_count: usize) -> Self {
        self.win_count = win_count;
        self
    }

    /// Total cell count.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Search depth at which the solver stops looking for deeper wins.
    ///
    /// A position whose forced win lies beyond this many of the searcher's
    /// own moves is reported as having none. Intentional incompleteness,
    /// not a bug.
    #[must_use]
    pub fn horizon(&self) -> u32 {
        self.win_count as u32 + 1
    }
}
