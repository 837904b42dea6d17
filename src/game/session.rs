//! Game session: the live board plus the session-scoped search cache.
//!
//! The human plays `X`, the computer plays `O`. Accepting a human move
//! validates it, places the mark, and — unless that ended the game —
//! immediately triggers the computer reply: the forced-win move when the
//! solver finds one, otherwise a uniformly random open cell.
//!
//! The cache lives as long as the session and can be handed to a rematch
//! with [`Game::into_cache`] / [`Game::with_cache`] so learned positions
//! carry over within one process.

use tracing::debug;

use crate::board::Position;
use crate::core::{Coord, GameConfig, GameRng, Mark};
use crate::search::{SearchCache, Solver};

use super::error::InvalidMove;

/// Parse a two-character move code into a coordinate.
///
/// A capital letter selects the column (`A` = 0), a digit the row
/// (`1` = 0). Bounds against a concrete board are checked by
/// [`Game::place`], not here.
pub fn parse_move_code(code: &str) -> Result<Coord, InvalidMove> {
    let bytes = code.as_bytes();
    if bytes.len() != 2 {
        return Err(InvalidMove::MalformedCode);
    }
    if !bytes[0].is_ascii_uppercase() {
        return Err(InvalidMove::ColumnLetter);
    }
    if !(b'1'..=b'9').contains(&bytes[1]) {
        return Err(InvalidMove::RowDigit);
    }
    Ok(Coord::new(
        (bytes[1] - b'1') as usize,
        (bytes[0] - b'A') as usize,
    ))
}

/// One game between the human (`X`) and the computer (`O`).
pub struct Game {
    config: GameConfig,
    position: Position,
    cache: SearchCache,
    rng: GameRng,
}

impl Game {
    /// Start a game with a fresh cache and an entropy-seeded RNG.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::with_cache(config, SearchCache::new())
    }

    /// Start a game reusing a cache from an earlier game in this session.
    ///
    /// The cache must come from a game with the same configuration.
    #[must_use]
    pub fn with_cache(config: GameConfig, cache: SearchCache) -> Self {
        Self {
            config,
            position: Position::new(config),
            cache,
            rng: GameRng::from_entropy(),
        }
    }

    /// Pin the RNG seed (random fallback and openings become reproducible).
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = GameRng::new(seed);
        self
    }

    /// The configuration this game was created with.
    #[must_use]
    pub fn config(&self) -> GameConfig {
        self.config
    }

    /// The current board.
    #[must_use]
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Whether the game has ended (draw or winner).
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.position.is_over()
    }

    /// The winning mark, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Mark> {
        self.position.winner()
    }

    /// Render the board with the coordinate system the move codes use.
    #[must_use]
    pub fn render(&self) -> String {
        self.position.render()
    }

    /// Borrow the session cache.
    #[must_use]
    pub fn cache(&self) -> &SearchCache {
        &self.cache
    }

    /// Take the cache for a rematch.
    #[must_use]
    pub fn into_cache(self) -> SearchCache {
        self.cache
    }

    // === Move acceptance ===

    /// Accept a human move in code form (`"A3"`).
    pub fn place_code(&mut self, code: &str) -> Result<(), InvalidMove> {
        self.place(parse_move_code(code)?)
    }

    /// Accept a human move, then let the computer reply if the game goes on.
    ///
    /// On any validation failure the board is left unchanged.
    pub fn place(&mut self, coord: Coord) -> Result<(), InvalidMove> {
        if coord.col >= self.config.width {
            return Err(InvalidMove::ColumnOutOfBounds(coord.col));
        }
        if coord.row >= self.config.height {
            return Err(InvalidMove::RowOutOfBounds(coord.row));
        }
        if self.position.get(coord).is_some() {
            return Err(InvalidMove::CellTaken(coord));
        }

        self.position = self.position.with_mark(coord, Mark::X);

        if !self.is_over() {
            self.computer_move();
        }
        Ok(())
    }

    // === Computer play ===

    /// Play the computer's move.
    ///
    /// Returns `true` when a forced win was found and played, `false` when
    /// the computer fell back to a random open cell. Callers invoke this
    /// directly only to let the computer open the game.
    pub fn computer_move(&mut self) -> bool {
        let mut solver = Solver::new(&mut self.cache);
        let forced = solver.forced_win(&self.position, Mark::O);
        let stats = *solver.stats();

        match forced {
            Some(coord) => {
                debug!(%coord, ?stats, "computer plays forced win");
                self.position = self.position.with_mark(coord, Mark::O);
                true
            }
            None => {
                debug!(?stats, "no forced win within horizon, playing random");
                self.random_move(Mark::O);
                false
            }
        }
    }

    /// Place `mark` on a uniformly random open cell.
    ///
    /// Samples from a snapshot of the open cells taken at call time. No-op
    /// on a full board.
    pub fn random_move(&mut self, mark: Mark) -> Option<Coord> {
        let open = self.position.open_cells();
        let coord = *self.rng.choose(&open)?;
        self.position = self.position.with_mark(coord, mark);
        Some(coord)
    }

    /// Play one random opening mark for each player.
    pub fn random_opening(&mut self) {
        self.random_move(Mark::X);
        self.random_move(Mark::O);
    }
}
