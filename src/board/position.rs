//! Position: a snapshot of the grid's cell marks.
//!
//! ## Immutability
//!
//! A `Position` is never mutated once built. Branching in the search (and
//! accepting a move in the game loop) goes through [`Position::with_mark`],
//! which returns a fresh snapshot. The grid is an `im::Vector`, so a
//! snapshot clone is O(1) and structurally shared — cheap enough to build
//! one per explored search node.
//!
//! ## Derived state
//!
//! `winner`, `is_draw`, `is_over`, and `open_cells` are computed on demand
//! from the cells; nothing is cached inside the position itself.

use im::Vector;
use smallvec::SmallVec;

use super::lines::{step, DIRECTIONS};
use crate::core::mark::cell_char;
use crate::core::{Coord, GameConfig, Mark};

/// Open-cell list sized to keep small boards off the heap.
pub type OpenCells = SmallVec<[Coord; 16]>;

/// An immutable grid of cell marks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    config: GameConfig,
    cells: Vector<Option<Mark>>,
}

impl Position {
    /// Create an all-empty position.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let cells = std::iter::repeat(None).take(config.cell_count()).collect();
        Self { config, cells }
    }

    /// The configuration this position was built with.
    #[must_use]
    pub fn config(&self) -> GameConfig {
        self.config
    }

    /// Number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.config.width
    }

    /// Number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.config.height
    }

    fn index(&self, coord: Coord) -> usize {
        coord.row * self.config.width + coord.col
    }

    /// Whether a coordinate lies on the grid.
    #[must_use]
    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.row < self.config.height && coord.col < self.config.width
    }

    /// The mark at a cell, if any.
    ///
    /// ## Panics
    ///
    /// Panics when the coordinate is out of bounds; callers validate
    /// bounds first (the search only generates in-bounds coordinates).
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<Mark> {
        self.cells[self.index(coord)]
    }

    /// Build the successor position with `mark` placed at `coord`.
    ///
    /// The cell must be empty; the search engine only branches on open
    /// cells, and the game-facing path validates before calling.
    #[must_use]
    pub fn with_mark(&self, coord: Coord, mark: Mark) -> Self {
        debug_assert!(self.get(coord).is_none(), "cell must be empty");
        let idx = self.index(coord);
        Self {
            config: self.config,
            cells: self.cells.update(idx, Some(mark)),
        }
    }

    // === Derived state ===

    /// Every empty coordinate, in row-major order.
    ///
    /// The order is contractual: the solver's tie-breaking is "first open
    /// cell in this order that satisfies the search".
    #[must_use]
    pub fn open_cells(&self) -> OpenCells {
        let mut open = OpenCells::new();
        for row in 0..self.config.height {
            for col in 0..self.config.width {
                let coord = Coord::new(row, col);
                if self.get(coord).is_none() {
                    open.push(coord);
                }
            }
        }
        open
    }

    /// The winning player, if a run of `win_count` identical marks exists.
    ///
    /// X is checked before O. In a well-formed game at most one player can
    /// have a run; that is a property of play, not something enforced here.
    #[must_use]
    pub fn winner(&self) -> Option<Mark> {
        if self.has_winning_run(Mark::X) {
            return Some(Mark::X);
        }
        if self.has_winning_run(Mark::O) {
            return Some(Mark::O);
        }
        None
    }

    fn has_winning_run(&self, mark: Mark) -> bool {
        for row in 0..self.config.height {
            for col in 0..self.config.width {
                let start = Coord::new(row, col);
                if self.get(start) != Some(mark) {
                    continue;
                }
                for delta in DIRECTIONS {
                    if self.run_from(start, delta, mark) {
                        return true;
                    }
                }
            }
        }
        false
    }

    /// Whether a full `win_count` run of `mark` starts at `start` along
    /// `delta`, guarding against running off the grid edge.
    fn run_from(&self, start: Coord, delta: (isize, isize), mark: Mark) -> bool {
        for k in 0..self.config.win_count {
            match step(start, delta, k, self.config.width, self.config.height) {
                Some(coord) if self.get(coord) == Some(mark) => {}
                _ => return false,
            }
        }
        true
    }

    /// Whether the board is full with no winner.
    #[must_use]
    pub fn is_draw(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some()) && self.winner().is_none()
    }

    /// Whether the game has ended in this position.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.is_draw() || self.winner().is_some()
    }

    // === Canonical key ===

    /// Row-major concatenation of cell characters.
    ///
    /// Two positions with the same key are identical for search purposes.
    /// Board symmetries are deliberately not folded: rotated or reflected
    /// positions get distinct keys and distinct cache entries.
    #[must_use]
    pub fn key(&self) -> String {
        self.cells.iter().map(|cell| cell_char(*cell)).collect()
    }

    // === Rendering ===

    /// Fixed-width text grid with column letters as a header row and
    /// 1-based row numbers down the left.
    ///
    /// The coordinate system shown here matches the move-code parser
    /// exactly: columns `A..`, rows `1..`.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::from(" ");
        for col in 0..self.config.width {
            out.push((b'A' + col as u8) as char);
        }
        out.push('\n');

        for row in 0..self.config.height {
            out.push_str(&(row + 1).to_string());
            for col in 0..self.config.width {
                out.push(cell_char(self.get(Coord::new(row, col))));
            }
            out.push('\n');
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config3() -> GameConfig {
        GameConfig::new(3, 3, 3)
    }

    /// Build a position from rows of 'X', 'O', and '-' characters.
    fn position_from(config: GameConfig, rows: &[&str]) -> Position {
        let mut position = Position::new(config);
        for (r, row) in rows.iter().enumerate() {
            for (c, ch) in row.chars().enumerate() {
                let mark = match ch {
                    'X' => Mark::X,
                    'O' => Mark::O,
                    _ => continue,
                };
                position = position.with_mark(Coord::new(r, c), mark);
            }
        }
        position
    }

    #[test]
    fn test_empty_position() {
        let position = Position::new(config3());
        assert_eq!(position.winner(), None);
        assert!(!position.is_draw());
        assert!(!position.is_over());
        assert_eq!(position.open_cells().len(), 9);
        assert_eq!(position.key(), "---------");
    }

    #[test]
    fn test_with_mark_leaves_original_untouched() {
        let position = Position::new(config3());
        let next = position.with_mark(Coord::new(1, 1), Mark::X);

        assert_eq!(position.get(Coord::new(1, 1)), None);
        assert_eq!(next.get(Coord::new(1, 1)), Some(Mark::X));
        assert_eq!(next.open_cells().len(), 8);
    }

    #[test]
    fn test_open_cells_row_major() {
        let position = position_from(config3(), &["X--", "-O-", "---"]);
        let open: Vec<Coord> = position.open_cells().into_iter().collect();
        assert_eq!(
            open,
            vec![
                Coord::new(0, 1),
                Coord::new(0, 2),
                Coord::new(1, 0),
                Coord::new(1, 2),
                Coord::new(2, 0),
                Coord::new(2, 1),
                Coord::new(2, 2),
            ]
        );
    }

    #[test]
    fn test_horizontal_win() {
        let position = position_from(config3(), &["XXX", "OO-", "---"]);
        assert_eq!(position.winner(), Some(Mark::X));
        assert!(position.is_over());
        assert!(!position.is_draw());
    }

    #[test]
    fn test_vertical_win() {
        let position = position_from(config3(), &["OX-", "OX-", "O-X"]);
        assert_eq!(position.winner(), Some(Mark::O));
    }

    #[test]
    fn test_diagonal_win() {
        let position = position_from(config3(), &["XO-", "OX-", "--X"]);
        assert_eq!(position.winner(), Some(Mark::X));
    }

    #[test]
    fn test_anti_diagonal_win() {
        let position = position_from(config3(), &["X-O", "XO-", "O-X"]);
        assert_eq!(position.winner(), Some(Mark::O));
    }

    #[test]
    fn test_no_win_across_edge() {
        // Two at a row's end plus one at the next row's start is not a run.
        let config = GameConfig::new(3, 3, 3);
        let position = position_from(config, &["-XX", "X--", "---"]);
        assert_eq!(position.winner(), None);
    }

    #[test]
    fn test_run_length_respects_win_count() {
        let config = GameConfig::new(5, 1, 4);
        let position = position_from(config, &["XXX--"]);
        assert_eq!(position.winner(), None);

        let position = position.with_mark(Coord::new(0, 3), Mark::X);
        assert_eq!(position.winner(), Some(Mark::X));
    }

    #[test]
    fn test_full_board_without_run_is_draw() {
        let position = position_from(config3(), &["XOX", "XXO", "OXO"]);
        assert_eq!(position.winner(), None);
        assert!(position.is_draw());
        assert!(position.is_over());
    }

    #[test]
    fn test_key_is_row_major() {
        let position = position_from(config3(), &["X--", "-O-", "--X"]);
        assert_eq!(position.key(), "X---O---X");
    }

    #[test]
    fn test_render_layout() {
        let position = position_from(config3(), &["X--", "-O-", "---"]);
        assert_eq!(position.render(), " ABC\n1X--\n2-O-\n3---\n");
    }

    #[test]
    fn test_render_nonsquare() {
        let config = GameConfig::new(4, 2, 2);
        let position = position_from(config, &["X---", "---O"]);
        assert_eq!(position.render(), " ABCD\n1X---\n2---O\n");
    }
}
