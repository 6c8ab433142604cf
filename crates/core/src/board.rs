//! Board module - owns the tile grid
//!
//! The grid is `rows x cols`, fixed at construction, stored as a flat row-major vector
//! for cache locality. Coordinates are `(row, col)` with row 0 at the top; gravity pulls
//! tiles towards higher row indices.
//!
//! Every public accessor validates positions and returns [`BoardError::OutOfBounds`]
//! instead of clamping or wrapping. Internal scans work on positions they generated
//! themselves and use the unchecked helpers.

use std::fmt;

use crate::config::BoardConfig;
use crate::error::BoardError;
use crate::rng::{SimpleRng, TileSource};
use crate::types::{cell_from_i8, Cell, Position, TileKind};

/// The game board
#[derive(Debug, Clone)]
pub struct Board<R = SimpleRng> {
    rows: usize,
    cols: usize,
    tile_kinds: u8,
    enforce_adjacent: bool,
    max_stabilize_passes: usize,
    /// Flat array of cells, row-major order (row * cols + col)
    cells: Vec<Cell>,
    pub(crate) score: u32,
    source: R,
}

impl Board<SimpleRng> {
    /// Create a randomly seeded board driven by a [`SimpleRng`] seeded from `config.seed`
    ///
    /// The board is not stabilized; call [`Board::stabilize`] before play.
    pub fn new(config: BoardConfig) -> Result<Self, BoardError> {
        let rng = SimpleRng::new(config.seed);
        Self::with_source(config, rng)
    }

    /// Build a board from hand-written rows, `-1` marking an empty cell
    ///
    /// The row count and width come from `rows`; `config` supplies everything else.
    pub fn from_rows(rows: &[&[i8]], config: BoardConfig) -> Result<Self, BoardError> {
        let rng = SimpleRng::new(config.seed);
        Self::from_rows_with_source(rows, config, rng)
    }
}

impl<R: TileSource> Board<R> {
    /// Create a randomly seeded board drawing tiles from `source`
    pub fn with_source(config: BoardConfig, source: R) -> Result<Self, BoardError> {
        config.validate()?;
        let mut board = Self::empty(&config, config.rows, config.cols, source);
        board.fill_board();
        Ok(board)
    }

    /// Hand-written board that refills from `source`
    pub fn from_rows_with_source(
        rows: &[&[i8]],
        config: BoardConfig,
        source: R,
    ) -> Result<Self, BoardError> {
        config.validate()?;
        let width = rows.first().map_or(0, |row| row.len());
        if rows.iter().any(|row| row.len() != width) {
            return Err(BoardError::RaggedRows);
        }

        let mut board = Self::empty(&config, rows.len(), width, source);
        for (r, values) in rows.iter().enumerate() {
            for (c, &value) in values.iter().enumerate() {
                let cell = cell_from_i8(value).ok_or(BoardError::InvalidTile {
                    kind: value as u8,
                    tile_kinds: board.tile_kinds,
                })?;
                board.set_tile(Position::new(r, c), cell)?;
            }
        }
        Ok(board)
    }

    fn empty(config: &BoardConfig, rows: usize, cols: usize, source: R) -> Self {
        Self {
            rows,
            cols,
            tile_kinds: config.tile_kinds,
            enforce_adjacent: config.enforce_adjacent,
            max_stabilize_passes: config.max_stabilize_passes,
            cells: vec![None; rows * cols],
            score: 0,
            source,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn tile_kinds(&self) -> u8 {
        self.tile_kinds
    }

    pub fn enforce_adjacent(&self) -> bool {
        self.enforce_adjacent
    }

    pub fn set_enforce_adjacent(&mut self, enforce: bool) {
        self.enforce_adjacent = enforce;
    }

    pub(crate) fn max_stabilize_passes(&self) -> usize {
        self.max_stabilize_passes
    }

    /// Check if position is inside the grid
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Flat index of `pos`, or an out-of-bounds error
    pub(crate) fn check(&self, pos: Position) -> Result<usize, BoardError> {
        if !self.contains(pos) {
            return Err(self.out_of_bounds(pos));
        }
        Ok(self.index(pos))
    }

    pub(crate) fn out_of_bounds(&self, pos: Position) -> BoardError {
        BoardError::OutOfBounds {
            position: pos,
            rows: self.rows,
            cols: self.cols,
        }
    }

    #[inline(always)]
    fn index(&self, pos: Position) -> usize {
        pos.row * self.cols + pos.col
    }

    /// Unchecked read for positions generated inside the crate
    #[inline(always)]
    pub(crate) fn cell(&self, pos: Position) -> Cell {
        self.cells[self.index(pos)]
    }

    #[inline(always)]
    pub(crate) fn put(&mut self, pos: Position, cell: Cell) {
        let idx = self.index(pos);
        self.cells[idx] = cell;
    }

    /// Tile at `pos` (`None` when empty)
    pub fn get_tile(&self, pos: Position) -> Result<Cell, BoardError> {
        let idx = self.check(pos)?;
        Ok(self.cells[idx])
    }

    /// Overwrite the cell at `pos`
    pub fn set_tile(&mut self, pos: Position, cell: Cell) -> Result<(), BoardError> {
        let idx = self.check(pos)?;
        if let Some(kind) = cell {
            if kind.index() >= self.tile_kinds {
                return Err(BoardError::InvalidTile {
                    kind: kind.index(),
                    tile_kinds: self.tile_kinds,
                });
            }
        }
        self.cells[idx] = cell;
        Ok(())
    }

    /// Exchange two cells, no validation beyond bounds
    ///
    /// Applying the same swap twice restores the board.
    pub fn swap(&mut self, p1: Position, p2: Position) -> Result<(), BoardError> {
        let a = self.check(p1)?;
        let b = self.check(p2)?;
        self.cells.swap(a, b);
        Ok(())
    }

    pub(crate) fn swap_unchecked(&mut self, p1: Position, p2: Position) {
        let a = self.index(p1);
        let b = self.index(p2);
        self.cells.swap(a, b);
    }

    fn random_kind(&mut self) -> TileKind {
        self.source.next_kind(self.tile_kinds)
    }

    /// Reseed every cell with a random tile kind
    pub fn fill_board(&mut self) {
        for idx in 0..self.cells.len() {
            let kind = self.random_kind();
            self.cells[idx] = Some(kind);
        }
    }

    /// Give `pos` a fresh random tile
    pub fn fill_tile(&mut self, pos: Position) -> Result<(), BoardError> {
        self.check(pos)?;
        self.fill_tile_unchecked(pos);
        Ok(())
    }

    pub(crate) fn fill_tile_unchecked(&mut self, pos: Position) {
        let kind = self.random_kind();
        self.put(pos, Some(kind));
    }

    /// Give every position a fresh, independent random tile
    ///
    /// All positions are validated before any cell changes.
    pub fn fill_positions(&mut self, positions: &[Position]) -> Result<(), BoardError> {
        for &pos in positions {
            self.check(pos)?;
        }
        for &pos in positions {
            self.fill_tile_unchecked(pos);
        }
        Ok(())
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cells of one row, left to right
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        Some(&self.cells[start..start + self.cols])
    }

    /// Count of empty cells
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }
}

impl<R> fmt::Display for Board<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols.max(1)) {
            let line: Vec<String> = row
                .iter()
                .map(|cell| match cell {
                    Some(kind) => kind.to_string(),
                    None => ".".to_string(),
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
