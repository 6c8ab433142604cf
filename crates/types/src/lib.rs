//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no game logic, making them usable in any context
//! (board engine, session controller, snapshots handed to a renderer).
//!
//! # Coordinates
//!
//! Positions are `(row, col)`, 0-indexed:
//!
//! - **row** grows downwards; row 0 is the top of the board and gravity pulls towards higher rows
//! - **col** grows to the right
//!
//! Positions order row-major (row first, then column), which is also the iteration
//! order of every match set.
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_ROWS` | 8 | Board height |
//! | `DEFAULT_COLS` | 8 | Board width |
//! | `TILE_KINDS` | 4 | Number of tile colors |
//! | `MIN_RUN` | 3 | Shortest run that counts as a match |
//! | `POINTS_PER_TILE` | 100 | Score per matched position |
//!
//! # Examples
//!
//! ```
//! use match_three_types::{Position, TileKind, EMPTY_TILE};
//!
//! let a = Position::new(2, 3);
//! assert!(a.is_adjacent(Position::new(2, 4)));
//! assert!(!a.is_adjacent(Position::new(3, 4)));
//!
//! let kind = TileKind::new(2);
//! assert_eq!(kind.index(), 2);
//! assert_eq!(match_three_types::cell_to_i8(Some(kind)), 2);
//! assert_eq!(match_three_types::cell_to_i8(None), EMPTY_TILE);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Default board height in cells
pub const DEFAULT_ROWS: usize = 8;

/// Default board width in cells
pub const DEFAULT_COLS: usize = 8;

/// Default number of tile kinds (colors)
pub const TILE_KINDS: u8 = 4;

/// Shortest run of identical tiles that counts as a match
pub const MIN_RUN: usize = 3;

/// Points awarded per matched position
pub const POINTS_PER_TILE: u32 = 100;

/// Numeric encoding of an empty cell at snapshot boundaries
pub const EMPTY_TILE: i8 = -1;

/// Largest tile kind count whose kinds all encode as non-negative `i8`
pub const MAX_TILE_KINDS: u8 = i8::MAX as u8;

/// A tile kind (color) index in `[0, K)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TileKind(u8);

impl TileKind {
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    pub const fn index(self) -> u8 {
        self.0
    }
}

impl fmt::Display for TileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A cell on the board
///
/// - `None`: Empty cell awaiting refill
/// - `Some(TileKind)`: Live tile
pub type Cell = Option<TileKind>;

/// Encode a cell as a signed integer (`-1` for empty)
pub fn cell_to_i8(cell: Cell) -> i8 {
    match cell {
        Some(kind) => kind.index() as i8,
        None => EMPTY_TILE,
    }
}

/// Decode a signed integer into a cell
///
/// Returns `None` for negative values other than [`EMPTY_TILE`].
pub fn cell_from_i8(value: i8) -> Option<Cell> {
    match value {
        EMPTY_TILE => Some(None),
        v if v >= 0 => Some(Some(TileKind::new(v as u8))),
        _ => None,
    }
}

/// A `(row, col)` coordinate on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// `|Δrow| + |Δcol|`
    pub fn manhattan_distance(self, other: Position) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// True when `other` is exactly one step away along exactly one axis
    pub fn is_adjacent(self, other: Position) -> bool {
        self.manhattan_distance(other) == 1
    }

    /// True when both positions share a row
    pub fn same_row(self, other: Position) -> bool {
        self.row == other.row
    }

    /// True when both positions share a column
    pub fn same_col(self, other: Position) -> bool {
        self.col == other.col
    }

    /// Neighbor one column to the right (unchecked against board width)
    pub fn right(self) -> Position {
        Position::new(self.row, self.col + 1)
    }

    /// Neighbor one row below (unchecked against board height)
    pub fn down(self) -> Position {
        Position::new(self.row + 1, self.col)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
