use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::rng::TileSource;
use crate::types::{cell_to_i8, Position};

/// Plain copy of the board for a controller or renderer to poll
///
/// Cells are row-major with `-1` for empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub rows: usize,
    pub cols: usize,
    pub cells: Vec<i8>,
    pub score: u32,
}

impl BoardSnapshot {
    pub fn get(&self, pos: Position) -> Option<i8> {
        if pos.row >= self.rows || pos.col >= self.cols {
            return None;
        }
        self.cells.get(pos.row * self.cols + pos.col).copied()
    }

    pub fn to_rows(&self) -> Vec<Vec<i8>> {
        self.cells
            .chunks(self.cols.max(1))
            .map(|row| row.to_vec())
            .collect()
    }
}

impl<R: TileSource> Board<R> {
    /// Overwrite `out` with the current state, reusing its allocation
    pub fn snapshot_into(&self, out: &mut BoardSnapshot) {
        out.rows = self.rows();
        out.cols = self.cols();
        out.cells.clear();
        out.cells.extend(self.cells().iter().map(|&cell| cell_to_i8(cell)));
        out.score = self.score();
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        let mut s = BoardSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
