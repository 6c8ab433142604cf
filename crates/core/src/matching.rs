//! Match detection
//!
//! A match is a run of [`MIN_RUN`] or more identical live tiles along a row or a column.
//! Lines are scanned with a sliding window of three; when the window matches, the run is
//! extended greedily and scanning resumes after it. Empty cells never match.
//!
//! Swap evaluation is speculative: the swap is applied, the affected lines are scanned,
//! and the swap is reverted before returning. The board is never left mutated.

use std::collections::BTreeSet;

use log::trace;

use crate::board::Board;
use crate::error::BoardError;
use crate::rng::TileSource;
use crate::types::{Position, MIN_RUN};

/// Deduplicated set of matched positions, iterated in row-major order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchSet {
    positions: BTreeSet<Position>,
}

impl MatchSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if the position was already present
    pub fn insert(&mut self, pos: Position) -> bool {
        self.positions.insert(pos)
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.positions.contains(&pos)
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.positions.iter().copied()
    }

    /// Merge `other` into this set
    pub fn union(&mut self, other: &MatchSet) {
        self.positions.extend(other.positions.iter().copied());
    }

    pub fn to_vec(&self) -> Vec<Position> {
        self.iter().collect()
    }

    /// Matched cells per column, indexed by column (positions past `cols` are ignored)
    pub fn column_counts(&self, cols: usize) -> Vec<usize> {
        let mut counts = vec![0; cols];
        for pos in self.iter() {
            if let Some(count) = counts.get_mut(pos.col) {
                *count += 1;
            }
        }
        counts
    }
}

impl FromIterator<Position> for MatchSet {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        Self {
            positions: iter.into_iter().collect(),
        }
    }
}

impl Extend<Position> for MatchSet {
    fn extend<I: IntoIterator<Item = Position>>(&mut self, iter: I) {
        self.positions.extend(iter);
    }
}

impl IntoIterator for MatchSet {
    type Item = Position;
    type IntoIter = std::collections::btree_set::IntoIter<Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.positions.into_iter()
    }
}

impl<'a> IntoIterator for &'a MatchSet {
    type Item = Position;
    type IntoIter = std::iter::Copied<std::collections::btree_set::Iter<'a, Position>>;

    fn into_iter(self) -> Self::IntoIter {
        self.positions.iter().copied()
    }
}

impl<R: TileSource> Board<R> {
    /// Scan one line of `len` cells, where `at(i)` maps the i-th cell to its position
    fn scan_line(&self, len: usize, at: impl Fn(usize) -> Position, out: &mut MatchSet) {
        let mut i = 0;
        while i + MIN_RUN <= len {
            let Some(kind) = self.cell(at(i)) else {
                i += 1;
                continue;
            };
            if (1..MIN_RUN).all(|k| self.cell(at(i + k)) == Some(kind)) {
                let mut j = i;
                while j < len && self.cell(at(j)) == Some(kind) {
                    out.insert(at(j));
                    j += 1;
                }
                i = j;
            } else {
                i += 1;
            }
        }
    }

    pub(crate) fn scan_row_into(&self, row: usize, out: &mut MatchSet) {
        self.scan_line(self.cols(), |c| Position::new(row, c), out);
    }

    pub(crate) fn scan_column_into(&self, col: usize, out: &mut MatchSet) {
        self.scan_line(self.rows(), |r| Position::new(r, col), out);
    }

    /// Matches along a single row
    pub fn scan_row(&self, row: usize) -> Result<MatchSet, BoardError> {
        if row >= self.rows() {
            return Err(self.out_of_bounds(Position::new(row, 0)));
        }
        let mut out = MatchSet::new();
        self.scan_row_into(row, &mut out);
        Ok(out)
    }

    /// Matches along a single column
    pub fn scan_column(&self, col: usize) -> Result<MatchSet, BoardError> {
        if col >= self.cols() {
            return Err(self.out_of_bounds(Position::new(0, col)));
        }
        let mut out = MatchSet::new();
        self.scan_column_into(col, &mut out);
        Ok(out)
    }

    /// Every match on the board: all rows, then all columns
    pub fn find_all_matches(&self) -> MatchSet {
        let mut out = MatchSet::new();
        for row in 0..self.rows() {
            self.scan_row_into(row, &mut out);
        }
        for col in 0..self.cols() {
            self.scan_column_into(col, &mut out);
        }
        out
    }

    /// Matches that swapping `p1` and `p2` would create
    ///
    /// Returns an empty set without touching the board when adjacency is enforced and
    /// the positions are not grid neighbors. The board is identical before and after.
    pub fn evaluate_swap(&mut self, p1: Position, p2: Position) -> Result<MatchSet, BoardError> {
        self.check(p1)?;
        self.check(p2)?;
        if self.enforce_adjacent() && !p1.is_adjacent(p2) {
            return Ok(MatchSet::new());
        }
        Ok(self.evaluate_swap_unchecked(p1, p2))
    }

    pub(crate) fn evaluate_swap_unchecked(&mut self, p1: Position, p2: Position) -> MatchSet {
        let enforce = self.enforce_adjacent();
        let mut out = MatchSet::new();

        self.swap_unchecked(p1, p2);

        self.scan_row_into(p1.row, &mut out);
        // A horizontal neighbor swap shares p1's row; only rescan for distinct lines
        if !enforce || !p1.same_row(p2) {
            self.scan_row_into(p2.row, &mut out);
        }
        self.scan_column_into(p1.col, &mut out);
        if !enforce || !p1.same_col(p2) {
            self.scan_column_into(p2.col, &mut out);
        }

        self.swap_unchecked(p1, p2);

        trace!("swap {} <-> {} matches {} cells", p1, p2, out.len());
        out
    }
}
