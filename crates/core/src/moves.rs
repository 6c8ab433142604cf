//! Move availability
//!
//! Exhaustive search: every cell is swapped speculatively with its right and lower
//! neighbor until one swap produces a match. No heuristics, O(rows * cols) swap
//! evaluations in the worst case.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::rng::TileSource;
use crate::types::Position;

impl<R: TileSource> Board<R> {
    /// First neighbor swap (row-major, right before down) that would produce a match
    pub fn find_possible_move(&mut self) -> Option<(Position, Position)> {
        for row in 0..self.rows() {
            for col in 0..self.cols() {
                let here = Position::new(row, col);
                let mut partners: ArrayVec<Position, 2> = ArrayVec::new();
                if col + 1 < self.cols() {
                    partners.push(here.right());
                }
                if row + 1 < self.rows() {
                    partners.push(here.down());
                }
                for other in partners {
                    if !self.evaluate_swap_unchecked(here, other).is_empty() {
                        return Some((here, other));
                    }
                }
            }
        }
        None
    }

    /// True when at least one neighbor swap would produce a match
    pub fn has_possible_moves(&mut self) -> bool {
        self.find_possible_move().is_some()
    }
}
