//! Cascade resolution - gravity collapse, refill and stabilization
//!
//! Clearing a match set is two steps that must run in order:
//!
//! 1. [`Board::collapse_columns`] removes the matched cells, drops the surviving tiles of
//!    each affected column to the bottom, and empties the vacated top cells.
//! 2. [`Board::fill_positions`] gives the returned positions fresh tiles.
//!
//! Refilling before collapsing would overwrite tiles that are still waiting to fall.

use log::{debug, warn};

use crate::board::Board;
use crate::error::BoardError;
use crate::matching::MatchSet;
use crate::rng::TileSource;
use crate::types::Position;

/// Summary of a full cascade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CascadeReport {
    /// Number of clear-collapse-refill rounds
    pub waves: usize,
    /// Total matched positions across all waves
    pub cleared: usize,
    /// Points added to the score
    pub points: u32,
}

impl<R: TileSource> Board<R> {
    /// Remove matched cells and let each affected column fall
    ///
    /// Returns one position per vacated slot: for a column that lost `n` cells, rows
    /// `0..n` of that column, columns in ascending order. Those cells are left empty and
    /// are exactly the cells that need a refill. Columns without matches are untouched.
    pub fn collapse_columns(&mut self, matches: &MatchSet) -> Result<Vec<Position>, BoardError> {
        for pos in matches.iter() {
            self.check(pos)?;
        }
        Ok(self.collapse_unchecked(matches))
    }

    fn collapse_unchecked(&mut self, matches: &MatchSet) -> Vec<Position> {
        let rows = self.rows();
        let counts = matches.column_counts(self.cols());
        let mut refill = Vec::with_capacity(matches.len());

        for (col, &count) in counts.iter().enumerate() {
            if count == 0 {
                continue;
            }

            // Two-pointer compaction from the bottom up
            let mut write_row = rows;
            for read_row in (0..rows).rev() {
                let from = Position::new(read_row, col);
                if matches.contains(from) {
                    continue;
                }
                write_row -= 1;
                if write_row != read_row {
                    let cell = self.cell(from);
                    self.put(Position::new(write_row, col), cell);
                }
            }

            debug_assert_eq!(write_row, count);
            for row in 0..write_row {
                let pos = Position::new(row, col);
                self.put(pos, None);
                refill.push(pos);
            }
        }

        refill
    }

    /// Re-roll matched cells in place (no gravity, no score) until the board has no match
    ///
    /// Returns the number of re-roll passes. Fails once the configured pass cap is
    /// reached with matches still on the board.
    pub fn stabilize(&mut self) -> Result<usize, BoardError> {
        let cap = self.max_stabilize_passes();
        let mut passes = 0;
        loop {
            let matches = self.find_all_matches();
            if matches.is_empty() {
                debug!("board stable after {} passes", passes);
                return Ok(passes);
            }
            if passes >= cap {
                return Err(BoardError::StabilizeExhausted { passes });
            }
            for pos in matches.iter() {
                self.fill_tile_unchecked(pos);
            }
            passes += 1;
        }
    }

    /// Clear, score, collapse and refill until no match remains
    ///
    /// Stops early (with a warning) after the stabilization pass cap, leaving any
    /// remaining matches for the next call.
    pub fn resolve_cascade(&mut self) -> CascadeReport {
        let cap = self.max_stabilize_passes();
        let mut report = CascadeReport::default();
        loop {
            let matches = self.find_all_matches();
            if matches.is_empty() {
                break;
            }
            if report.waves >= cap {
                warn!("cascade stopped after {} waves with matches left", report.waves);
                break;
            }
            report.points = report.points.saturating_add(self.update_score(matches.len()));
            report.cleared += matches.len();
            let refill = self.collapse_unchecked(&matches);
            for pos in refill {
                self.fill_tile_unchecked(pos);
            }
            report.waves += 1;
        }
        if report.waves > 0 {
            debug!(
                "cascade: {} waves, {} tiles, {} points",
                report.waves, report.cleared, report.points
            );
        }
        report
    }
}
