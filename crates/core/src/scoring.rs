//! Scoring module
//!
//! Every matched position is worth a flat [`POINTS_PER_TILE`]. The score only ever grows
//! and saturates instead of wrapping.

use crate::board::Board;
use crate::rng::TileSource;
use crate::types::POINTS_PER_TILE;

/// Points for clearing `match_count` positions
pub fn points_for(match_count: usize) -> u32 {
    let count = u32::try_from(match_count).unwrap_or(u32::MAX);
    count.saturating_mul(POINTS_PER_TILE)
}

impl<R: TileSource> Board<R> {
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Add points for `match_count` matched positions, returning the points added
    ///
    /// A zero count leaves the score unchanged.
    pub fn update_score(&mut self, match_count: usize) -> u32 {
        if match_count == 0 {
            return 0;
        }
        let points = points_for(match_count);
        self.score = self.score.saturating_add(points);
        points
    }

    pub fn reset_score(&mut self) {
        self.score = 0;
    }
}
