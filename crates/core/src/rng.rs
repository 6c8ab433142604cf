//! RNG module - injectable tile sources
//!
//! The board never reaches for process-wide randomness. Every new tile is drawn from a
//! [`TileSource`] handed to the board at construction, so a fixed seed reproduces a game
//! exactly and tests can script the tiles that fall in.

use crate::types::TileKind;

/// Source of fresh tile kinds for seeding and refilling the board
pub trait TileSource {
    /// Draw a tile kind uniformly from `[0, kinds)`. `kinds` is never zero.
    fn next_kind(&mut self, kinds: u8) -> TileKind;
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// The low bits of a power-of-two LCG cycle with tiny periods (bit 1 repeats every
    /// 4 draws), so the range is taken from the high bits by multiply-shift.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Current generator state (reseeding with it continues the same sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl TileSource for SimpleRng {
    fn next_kind(&mut self, kinds: u8) -> TileKind {
        TileKind::new(self.next_range(kinds as u32) as u8)
    }
}

/// Replays a fixed list of tile kinds, wrapping around at the end
///
/// Useful for puzzles and tests that need to know exactly what refills a board.
#[derive(Debug, Clone)]
pub struct ScriptedTiles {
    script: Vec<u8>,
    cursor: usize,
}

impl ScriptedTiles {
    /// Returns `None` for an empty script.
    pub fn new(script: Vec<u8>) -> Option<Self> {
        if script.is_empty() {
            return None;
        }
        Some(Self { script, cursor: 0 })
    }
}

impl TileSource for ScriptedTiles {
    fn next_kind(&mut self, kinds: u8) -> TileKind {
        let value = self.script[self.cursor] % kinds;
        self.cursor = (self.cursor + 1) % self.script.len();
        TileKind::new(value)
    }
}
