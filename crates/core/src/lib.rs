//! Board engine - pure, deterministic, and testable
//!
//! This crate contains every rule of the tile-matching game and nothing else.
//! It has **no dependencies** on rendering, input devices, timers, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical boards and refills
//! - **Testable**: Hand-written boards and scripted tile sources pin every rule down
//! - **Portable**: Any controller (terminal, GUI, headless bot) drives it the same way
//!
//! # Module Structure
//!
//! - [`board`]: fixed-size grid storage, bounds-checked accessors, swap, refill
//! - [`matching`]: line scanning, full-board match search, speculative swap evaluation
//! - [`cascade`]: gravity collapse, stabilization and full cascade resolution
//! - [`moves`]: exhaustive search for a swap that produces a match
//! - [`scoring`]: flat per-tile scoring
//! - [`rng`]: injectable tile sources (seeded LCG, scripted sequence)
//! - [`snapshot`]: serializable copy of the board for polling controllers
//!
//! # Game Rules
//!
//! - **Swaps**: only grid neighbors may be swapped (configurable)
//! - **Matches**: three or more identical tiles in a row or column; longer runs match whole
//! - **Gravity**: cleared cells are filled by the tiles above them; new tiles drop in on top
//! - **Scoring**: 100 points per matched position
//! - **Game over**: no neighbor swap anywhere produces a match
//!
//! # Example
//!
//! ```
//! use match_three_core::{Board, BoardConfig};
//!
//! let mut board = Board::new(BoardConfig::default().with_seed(12345)).unwrap();
//! board.stabilize().unwrap();
//! assert!(board.find_all_matches().is_empty());
//!
//! if let Some((a, b)) = board.find_possible_move() {
//!     let matches = board.evaluate_swap(a, b).unwrap();
//!     assert!(!matches.is_empty());
//!
//!     // Evaluation never commits; the caller does
//!     board.swap(a, b).unwrap();
//!     board.update_score(matches.len());
//!     let refill = board.collapse_columns(&matches).unwrap();
//!     board.fill_positions(&refill).unwrap();
//!     assert!(board.score() >= 300);
//! }
//! ```

pub mod board;
pub mod cascade;
pub mod config;
pub mod error;
pub mod matching;
pub mod moves;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use match_three_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use cascade::CascadeReport;
pub use config::BoardConfig;
pub use error::BoardError;
pub use matching::MatchSet;
pub use rng::{ScriptedTiles, SimpleRng, TileSource};
pub use scoring::points_for;
pub use snapshot::BoardSnapshot;
