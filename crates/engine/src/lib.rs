//! Game session engine.
//!
//! Drives a [`match_three_core::Board`] the way an interactive front-end does: two clicks
//! select and swap, an idle tick clears whatever the last refill lined up, and the session
//! reports game over once no swap can match. Rendering and timing stay with the caller.

pub mod session;

pub use match_three_core as core;
pub use match_three_types as types;

pub use session::{ClickOutcome, GameSession, TickOutcome};
