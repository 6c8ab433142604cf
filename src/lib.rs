//! Match-three (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof so front-ends and tests can depend on a
//! single package: `match_three::{core, engine, types}`.

pub use match_three_core as core;
pub use match_three_engine as engine;
pub use match_three_types as types;
