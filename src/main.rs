//! Headless auto-player (default binary).
//!
//! Plays one session on the hint move until game over or the move limit, settling the
//! board after every move the way a timed front-end would, then reports the score.

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::{debug, info};

use match_three::core::BoardConfig;
use match_three::engine::{ClickOutcome, GameSession};
use match_three::types::{DEFAULT_COLS, DEFAULT_ROWS, TILE_KINDS};

/// Ticks allowed for one move's cascade to settle
const SETTLE_TICK_LIMIT: usize = 1_000;

#[derive(Debug, Parser)]
#[command(author, version, about = "Auto-play a match-three board and report the score")]
struct Cli {
    /// Board rows
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    rows: usize,

    /// Board columns
    #[arg(long, default_value_t = DEFAULT_COLS)]
    cols: usize,

    /// Number of tile kinds
    #[arg(long, default_value_t = TILE_KINDS)]
    kinds: u8,

    /// RNG seed
    #[arg(long, default_value_t = 1)]
    seed: u32,

    /// Stop after this many moves even if moves remain
    #[arg(long, default_value_t = 100)]
    max_moves: usize,

    /// Print the final board snapshot as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = BoardConfig::new(cli.rows, cli.cols)
        .with_tile_kinds(cli.kinds)
        .with_seed(cli.seed);
    let mut session = GameSession::new(config).context("failed to set up board")?;

    let mut moves = 0;
    while moves < cli.max_moves && !session.game_over() {
        let Some((from, to)) = session.hint() else {
            break;
        };

        session.click(from);
        match session.click(to) {
            ClickOutcome::Matched { cleared, points, .. } => {
                debug!(
                    "move {}: {} <-> {} cleared {} (+{})",
                    moves + 1,
                    from,
                    to,
                    cleared,
                    points
                );
            }
            other => anyhow::bail!("hint move {} <-> {} did not match: {:?}", from, to, other),
        }
        session.settle(SETTLE_TICK_LIMIT);
        moves += 1;
    }

    info!(
        "finished after {} moves, score {}{}",
        moves,
        session.score(),
        if session.game_over() { " (game over)" } else { "" }
    );

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&session.snapshot())?);
    } else {
        print!("{}", session.board());
        println!("score: {}", session.score());
    }
    Ok(())
}
