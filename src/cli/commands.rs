//! Subcommands of the `noughts` binary

pub mod best_move;
pub mod export;
pub mod moves;
pub mod self_play;

use anyhow::{Context, Result};

use crate::tictactoe::Board3;

/// Parse the `--state` argument, defaulting to the empty board
pub(crate) fn parse_state(state: Option<&str>) -> Result<Board3> {
    match state {
        Some(s) => s
            .parse()
            .with_context(|| format!("failed to parse board '{s}'")),
        None => Ok(Board3::new()),
    }
}
