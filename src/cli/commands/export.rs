//! Export command - Write the optimal policy for every reachable position

use std::{
    collections::BTreeMap,
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    cli::output::{create_progress, format_number},
    search::AlphaBeta,
    tictactoe::{Move, Player, reachable_states},
};

#[derive(Parser, Debug)]
#[command(about = "Export the optimal policy for all reachable 3x3 positions")]
pub struct ExportArgs {
    /// Output JSON file
    pub output: PathBuf,
}

/// Optimal play from one position
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyEntry {
    pub to_move: Player,
    pub best_move: Move,
    pub value: i32,
}

/// Policy file written by [`write_policy`]
#[derive(Debug, Serialize, Deserialize)]
pub struct PolicyExport {
    pub description: String,
    pub total_states: usize,
    /// Keyed by the row-major board encoding
    pub policy: BTreeMap<String, PolicyEntry>,
}

/// Solve every reachable non-terminal position and write the policy as JSON.
///
/// Returns the number of positions written.
pub fn write_policy(path: &Path, progress: bool) -> Result<usize> {
    let states: Vec<_> = reachable_states::<3>()
        .into_iter()
        .filter(|state| !state.is_terminal())
        .collect();

    let pb = create_progress(states.len() as u64, progress)?;
    let mut searcher = AlphaBeta::new();
    let mut policy = BTreeMap::new();

    for state in &states {
        let result = searcher.search(state);
        if let Some(best_move) = result.best_move {
            policy.insert(
                state.encode(),
                PolicyEntry {
                    to_move: state.turn(),
                    best_move,
                    value: result.value,
                },
            );
        }
        pb.inc(1);
        pb.set_message(format!("{} nodes", format_number(searcher.nodes())));
    }
    pb.finish_and_clear();

    let export = PolicyExport {
        description: "Optimal (alpha-beta) policy for 3x3 tic-tac-toe".to_string(),
        total_states: policy.len(),
        policy,
    };

    let file = File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), &export)
        .with_context(|| format!("failed to write policy to {}", path.display()))?;

    info!(
        states = export.total_states,
        nodes = searcher.nodes(),
        path = %path.display(),
        "policy exported"
    );
    Ok(export.total_states)
}

pub fn execute(args: ExportArgs, progress: bool) -> Result<()> {
    let count = write_policy(&args.output, progress)?;
    println!(
        "Optimal policy for {} positions exported to: {}",
        format_number(count as u64),
        args.output.display()
    );
    Ok(())
}
