//! Moves command - List the minimax value of every legal move

use anyhow::Result;
use clap::Parser;

use super::parse_state;
use crate::{
    cli::output::{describe_value, print_board, print_section},
    search::MinimaxSolver,
    tictactoe::Player,
};

#[derive(Parser, Debug)]
#[command(about = "Show the value of every legal move")]
pub struct MovesArgs {
    /// Board to analyze (defaults to the empty board)
    #[arg(long)]
    pub state: Option<String>,
}

pub fn execute(args: MovesArgs) -> Result<()> {
    let board = parse_state(args.state.as_deref())?;
    let mut solver = MinimaxSolver::new();
    let moves = solver.evaluate_moves(&board);

    print_section("Position");
    print_board(&board);

    if moves.is_empty() {
        println!("\n  (state is terminal)");
        return Ok(());
    }

    let to_move = board.turn();
    let best = match to_move {
        Player::X => moves.iter().map(|&(_, value)| value).max(),
        Player::O => moves.iter().map(|&(_, value)| value).min(),
    };

    print_section(&format!("Moves for {to_move}"));
    for (mv, value) in &moves {
        let marker = if Some(*value) == best { " *" } else { "" };
        println!(
            "  {:8} {value:>2}  {}{marker}",
            mv.to_string(),
            describe_value(*value)
        );
    }

    Ok(())
}
