//! Full-depth adversarial search
//!
//! X is the maximizing side and O the minimizing side; values are the
//! terminal utility reached under optimal play by both players.

pub mod alphabeta;
pub mod config;
pub mod exhaustive;

use serde::Serialize;

pub use alphabeta::{AlphaBeta, best_move, search};
pub use config::SearchConfig;
pub use exhaustive::MinimaxSolver;

use crate::tictactoe::{Board, Move};

/// Result of searching a position to the end of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    /// The chosen move, `None` when the position is already terminal
    pub best_move: Option<Move>,
    /// Game value under optimal play: +1 X wins, -1 O wins, 0 draw
    pub value: i32,
    /// Positions visited
    pub nodes: u64,
}

/// Search `board` using the strategy selected by `config`.
pub fn search_with<const N: usize>(board: &Board<N>, config: &SearchConfig) -> SearchResult {
    if config.pruning {
        search(board)
    } else {
        MinimaxSolver::new().search(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::Board3;

    #[test]
    fn test_search_with_agrees_on_both_strategies() {
        let board: Board3 = "X../.O./...".parse().unwrap();
        let pruned = search_with(&board, &SearchConfig::new());
        let unpruned = search_with(&board, &SearchConfig::new().with_pruning(false));

        assert_eq!(pruned.value, unpruned.value);
        assert_eq!(pruned.best_move, unpruned.best_move);
    }
}
