//! Exhaustive adversarial search for N×N tic-tac-toe
//!
//! This crate provides:
//! - An immutable board representation generic over the grid size
//! - The rules: turn order, legal moves, win and terminal detection, utility
//! - Full-depth minimax search with alpha-beta pruning
//! - An unpruned reference solver and a small command-line driver
//!
//! # Example
//!
//! ```
//! use noughts::{Board3, Move, best_move};
//!
//! let board: Board3 = "XX./OO./...".parse().unwrap();
//! assert_eq!(best_move(&board), Some(Move::new(0, 2)));
//! ```

pub mod cli;
pub mod error;
pub mod search;
pub mod tictactoe;

pub use error::{Error, IllegalMoveReason, Result};
pub use search::{MinimaxSolver, SearchConfig, SearchResult, best_move, search, search_with};
pub use tictactoe::{Board, Board3, Cell, GameOutcome, Line, Move, Player};
