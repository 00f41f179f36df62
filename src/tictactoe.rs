//! Tic-Tac-Toe game implementation on an N×N grid

pub mod board;
pub mod game_tree;
pub mod lines;
pub mod rules;

pub use board::{Board, Board3, Cell, Move, Player};
pub use game_tree::reachable_states;
pub use lines::Line;
pub use rules::GameOutcome;
