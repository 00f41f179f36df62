//! CLI infrastructure for the noughts solver
//!
//! A thin driver over the library: it parses boards from the command line,
//! runs the search and prints the results. No interactive play.

pub mod commands;
pub mod config;
pub mod output;
