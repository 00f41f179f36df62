//! Output formatting and progress bars for CLI

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};

use crate::tictactoe::{Board, GameOutcome};

/// Create a progress bar over `total` positions, hidden when `enabled` is false
pub fn create_progress(total: u64, enabled: bool) -> Result<ProgressBar> {
    if !enabled {
        return Ok(ProgressBar::hidden());
    }

    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} positions ({msg})")?
            .progress_chars("=>-"),
    );
    Ok(pb)
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(40));
    println!("{title}");
    println!("{}", "=".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:16} {}", format!("{}:", key), value);
}

/// Print a board indented under the current section
pub fn print_board<const N: usize>(board: &Board<N>) {
    for line in board.to_string().lines() {
        println!("    {line}");
    }
}

/// Describe a game value from X's point of view
pub fn describe_value(value: i32) -> &'static str {
    match value {
        v if v > 0 => "X wins",
        v if v < 0 => "O wins",
        _ => "draw",
    }
}

/// Describe a finished game
pub fn describe_outcome(outcome: GameOutcome) -> String {
    match outcome {
        GameOutcome::Win(player) => format!("{player} wins"),
        GameOutcome::Draw => "draw".to_string(),
    }
}

/// Format a number with thousands separators
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::Player;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(549_946), "549,946");
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(describe_value(1), "X wins");
        assert_eq!(describe_value(-1), "O wins");
        assert_eq!(describe_value(0), "draw");
        assert_eq!(describe_outcome(GameOutcome::Win(Player::O)), "O wins");
        assert_eq!(describe_outcome(GameOutcome::Draw), "draw");
    }
}
