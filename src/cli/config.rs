//! Shared configuration types for CLI commands

use clap::Args;
use serde::{Deserialize, Serialize};

/// Common configuration shared across commands
#[derive(Args, Debug, Clone, Serialize, Deserialize)]
pub struct CommonConfig {
    /// Verbose output (debug-level logging unless RUST_LOG is set)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Hide progress bars
    #[arg(long = "no-progress", global = true, action = clap::ArgAction::SetFalse)]
    pub progress: bool,
}

impl CommonConfig {
    /// Log filter used when RUST_LOG is not set
    pub fn default_log_filter(&self) -> &'static str {
        if self.verbose { "noughts=debug" } else { "warn" }
    }
}

impl Default for CommonConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            progress: true,
        }
    }
}
