//! Configuration for the search engine.

use serde::{Deserialize, Serialize};

/// How [`search_with`](super::search_with) explores the game tree.
///
/// # Examples
///
/// ```
/// use noughts::SearchConfig;
///
/// let config = SearchConfig::new().with_pruning(false);
/// assert!(!config.pruning);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Use alpha-beta pruning. When false the unpruned, memoised minimax
    /// solver is used instead; both return the same value.
    pub pruning: bool,
}

impl SearchConfig {
    /// Create a configuration with pruning enabled.
    pub fn new() -> Self {
        Self { pruning: true }
    }

    /// Enable or disable alpha-beta pruning.
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new()
    }
}
