//! Per-tournament consolidation settings.

use serde::{Deserialize, Serialize};

/// Settings for one consolidation pass.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsolidationConfig {
    /// Round names dropped before deduplication (tournament-specific noise rounds,
    /// e.g. a side event sharing the tournament page).
    pub excluded_rounds: Vec<String>,
    /// Ignore match histories entirely; the record then has no rounds.
    pub skip_round_data: bool,
    /// Only consolidate the first N players in standings order.
    pub max_players: Option<usize>,
}

impl ConsolidationConfig {
    /// Exclude one more round name.
    pub fn with_excluded_round(mut self, round_name: impl Into<String>) -> Self {
        self.excluded_rounds.push(round_name.into());
        self
    }

    /// Drop match histories.
    pub fn without_rounds(mut self) -> Self {
        self.skip_round_data = true;
        self
    }

    /// Limit the number of players consolidated.
    pub fn with_max_players(mut self, max_players: usize) -> Self {
        self.max_players = Some(max_players);
        self
    }

    /// True if reports for `round_name` are dropped.
    pub fn is_excluded(&self, round_name: &str) -> bool {
        self.excluded_rounds.iter().any(|r| r == round_name)
    }
}
