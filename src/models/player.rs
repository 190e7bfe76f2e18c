//! PlayerStanding: one row of the Swiss standings table.

use serde::{Deserialize, Serialize};

/// Final Swiss standing of a player, as published by the event platform.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PlayerStanding {
    /// 1-based; strictly increasing with points, ties broken by source order.
    pub rank: u32,
    pub player: String,
    pub points: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    /// Opponent match-win percentage.
    #[serde(rename = "OMWP")]
    pub omwp: f64,
    /// Game-win percentage.
    #[serde(rename = "GWP")]
    pub gwp: f64,
    /// Opponent game-win percentage.
    #[serde(rename = "OGWP")]
    pub ogwp: f64,
}

impl PlayerStanding {
    /// Create a standing with the given rank and name. Record and percentages start at zero.
    pub fn new(rank: u32, player: impl Into<String>) -> Self {
        Self {
            rank,
            player: player.into(),
            ..Self::default()
        }
    }

    /// Match record as "W-L-D".
    pub fn record(&self) -> String {
        format!("{}-{}-{}", self.wins, self.losses, self.draws)
    }
}
