//! Match (round item), Round, and the per-player RoundReport.

use serde::{Deserialize, Serialize};

/// Player name used when a match has no (known) opponent: byes and unresolved links.
pub const NO_OPPONENT: &str = "-";

/// A single consolidated match: an ordered pair of players and a "W-L-D" result
/// from `player1`'s point of view.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Match {
    pub player1: String,
    pub player2: String,
    pub result: String,
}

/// Which side of a match came out ahead.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Side {
    One,
    Two,
}

impl Match {
    pub fn new(player1: impl Into<String>, player2: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            player1: player1.into(),
            player2: player2.into(),
            result: result.into(),
        }
    }

    /// Game wins and losses from `player1`'s point of view. Missing or non-numeric
    /// components count as zero.
    pub fn score(&self) -> (u32, u32) {
        let mut parts = self.result.split('-').map(|p| p.trim().parse::<u32>().unwrap_or(0));
        let wins = parts.next().unwrap_or(0);
        let losses = parts.next().unwrap_or(0);
        (wins, losses)
    }

    /// The side with more game wins. An even score goes to `player1`, which is the
    /// reporting or canonically-first player.
    pub fn winning_side(&self) -> Side {
        let (wins, losses) = self.score();
        if losses > wins {
            Side::Two
        } else {
            Side::One
        }
    }

    /// (winner, loser) names.
    pub fn winner_and_loser(&self) -> (&str, &str) {
        match self.winning_side() {
            Side::One => (&self.player1, &self.player2),
            Side::Two => (&self.player2, &self.player1),
        }
    }
}

/// A named round and its de-duplicated matches, in first-reported order.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Round {
    pub round_name: String,
    pub matches: Vec<Match>,
}

impl Round {
    pub fn new(round_name: impl Into<String>) -> Self {
        Self {
            round_name: round_name.into(),
            matches: Vec::new(),
        }
    }
}

/// One classified row of a player's match history: the round it belongs to and
/// the match it describes.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RoundReport {
    pub round_name: String,
    #[serde(rename = "Match")]
    pub item: Match,
}

impl RoundReport {
    pub fn new(round_name: impl Into<String>, item: Match) -> Self {
        Self {
            round_name: round_name.into(),
            item,
        }
    }
}
