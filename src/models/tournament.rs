//! TournamentInfo and the consolidated TournamentRecord.

use crate::models::deck::Deck;
use crate::models::player::PlayerStanding;
use crate::models::round::Round;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier of a tournament on the hosting platform.
pub type TournamentId = u64;

/// Identity of a tournament, as listed by the hosting platform.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TournamentInfo {
    #[serde(rename = "ID")]
    pub id: TournamentId,
    pub name: String,
    #[serde(default)]
    pub organizer: String,
    /// Start time, always UTC.
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub formats: Vec<String>,
    /// Locator of the tournament page.
    #[serde(default)]
    pub uri: String,
}

impl TournamentInfo {
    pub fn new(id: TournamentId, name: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self {
            id,
            name: name.into(),
            organizer: String::new(),
            date,
            formats: Vec::new(),
            uri: String::new(),
        }
    }
}

/// The canonical, de-duplicated result of one consolidation pass.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TournamentRecord {
    pub tournament: TournamentInfo,
    /// Decks in finishing order.
    pub decks: Vec<Deck>,
    /// Swiss standings in source order.
    pub standings: Vec<PlayerStanding>,
    /// `None` when no player reported any round; `Some(vec![])` when every
    /// reported round was excluded.
    pub rounds: Option<Vec<Round>>,
}

impl TournamentRecord {
    /// A record for a tournament that produced no players.
    pub fn empty(tournament: TournamentInfo) -> Self {
        Self {
            tournament,
            decks: Vec::new(),
            standings: Vec::new(),
            rounds: None,
        }
    }

    /// True when the platform supplied no players at all.
    pub fn is_empty(&self) -> bool {
        self.decks.is_empty() && self.standings.is_empty() && self.rounds.is_none()
    }

    /// Round by name.
    pub fn round(&self, name: &str) -> Option<&Round> {
        self.rounds.as_ref()?.iter().find(|r| r.round_name == name)
    }

    /// Deck owned by `player`.
    pub fn deck_of(&self, player: &str) -> Option<&Deck> {
        self.decks.iter().find(|d| d.player == player)
    }
}
