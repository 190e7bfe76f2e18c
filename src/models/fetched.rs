//! Fetch-boundary data: what the page-fetch collaborator hands over, before validation.
//!
//! Every field the platform may leave null is an `Option` here. Nothing in this
//! module reaches the consolidation engine directly; see `logic::intake`.

use crate::models::deck::DeckItem;
use crate::models::player::PlayerStanding;
use crate::models::tournament::TournamentInfo;
use serde::{Deserialize, Serialize};

/// A tournament as scraped: identity plus the raw player rows.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FetchedTournament {
    pub info: TournamentInfo,
    /// Registration headline ("<organizer> | <date> | Format: ..."); used for
    /// formats when `info.formats` is empty.
    #[serde(default)]
    pub headline: Option<String>,
    /// `None` when the platform exposed no completed phase to read players from.
    #[serde(default)]
    pub players: Option<Vec<FetchedPlayer>>,
}

/// One standings row with its decklists and match history.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FetchedPlayer {
    #[serde(default)]
    pub display_name: Option<String>,
    /// Platform account identifier; opponents link to it.
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub rank: Option<u32>,
    #[serde(default)]
    pub points: Option<u32>,
    #[serde(default)]
    pub omwp: Option<f64>,
    #[serde(default)]
    pub gwp: Option<f64>,
    #[serde(default)]
    pub ogwp: Option<f64>,
    #[serde(default)]
    pub wins: Option<u32>,
    #[serde(default)]
    pub losses: Option<u32>,
    #[serde(default)]
    pub draws: Option<u32>,
    #[serde(default)]
    pub decklists: Vec<FetchedDecklist>,
    #[serde(default)]
    pub rounds: Vec<FetchedRound>,
}

/// A decklist reference, optionally with its contents already downloaded.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FetchedDecklist {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub uri: Option<String>,
    /// Plain-text export of the list ("Deck" / "Sideboard" sections).
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub mainboard: Option<Vec<DeckItem>>,
    #[serde(default)]
    pub sideboard: Option<Vec<DeckItem>>,
}

/// One row of a player's match history table.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FetchedRound {
    #[serde(default)]
    pub round: Option<String>,
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default)]
    pub opponent_name: Option<String>,
    #[serde(default)]
    pub opponent_account: Option<String>,
}

/// Validated tournament, ready for the engine.
#[derive(Clone, Debug, PartialEq)]
pub struct TournamentInput {
    pub info: TournamentInfo,
    /// Players in source (standings) order. `None` means the tournament is empty.
    pub players: Option<Vec<PlayerEntry>>,
}

/// Validated player row.
#[derive(Clone, Debug, PartialEq)]
pub struct PlayerEntry {
    pub name: String,
    pub account: Option<String>,
    pub standing: PlayerStanding,
    pub decklists: Vec<DecklistEntry>,
    pub rounds: Vec<RoundRow>,
}

/// Validated decklist: it has an identifier.
#[derive(Clone, Debug, PartialEq)]
pub struct DecklistEntry {
    pub id: String,
    pub format: Option<String>,
    pub uri: String,
    pub text: Option<String>,
    pub mainboard: Vec<DeckItem>,
    pub sideboard: Vec<DeckItem>,
}

/// Validated match-history row: it has a round name and result text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoundRow {
    pub round_name: String,
    pub result: String,
    pub opponent_name: Option<String>,
    pub opponent_account: Option<String>,
}
