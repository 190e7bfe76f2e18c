//! Deck and DeckItem: a player's submitted list and where it finished.

use crate::models::round::RoundReport;
use serde::{Deserialize, Serialize};

/// One card line of a decklist.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeckItem {
    pub count: u32,
    pub card_name: String,
}

impl DeckItem {
    pub fn new(count: u32, card_name: impl Into<String>) -> Self {
        Self {
            count,
            card_name: card_name.into(),
        }
    }
}

/// A deck as it appears in the consolidated record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Deck {
    pub player: String,
    /// Finishing label, e.g. "1st Place".
    pub result: String,
    /// Locator of the decklist page.
    pub anchor_uri: String,
    pub mainboard: Vec<DeckItem>,
    pub sideboard: Vec<DeckItem>,
    /// The owner's classified match history, when the platform exposed it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rounds: Option<Vec<RoundReport>>,
}

impl Deck {
    /// Number of cards in the main deck.
    pub fn mainboard_count(&self) -> u32 {
        self.mainboard.iter().map(|c| c.count).sum()
    }
}

/// Finishing label for a 1-based position: "1st Place", "2nd Place", "3rd Place",
/// then "<n>th Place".
pub fn placement_label(position: usize) -> String {
    let suffix = match position {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    };
    format!("{position}{suffix} Place")
}
