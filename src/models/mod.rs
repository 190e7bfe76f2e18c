//! Data structures for consolidation: standings, decks, matches, rounds, tournament record.

mod deck;
mod error;
mod fetched;
mod player;
mod round;
mod tournament;

pub use deck::{placement_label, Deck, DeckItem};
pub use error::{ClassificationError, ConsolidationError};
pub use fetched::{
    DecklistEntry, FetchedDecklist, FetchedPlayer, FetchedRound, FetchedTournament, PlayerEntry,
    RoundRow, TournamentInput,
};
pub use player::PlayerStanding;
pub use round::{Match, Round, RoundReport, Side, NO_OPPONENT};
pub use tournament::{TournamentId, TournamentInfo, TournamentRecord};
