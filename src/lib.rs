//! Tournament result consolidation: library with models and consolidation logic.
//!
//! Per-player match histories scraped from an event platform go in; one canonical
//! record with standings, decks, and de-duplicated rounds comes out.

pub mod config;
pub mod export;
pub mod logic;
pub mod models;

pub use config::ConsolidationConfig;
pub use export::{standings_csv, ExportError};
pub use logic::{
    assemble_tournament, classify, classify_history, classify_outcome, consolidate, consolidate_tournament,
    detect_bracket, finishing_order, formats_from_headline, normalize_spaces, parse_decklist, reorder_decks,
    resolve_player_name, AssemblyProgress, Boards, MatchOutcome, ResultReport, RoundTable, BRACKET_SHAPE,
};
pub use models::{
    placement_label, ClassificationError, ConsolidationError, Deck, DeckItem, DecklistEntry, FetchedDecklist,
    FetchedPlayer, FetchedRound, FetchedTournament, Match, PlayerEntry, PlayerStanding, Round, RoundReport,
    RoundRow, Side, TournamentId, TournamentInfo, TournamentInput, TournamentRecord, NO_OPPONENT,
};
