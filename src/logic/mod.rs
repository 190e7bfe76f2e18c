//! Consolidation logic: classification, round merging, bracket detection, reordering, assembly.

mod assemble;
mod bracket;
mod classify;
mod consolidate;
mod decklist;
mod intake;
mod names;
mod reorder;

pub use assemble::{assemble_tournament, classify_history, consolidate_tournament, AssemblyProgress};
pub use bracket::{detect_bracket, BRACKET_SHAPE};
pub use classify::{classify, classify_outcome, MatchOutcome, ResultReport};
pub use consolidate::{consolidate, RoundTable};
pub use decklist::{parse_decklist, Boards};
pub use names::{formats_from_headline, normalize_spaces, resolve_player_name};
pub use reorder::{finishing_order, reorder_decks};
