//! Errors raised while consolidating a tournament.

use thiserror::Error;

/// A result sentence that matches none of the known report formats.
///
/// Never defaulted away: a dropped match would silently corrupt bracket detection,
/// so this always reaches the caller.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("cannot parse round result {text:?} for player {subject:?} and opponent {opponent:?}")]
pub struct ClassificationError {
    pub text: String,
    pub subject: String,
    pub opponent: String,
}

/// Errors that can occur while assembling a tournament record.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ConsolidationError {
    /// A round result could not be classified.
    #[error(transparent)]
    Classification(#[from] ClassificationError),
    /// A player row lacks a field the standings need.
    #[error("player {player:?} is missing required field `{field}`")]
    MissingField { player: String, field: &'static str },
    /// A decklist line is not "<count> <card name>".
    #[error("malformed decklist line {line:?}")]
    MalformedDecklist { line: String },
}
