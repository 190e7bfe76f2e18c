//! Fetch-boundary validation: turn the optional-everywhere platform rows into
//! the typed input the consolidation engine works on.

use crate::logic::names::{formats_from_headline, normalize_spaces};
use crate::models::{
    ConsolidationError, DecklistEntry, FetchedDecklist, FetchedPlayer, FetchedRound, FetchedTournament,
    PlayerEntry, PlayerStanding, RoundRow, TournamentInput,
};
use log::warn;

/// Round-name cell the platform renders for an empty match history.
const NO_RESULTS: &str = "No results found";

impl FetchedTournament {
    /// Validate every player row.
    ///
    /// Rows without a display name are placeholders and are skipped; missing
    /// standing numbers are an error. Formats fall back to the headline.
    pub fn validate(self) -> Result<TournamentInput, ConsolidationError> {
        let mut info = self.info;
        if info.formats.is_empty() {
            if let Some(headline) = self.headline.as_deref() {
                info.formats = formats_from_headline(headline);
            }
        }
        let players = match self.players {
            Some(rows) => Some(
                rows.into_iter()
                    .filter_map(|row| validate_player(row).transpose())
                    .collect::<Result<Vec<_>, _>>()?,
            ),
            None => None,
        };
        Ok(TournamentInput { info, players })
    }
}

/// `Ok(None)` for a placeholder row.
fn validate_player(row: FetchedPlayer) -> Result<Option<PlayerEntry>, ConsolidationError> {
    let Some(raw_name) = row.display_name.as_deref() else {
        warn!("Skipping standings row without a display name (account {:?})", row.username);
        return Ok(None);
    };
    let name = normalize_spaces(raw_name);
    let missing = |field: &'static str| ConsolidationError::MissingField {
        player: name.clone(),
        field,
    };

    let standing = PlayerStanding {
        rank: row.rank.ok_or_else(|| missing("rank"))?,
        player: name.clone(),
        points: row.points.ok_or_else(|| missing("points"))?,
        wins: row.wins.ok_or_else(|| missing("wins"))?,
        losses: row.losses.ok_or_else(|| missing("losses"))?,
        draws: row.draws.ok_or_else(|| missing("draws"))?,
        omwp: row.omwp.unwrap_or(0.0),
        gwp: row.gwp.unwrap_or(0.0),
        ogwp: row.ogwp.unwrap_or(0.0),
    };

    Ok(Some(PlayerEntry {
        account: row.username.filter(|u| !u.trim().is_empty()),
        standing,
        decklists: row.decklists.into_iter().filter_map(validate_decklist).collect(),
        rounds: row.rounds.into_iter().filter_map(validate_round).collect(),
        name,
    }))
}

fn validate_decklist(deck: FetchedDecklist) -> Option<DecklistEntry> {
    let id = deck.id.filter(|id| !id.trim().is_empty())?;
    Some(DecklistEntry {
        uri: deck.uri.unwrap_or_default(),
        format: deck.format.map(|f| normalize_spaces(&f)),
        text: deck.text,
        mainboard: deck.mainboard.unwrap_or_default(),
        sideboard: deck.sideboard.unwrap_or_default(),
        id,
    })
}

fn validate_round(round: FetchedRound) -> Option<RoundRow> {
    let round_name = normalize_spaces(round.round.as_deref()?);
    if round_name.is_empty() || round_name == NO_RESULTS {
        return None;
    }
    let result = normalize_spaces(round.result.as_deref()?);
    Some(RoundRow {
        round_name,
        result,
        opponent_name: round.opponent_name,
        opponent_account: round.opponent_account,
    })
}
