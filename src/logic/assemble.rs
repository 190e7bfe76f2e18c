//! Tournament assembly: run classification, consolidation, bracket detection and
//! reordering over the whole field and build the final record.

use crate::config::ConsolidationConfig;
use crate::logic::bracket::detect_bracket;
use crate::logic::classify::classify;
use crate::logic::consolidate::consolidate;
use crate::logic::decklist::parse_decklist;
use crate::logic::names::resolve_player_name;
use crate::logic::reorder::reorder_decks;
use crate::models::{
    placement_label, ClassificationError, ConsolidationError, Deck, FetchedTournament, PlayerEntry,
    RoundReport, TournamentInput, TournamentRecord,
};
use log::{debug, info};

/// Reported to the progress callback before each player is processed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AssemblyProgress<'a> {
    pub player: &'a str,
    /// 1-based.
    pub position: usize,
    pub total: usize,
}

/// Validate fetched data and assemble the record, without progress reporting.
pub fn consolidate_tournament(
    fetched: FetchedTournament,
    config: &ConsolidationConfig,
) -> Result<TournamentRecord, ConsolidationError> {
    assemble_tournament(fetched.validate()?, config, None)
}

/// Build the consolidated record for one tournament.
///
/// 1. Standings are kept in source order.
/// 2. Each player's first decklist becomes a deck labelled by Swiss rank.
/// 3. Every match-history row is classified; a classification failure aborts the
///    whole tournament, since a missing bracket match would misrank the top.
/// 4. Reports are consolidated per round and the bracket, if any, reorders decks.
///
/// A tournament without players is an empty record, not an error.
pub fn assemble_tournament(
    input: TournamentInput,
    config: &ConsolidationConfig,
    mut progress: Option<&mut dyn FnMut(&AssemblyProgress<'_>)>,
) -> Result<TournamentRecord, ConsolidationError> {
    let Some(mut players) = input.players.filter(|p| !p.is_empty()) else {
        info!("Tournament {} has no players", input.info.id);
        return Ok(TournamentRecord::empty(input.info));
    };
    if let Some(max) = config.max_players {
        players.truncate(max);
    }

    let total = players.len();
    let mut standings = Vec::with_capacity(total);
    let mut decks = Vec::with_capacity(total);
    let mut reports: Vec<RoundReport> = Vec::new();
    let mut has_round_data = false;

    for (i, player) in players.iter().enumerate() {
        if let Some(cb) = progress.as_deref_mut() {
            cb(&AssemblyProgress {
                player: &player.name,
                position: i + 1,
                total,
            });
        }
        standings.push(player.standing.clone());

        let history = if config.skip_round_data {
            Vec::new()
        } else {
            has_round_data |= !player.rounds.is_empty();
            classify_history(player, &players)?
        };
        if let Some(deck) = build_deck(player, &history)? {
            decks.push(deck);
        }
        reports.extend(history);
    }

    let rounds = consolidate(&reports, config);
    let bracket = detect_bracket(&rounds);
    if !bracket.is_empty() {
        debug!(
            "Bracket detected: {}",
            bracket.iter().map(|r| r.round_name.as_str()).collect::<Vec<_>>().join(", ")
        );
        decks = reorder_decks(decks, &standings, &bracket);
    }

    info!(
        "Consolidated tournament {}: {} standings, {} decks, {} rounds",
        input.info.id,
        standings.len(),
        decks.len(),
        rounds.len()
    );

    Ok(TournamentRecord {
        tournament: input.info,
        decks,
        standings,
        rounds: has_round_data.then_some(rounds),
    })
}

/// Classify a player's match history, resolving each opponent against the field.
pub fn classify_history(
    player: &PlayerEntry,
    players: &[PlayerEntry],
) -> Result<Vec<RoundReport>, ClassificationError> {
    player
        .rounds
        .iter()
        .map(|row| {
            let opponent = resolve_player_name(
                row.opponent_name.as_deref(),
                row.opponent_account.as_deref(),
                players,
            );
            let item = classify(&row.result, &player.name, &opponent)?;
            Ok(RoundReport::new(&row.round_name, item))
        })
        .collect()
}

/// Deck for the player's first decklist; `None` if they submitted none.
fn build_deck(player: &PlayerEntry, history: &[RoundReport]) -> Result<Option<Deck>, ConsolidationError> {
    let Some(list) = player.decklists.first() else {
        return Ok(None);
    };
    let (mainboard, sideboard) = match list.text.as_deref() {
        Some(text) if list.mainboard.is_empty() && list.sideboard.is_empty() => {
            let boards = parse_decklist(text)?;
            (boards.mainboard, boards.sideboard)
        }
        _ => (list.mainboard.clone(), list.sideboard.clone()),
    };
    Ok(Some(Deck {
        player: player.name.clone(),
        result: placement_label(player.standing.rank as usize),
        anchor_uri: list.uri.clone(),
        mainboard,
        sideboard,
        rounds: (!history.is_empty()).then(|| history.to_vec()),
    }))
}
