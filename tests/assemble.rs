//! Integration tests for tournament assembly: standings, decks, rounds, bracket reordering.

use chrono::{TimeZone, Utc};
use melee_consolidator::{
    assemble_tournament, consolidate_tournament, AssemblyProgress, ConsolidationConfig, ConsolidationError,
    DeckItem, FetchedDecklist, FetchedPlayer, FetchedRound, FetchedTournament, Match, TournamentInfo,
};

/// (round, winner, loser) by player number.
const MATCHES: [(&str, usize, usize); 11] = [
    ("Round 1", 1, 2),
    ("Round 1", 3, 4),
    ("Round 1", 5, 6),
    ("Round 1", 7, 8),
    ("Quarterfinals", 8, 1),
    ("Quarterfinals", 2, 7),
    ("Quarterfinals", 6, 3),
    ("Quarterfinals", 4, 5),
    ("Semifinals", 4, 8),
    ("Semifinals", 6, 2),
    ("Finals", 6, 4),
];

fn info() -> TournamentInfo {
    let mut info = TournamentInfo::new(72980, "Regional Championship", Utc.with_ymd_and_hms(2023, 10, 1, 13, 0, 0).unwrap());
    info.organizer = "PharaohTorneios".to_string();
    info.formats = vec!["Legacy".to_string()];
    info
}

fn history_of(n: usize) -> Vec<FetchedRound> {
    MATCHES
        .iter()
        .filter(|(_, w, l)| *w == n || *l == n)
        .map(|&(round, w, l)| {
            let other = if w == n { l } else { w };
            FetchedRound {
                round: Some(round.to_string()),
                result: Some(format!("P{w} won 2-1-0")),
                opponent_name: Some(format!("P{other}")),
                opponent_account: Some(format!("p{other}")),
            }
        })
        .collect()
}

fn player(n: usize) -> FetchedPlayer {
    FetchedPlayer {
        display_name: Some(format!("P{n}")),
        username: Some(format!("p{n}")),
        rank: Some(n as u32),
        points: Some(30 - 3 * n as u32),
        omwp: Some(0.5),
        gwp: Some(0.5),
        ogwp: Some(0.5),
        wins: Some(9 - n as u32),
        losses: Some(n as u32),
        draws: Some(0),
        decklists: vec![FetchedDecklist {
            id: Some(format!("39160{n}")),
            format: Some("Legacy".to_string()),
            uri: Some(format!("https://melee.gg/Decklist/View/39160{n}")),
            text: Some("Deck\r\n4 Brainstorm\r\n56 Island\r\nSideboard\r\n3 Force of Negation\r\n".to_string()),
            mainboard: None,
            sideboard: None,
        }],
        rounds: history_of(n),
    }
}

fn fetched(players: Option<Vec<FetchedPlayer>>) -> FetchedTournament {
    FetchedTournament {
        info: info(),
        headline: None,
        players,
    }
}

fn field() -> FetchedTournament {
    fetched(Some((1..=8).map(player).collect()))
}

#[test]
fn bracket_overrides_swiss_order() {
    let record = consolidate_tournament(field(), &ConsolidationConfig::default()).unwrap();

    let order: Vec<_> = record.decks.iter().map(|d| d.player.as_str()).collect();
    assert_eq!(order, vec!["P6", "P4", "P2", "P8", "P1", "P7", "P3", "P5"]);
    let labels: Vec<_> = record.decks.iter().map(|d| d.result.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "1st Place", "2nd Place", "3rd Place", "4th Place", "5th Place", "6th Place", "7th Place", "8th Place"
        ]
    );
}

#[test]
fn standings_stay_in_source_order() {
    let record = consolidate_tournament(field(), &ConsolidationConfig::default()).unwrap();
    let names: Vec<_> = record.standings.iter().map(|s| s.player.as_str()).collect();
    assert_eq!(names, vec!["P1", "P2", "P3", "P4", "P5", "P6", "P7", "P8"]);
    assert_eq!(record.standings[0].record(), "8-1-0");
}

#[test]
fn rounds_are_deduplicated() {
    let record = consolidate_tournament(field(), &ConsolidationConfig::default()).unwrap();
    let rounds = record.rounds.as_ref().unwrap();
    let shape: Vec<_> = rounds.iter().map(|r| (r.round_name.as_str(), r.matches.len())).collect();
    assert_eq!(
        shape,
        vec![("Round 1", 4), ("Quarterfinals", 4), ("Semifinals", 2), ("Finals", 1)]
    );
    assert_eq!(record.round("Finals").unwrap().matches, vec![Match::new("P6", "P4", "2-1-0")]);
}

#[test]
fn decks_carry_parsed_boards_and_history() {
    let record = consolidate_tournament(field(), &ConsolidationConfig::default()).unwrap();
    let deck = record.deck_of("P1").unwrap();
    assert_eq!(deck.mainboard, vec![DeckItem::new(4, "Brainstorm"), DeckItem::new(56, "Island")]);
    assert_eq!(deck.sideboard, vec![DeckItem::new(3, "Force of Negation")]);
    assert_eq!(deck.mainboard_count(), 60);
    assert_eq!(deck.anchor_uri, "https://melee.gg/Decklist/View/391601");
    assert_eq!(deck.rounds.as_ref().map(Vec::len), Some(2));
}

#[test]
fn swiss_only_keeps_rank_labels() {
    let players = (1..=4)
        .map(|n| {
            let mut p = player(n);
            p.rounds.retain(|r| r.round.as_deref() == Some("Round 1"));
            p
        })
        .collect();
    let record = consolidate_tournament(fetched(Some(players)), &ConsolidationConfig::default()).unwrap();
    let labels: Vec<_> = record.decks.iter().map(|d| (d.player.as_str(), d.result.as_str())).collect();
    assert_eq!(
        labels,
        vec![("P1", "1st Place"), ("P2", "2nd Place"), ("P3", "3rd Place"), ("P4", "4th Place")]
    );
}

#[test]
fn player_without_decklist_has_standing_only() {
    let mut players: Vec<_> = (1..=8).map(player).collect();
    players[4].decklists.clear();
    let record = consolidate_tournament(fetched(Some(players)), &ConsolidationConfig::default()).unwrap();
    assert_eq!(record.standings.len(), 8);
    assert_eq!(record.decks.len(), 7);
    assert!(record.deck_of("P5").is_none());
    // The loss to P4 is still known from P4's page.
    assert_eq!(record.round("Quarterfinals").unwrap().matches.len(), 4);
}

#[test]
fn empty_field_is_an_empty_record() {
    let record = consolidate_tournament(fetched(None), &ConsolidationConfig::default()).unwrap();
    assert!(record.is_empty());
    assert!(record.decks.is_empty());
    assert!(record.standings.is_empty());
    assert_eq!(record.rounds, None);

    let record = consolidate_tournament(fetched(Some(Vec::new())), &ConsolidationConfig::default()).unwrap();
    assert!(record.is_empty());
    assert_eq!(record.tournament.id, 72980);
}

#[test]
fn all_rounds_excluded_is_not_missing_data() {
    let config = ["Round 1", "Quarterfinals", "Semifinals", "Finals"]
        .into_iter()
        .fold(ConsolidationConfig::default(), |c, r| c.with_excluded_round(r));
    let record = consolidate_tournament(field(), &config).unwrap();
    assert_eq!(record.rounds, Some(Vec::new()));
    // No bracket, so Swiss order.
    assert_eq!(record.decks[0].player, "P1");
}

#[test]
fn skipping_round_data_leaves_rounds_null() {
    let config = ConsolidationConfig::default().without_rounds();
    let record = consolidate_tournament(field(), &config).unwrap();
    assert_eq!(record.rounds, None);
    assert!(record.decks.iter().all(|d| d.rounds.is_none()));
}

#[test]
fn max_players_limits_the_field() {
    let config = ConsolidationConfig::default().with_max_players(3);
    let record = consolidate_tournament(field(), &config).unwrap();
    assert_eq!(record.standings.len(), 3);
    assert_eq!(record.decks.len(), 3);
}

#[test]
fn unlinked_opponent_is_unknown() {
    let mut amy = player(1);
    amy.rounds = vec![FetchedRound {
        round: Some("Round 1".to_string()),
        result: Some("Not reported".to_string()),
        opponent_name: Some("Zed".to_string()),
        opponent_account: None,
    }];
    let record = consolidate_tournament(fetched(Some(vec![amy])), &ConsolidationConfig::default()).unwrap();
    assert_eq!(record.round("Round 1").unwrap().matches, vec![Match::new("-", "P1", "0-0-0")]);
}

#[test]
fn classification_failure_aborts_assembly() {
    let mut players: Vec<_> = (1..=8).map(player).collect();
    players[2].rounds[0].result = Some("xyz unparseable".to_string());
    let err = consolidate_tournament(fetched(Some(players)), &ConsolidationConfig::default()).unwrap_err();
    match err {
        ConsolidationError::Classification(e) => {
            assert_eq!(e.text, "xyz unparseable");
            assert_eq!(e.subject, "P3");
            assert_eq!(e.opponent, "P4");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn progress_is_reported_per_player() {
    let input = field().validate().unwrap();
    let mut seen = Vec::new();
    let mut record_progress = |p: &AssemblyProgress<'_>| seen.push((p.player.to_string(), p.position, p.total));
    assemble_tournament(input, &ConsolidationConfig::default(), Some(&mut record_progress)).unwrap();
    assert_eq!(seen.len(), 8);
    assert_eq!(seen[0], ("P1".to_string(), 1, 8));
    assert_eq!(seen[7], ("P8".to_string(), 8, 8));
}

#[test]
fn repeated_consolidation_is_byte_identical() {
    let a = serde_json::to_string(&consolidate_tournament(field(), &ConsolidationConfig::default()).unwrap()).unwrap();
    let b = serde_json::to_string(&consolidate_tournament(field(), &ConsolidationConfig::default()).unwrap()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn serializes_in_cache_shape() {
    let record = consolidate_tournament(fetched(None), &ConsolidationConfig::default()).unwrap();
    let json = serde_json::to_value(&record).unwrap();
    assert!(json["Rounds"].is_null());
    assert_eq!(json["Tournament"]["Name"], "Regional Championship");
    assert_eq!(json["Tournament"]["Organizer"], "PharaohTorneios");

    let record = consolidate_tournament(field(), &ConsolidationConfig::default()).unwrap();
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["Rounds"][3]["RoundName"], "Finals");
    assert_eq!(json["Rounds"][3]["Matches"][0]["Player1"], "P6");
    assert_eq!(json["Standings"][0]["OMWP"], 0.5);
    assert_eq!(json["Decks"][0]["Mainboard"][0]["CardName"], "Brainstorm");
}
