//! Round consolidation: merge every player's classified match history into one
//! de-duplicated match set per named round.

use crate::config::ConsolidationConfig;
use crate::models::{Match, Round, RoundReport};
use log::debug;
use std::collections::{HashMap, HashSet};

/// Dedup key: round name plus the canonical (post-classification) player order.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
struct MatchKey {
    round_name: String,
    player1: String,
    player2: String,
}

impl MatchKey {
    fn of(round_name: &str, item: &Match) -> Self {
        Self {
            round_name: round_name.to_string(),
            player1: item.player1.clone(),
            player2: item.player2.clone(),
        }
    }
}

/// Ordered accumulator of rounds. Rounds keep first-seen order, matches keep
/// insertion order, and a key already present is never overwritten.
#[derive(Debug, Default)]
pub struct RoundTable {
    rounds: Vec<Round>,
    index: HashMap<String, usize>,
    seen: HashSet<MatchKey>,
}

impl RoundTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one report. Returns false if the same match was already recorded for
    /// this round (reported from the other player's page).
    pub fn insert(&mut self, round_name: &str, item: &Match) -> bool {
        if !self.seen.insert(MatchKey::of(round_name, item)) {
            return false;
        }
        let idx = match self.index.get(round_name) {
            Some(&idx) => idx,
            None => {
                self.rounds.push(Round::new(round_name));
                self.index.insert(round_name.to_string(), self.rounds.len() - 1);
                self.rounds.len() - 1
            }
        };
        self.rounds[idx].matches.push(item.clone());
        true
    }

    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    pub fn into_rounds(self) -> Vec<Round> {
        self.rounds
    }
}

/// Merge per-player round reports into rounds.
///
/// `reports` yields each player's reports in turn; reports for a round the config
/// excludes are dropped before keying. Rounds with no surviving matches
/// do not appear.
pub fn consolidate<'a, I>(reports: I, config: &ConsolidationConfig) -> Vec<Round>
where
    I: IntoIterator<Item = &'a RoundReport>,
{
    let mut table = RoundTable::new();
    let mut duplicates = 0usize;
    for report in reports {
        if config.is_excluded(&report.round_name) {
            continue;
        }
        if !table.insert(&report.round_name, &report.item) {
            duplicates += 1;
        }
    }
    debug!("Consolidated {} round(s), discarded {} duplicate report(s)", table.len(), duplicates);
    table.into_rounds()
}
