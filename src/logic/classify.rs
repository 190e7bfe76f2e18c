//! Match-text classification: one result sentence from a player's match history
//! page, plus the two candidate names, into a canonical Match.
//!
//! Rules are tried in a fixed priority order and the first one that recognizes the
//! sentence decides the outcome. Several predicates overlap on real platform text,
//! so the order in `RULES` is part of the behavior.

use crate::models::{ClassificationError, Match, NO_OPPONENT};

/// Score recorded for byes and wins over an unknown opponent.
const BYE_SCORE: &str = "2-0-0";
/// Score recorded when the subject conceded.
const CONCEDED_SCORE: &str = "0-2-0";
/// Score recorded when both players forfeited.
const MUTUAL_FORFEIT_SCORE: &str = "0-0-1";
/// Score recorded for missing or broken reports.
const UNREPORTED_SCORE: &str = "0-0-0";

/// What a result sentence says happened, before player order is fixed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MatchOutcome {
    /// One side won; `score` is from the winner's point of view.
    Victory { subject_won: bool, score: String },
    Draw { score: String },
    Bye,
    /// "won ..." with no opponent on the page.
    UnknownOpponent,
    /// The subject conceded.
    Forfeit,
    /// Both players forfeited. Recorded as a draw.
    MutualForfeit,
    /// "Not reported" or a platform formatting failure.
    Unreported,
}

impl MatchOutcome {
    /// Build the Match for this outcome. Symmetric outcomes (draws, unreported
    /// placeholders) use the lexicographically sorted pair so both players' pages
    /// produce the same match; mutual forfeits keep the subject first.
    pub fn into_match(self, subject: &str, opponent: &str) -> Match {
        match self {
            MatchOutcome::Victory { subject_won: true, score } => Match::new(subject, opponent, score),
            MatchOutcome::Victory { subject_won: false, score } => Match::new(opponent, subject, score),
            MatchOutcome::Draw { score } => {
                let (first, second) = canonical_pair(subject, opponent);
                Match::new(first, second, score)
            }
            MatchOutcome::Bye => Match::new(subject, NO_OPPONENT, BYE_SCORE),
            MatchOutcome::UnknownOpponent => Match::new(NO_OPPONENT, subject, BYE_SCORE),
            MatchOutcome::Forfeit => Match::new(subject, opponent, CONCEDED_SCORE),
            MatchOutcome::MutualForfeit => Match::new(subject, opponent, MUTUAL_FORFEIT_SCORE),
            MatchOutcome::Unreported => {
                let (first, second) = canonical_pair(subject, opponent);
                Match::new(first, second, UNREPORTED_SCORE)
            }
        }
    }
}

/// A result sentence with the names it is read against.
#[derive(Clone, Copy, Debug)]
pub struct ResultReport<'a> {
    pub text: &'a str,
    pub subject: &'a str,
    pub opponent: &'a str,
}

type Rule = fn(&ResultReport<'_>) -> Option<MatchOutcome>;

const RULES: [Rule; 8] = [
    subject_won,
    opponent_won,
    draw,
    bye,
    unknown_opponent,
    forfeit,
    mutual_forfeit,
    unreported,
];

/// Classify one result sentence into a Match.
///
/// `subject` is the player whose page carried the sentence, `opponent` the name
/// resolved from the opponent link ("-" if there was none).
pub fn classify(text: &str, subject: &str, opponent: &str) -> Result<Match, ClassificationError> {
    let report = ResultReport {
        text,
        subject,
        opponent,
    };
    let outcome = classify_outcome(&report).ok_or_else(|| ClassificationError {
        text: text.to_string(),
        subject: subject.to_string(),
        opponent: opponent.to_string(),
    })?;
    let mut item = outcome.into_match(subject, opponent);
    // Some pages omit the draw component.
    if item.result.split('-').count() == 2 {
        item.result.push_str("-0");
    }
    Ok(item)
}

/// First rule that recognizes the sentence, if any.
pub fn classify_outcome(report: &ResultReport<'_>) -> Option<MatchOutcome> {
    RULES.iter().find_map(|rule| rule(report))
}

fn subject_won(r: &ResultReport<'_>) -> Option<MatchOutcome> {
    starts_with_ignore_case(r.text, &format!("{} won", r.subject)).then(|| MatchOutcome::Victory {
        subject_won: true,
        score: last_token(r.text).to_string(),
    })
}

fn opponent_won(r: &ResultReport<'_>) -> Option<MatchOutcome> {
    starts_with_ignore_case(r.text, &format!("{} won", r.opponent)).then(|| MatchOutcome::Victory {
        subject_won: false,
        score: last_token(r.text).to_string(),
    })
}

fn draw(r: &ResultReport<'_>) -> Option<MatchOutcome> {
    r.text.ends_with("Draw").then(|| MatchOutcome::Draw {
        score: first_token(r.text).to_string(),
    })
}

fn bye(r: &ResultReport<'_>) -> Option<MatchOutcome> {
    (r.text.ends_with(" bye") || r.text.contains("was awarded a bye")).then_some(MatchOutcome::Bye)
}

fn unknown_opponent(r: &ResultReport<'_>) -> Option<MatchOutcome> {
    r.text.starts_with("won ").then_some(MatchOutcome::UnknownOpponent)
}

fn forfeit(r: &ResultReport<'_>) -> Option<MatchOutcome> {
    let conceded = starts_with_ignore_case(r.text, &format!("{} forfeited", r.subject));
    (conceded && !both_forfeited(r)).then_some(MatchOutcome::Forfeit)
}

fn mutual_forfeit(r: &ResultReport<'_>) -> Option<MatchOutcome> {
    both_forfeited(r).then_some(MatchOutcome::MutualForfeit)
}

fn unreported(r: &ResultReport<'_>) -> Option<MatchOutcome> {
    (r.text.starts_with("Not reported") || r.text.ends_with("[FORMAT EXCEPTION]"))
        .then_some(MatchOutcome::Unreported)
}

fn both_forfeited(r: &ResultReport<'_>) -> bool {
    r.text.contains(&format!("{} forfeited", r.subject)) && r.text.contains(&format!("{} forfeited", r.opponent))
}

fn canonical_pair<'a>(a: &'a str, b: &'a str) -> (&'a str, &'a str) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    text.to_lowercase().starts_with(&prefix.to_lowercase())
}

fn first_token(text: &str) -> &str {
    text.split_whitespace().next().unwrap_or("")
}

fn last_token(text: &str) -> &str {
    text.split_whitespace().last().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_pair_sorts_by_bytes() {
        assert_eq!(canonical_pair("Zed", "Amy"), ("Amy", "Zed"));
        assert_eq!(canonical_pair("Amy", "Zed"), ("Amy", "Zed"));
        // Uppercase sorts before lowercase.
        assert_eq!(canonical_pair("amy", "Zed"), ("Zed", "amy"));
    }

    #[test]
    fn tokens_of_empty_text() {
        assert_eq!(first_token(""), "");
        assert_eq!(last_token("   "), "");
    }

    #[test]
    fn prefix_match_ignores_case() {
        assert!(starts_with_ignore_case("ALICE WON 2-0-0", "Alice won"));
        assert!(!starts_with_ignore_case("Alic", "Alice won"));
    }
}
