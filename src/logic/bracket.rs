//! Bracket detection: the single-elimination tail of a tournament, recognized by
//! round name and exact match count.

use crate::models::Round;

/// Bracket rounds in play order, with the number of matches each must hold.
pub const BRACKET_SHAPE: [(&str, usize); 3] = [("Quarterfinals", 4), ("Semifinals", 2), ("Finals", 1)];

/// Rounds that form the playoff bracket, in Quarterfinals → Semifinals → Finals
/// order. A correctly named round with the wrong number of matches is Swiss data
/// and is left out. Empty when nothing qualifies.
pub fn detect_bracket(rounds: &[Round]) -> Vec<&Round> {
    BRACKET_SHAPE
        .iter()
        .flat_map(|&(name, count)| {
            rounds
                .iter()
                .filter(move |r| r.round_name == name && r.matches.len() == count)
        })
        .collect()
}
