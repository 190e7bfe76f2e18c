//! Finishing order: playoff results override Swiss standings for the top finishers.

use crate::models::{placement_label, Deck, PlayerStanding, Round, NO_OPPONENT};

/// Player names in final finishing order.
///
/// Walks the bracket from its last round backward. The last round contributes its
/// winners then its losers (Finals: champion, runner-up); every earlier round
/// contributes its losers in match order (Semifinals: 3rd/4th, Quarterfinals:
/// 5th-8th). Everyone not placed by the bracket follows in Swiss order.
pub fn finishing_order(standings: &[PlayerStanding], bracket: &[&Round]) -> Vec<String> {
    let mut placed: Vec<String> = Vec::with_capacity(standings.len());
    let mut place = |name: &str| {
        if name != NO_OPPONENT && !placed.iter().any(|p| p == name) {
            placed.push(name.to_string());
        }
    };

    for (depth, round) in bracket.iter().rev().enumerate() {
        if depth == 0 {
            for m in &round.matches {
                place(m.winner_and_loser().0);
            }
        }
        for m in &round.matches {
            place(m.winner_and_loser().1);
        }
    }
    for standing in standings {
        place(&standing.player);
    }
    placed
}

/// Reorder decks to the bracket-aware finishing order and relabel them
/// ("1st Place", "2nd Place", ...). Decks whose owner appears in neither the
/// bracket nor the standings keep their relative order at the end.
pub fn reorder_decks(decks: Vec<Deck>, standings: &[PlayerStanding], bracket: &[&Round]) -> Vec<Deck> {
    let order = finishing_order(standings, bracket);
    let mut remaining: Vec<Option<Deck>> = decks.into_iter().map(Some).collect();
    let mut reordered = Vec::with_capacity(remaining.len());

    for name in &order {
        let slot = remaining
            .iter_mut()
            .find(|d| d.as_ref().is_some_and(|d| d.player == *name));
        if let Some(slot) = slot {
            reordered.extend(slot.take());
        }
    }
    reordered.extend(remaining.into_iter().flatten());

    for (i, deck) in reordered.iter_mut().enumerate() {
        deck.result = placement_label(i + 1);
    }
    reordered
}
