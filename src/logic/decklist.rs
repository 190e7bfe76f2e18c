//! Plain-text decklist parsing ("Deck" / "Companion" / "Sideboard" sections).

use crate::logic::names::normalize_spaces;
use crate::models::{ConsolidationError, DeckItem};
use regex::Regex;
use std::sync::LazyLock;

static CARD_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\s+(.+)$").expect("card line pattern is valid"));

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Section {
    Main,
    Companion,
    Side,
}

/// Main and side boards of a decklist, in listed order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Boards {
    pub mainboard: Vec<DeckItem>,
    pub sideboard: Vec<DeckItem>,
}

/// Parse a decklist text export. The companion section is skipped: the platform
/// lists the companion there and again in the sideboard.
pub fn parse_decklist(text: &str) -> Result<Boards, ConsolidationError> {
    let mut boards = Boards::default();
    let mut section = Section::Main;

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        match line {
            "Deck" | "MainDeck" => section = Section::Main,
            "Companion" => section = Section::Companion,
            "Sideboard" => section = Section::Side,
            _ => {
                if section == Section::Companion {
                    continue;
                }
                let item = parse_card_line(line)?;
                match section {
                    Section::Side => boards.sideboard.push(item),
                    _ => boards.mainboard.push(item),
                }
            }
        }
    }
    Ok(boards)
}

fn parse_card_line(line: &str) -> Result<DeckItem, ConsolidationError> {
    let malformed = || ConsolidationError::MalformedDecklist {
        line: line.to_string(),
    };
    let caps = CARD_LINE.captures(line).ok_or_else(malformed)?;
    let count = caps[1].parse::<u32>().map_err(|_| malformed())?;
    Ok(DeckItem::new(count, normalize_spaces(&caps[2])))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_main_and_side() {
        let boards = parse_decklist("Deck\r\n4 Lightning Bolt\r\n20 Mountain\r\nSideboard\r\n2 Smash to Smithereens\r\n").unwrap();
        assert_eq!(
            boards.mainboard,
            vec![DeckItem::new(4, "Lightning Bolt"), DeckItem::new(20, "Mountain")]
        );
        assert_eq!(boards.sideboard, vec![DeckItem::new(2, "Smash to Smithereens")]);
    }

    #[test]
    fn skips_companion_section() {
        let text = "Companion\n1 Lurrus of the Dream-Den\nDeck\n4 Ragavan, Nimble Pilferer\nSideboard\n1 Lurrus of the Dream-Den\n";
        let boards = parse_decklist(text).unwrap();
        assert_eq!(boards.mainboard, vec![DeckItem::new(4, "Ragavan, Nimble Pilferer")]);
        assert_eq!(boards.sideboard, vec![DeckItem::new(1, "Lurrus of the Dream-Den")]);
    }

    #[test]
    fn lines_without_header_are_main() {
        let boards = parse_decklist("\n60 Island\n\n").unwrap();
        assert_eq!(boards.mainboard, vec![DeckItem::new(60, "Island")]);
        assert!(boards.sideboard.is_empty());
    }

    #[test]
    fn rejects_line_without_count() {
        assert_eq!(
            parse_decklist("Deck\nLightning Bolt"),
            Err(ConsolidationError::MalformedDecklist {
                line: "Lightning Bolt".to_string()
            })
        );
    }
}
