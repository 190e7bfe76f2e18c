//! Player-name helpers: whitespace normalization, opponent resolution, headline formats.

use crate::models::{PlayerEntry, NO_OPPONENT};

/// Collapse every whitespace run (newlines, tabs, non-breaking spaces) to one space and trim.
pub fn normalize_spaces(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Display name for an opponent link.
///
/// An opponent without a profile link is the "-" sentinel, whatever its text says.
/// A linked account that belongs to a known player resolves to that player's
/// display name; any other linked account falls back to the normalized link text.
pub fn resolve_player_name(raw: Option<&str>, account: Option<&str>, players: &[PlayerEntry]) -> String {
    let Some(account) = account.filter(|a| !a.trim().is_empty()) else {
        return NO_OPPONENT.to_string();
    };
    if let Some(p) = players.iter().find(|p| p.account.as_deref() == Some(account)) {
        return p.name.clone();
    }
    raw.map(normalize_spaces)
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| NO_OPPONENT.to_string())
}

/// Formats from a registration headline like "Org | 1 Oct 2023 | Format: Pioneer, Modern".
pub fn formats_from_headline(headline: &str) -> Vec<String> {
    let Some(field) = headline.split('|').nth(2) else {
        return Vec::new();
    };
    field
        .replace("Format:", "")
        .split(',')
        .map(|f| f.trim().to_string())
        .filter(|f| !f.is_empty())
        .collect()
}
