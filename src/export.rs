//! Standings export (CSV).

use crate::models::PlayerStanding;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("exported standings are not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}

#[derive(Serialize)]
struct StandingRow<'a> {
    rank: u32,
    player: &'a str,
    points: u32,
    wins: u32,
    losses: u32,
    draws: u32,
    omwp: f64,
    gwp: f64,
    ogwp: f64,
}

impl<'a> From<&'a PlayerStanding> for StandingRow<'a> {
    fn from(s: &'a PlayerStanding) -> Self {
        Self {
            rank: s.rank,
            player: &s.player,
            points: s.points,
            wins: s.wins,
            losses: s.losses,
            draws: s.draws,
            omwp: s.omwp,
            gwp: s.gwp,
            ogwp: s.ogwp,
        }
    }
}

/// Render standings as CSV with a header row, in the given order.
pub fn standings_csv(standings: &[PlayerStanding]) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    if standings.is_empty() {
        writer.write_record(["rank", "player", "points", "wins", "losses", "draws", "omwp", "gwp", "ogwp"])?;
    }
    for standing in standings {
        writer.serialize(StandingRow::from(standing))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}
