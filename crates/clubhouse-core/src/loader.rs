use crate::error::{LeagueError, LeagueResult};
use crate::records::{DifferentialEntry, FlightRound, LeagueFile};
use chrono::NaiveDate;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info, warn};

pub fn load_league_file<P: AsRef<Path>>(path: P) -> LeagueResult<LeagueFile> {
    let file = File::open(path.as_ref())?;
    let league: LeagueFile = serde_json::from_reader(BufReader::new(file))?;
    info!(
        "Loaded league '{}' with {} players from {:?}",
        league.name,
        league.players.len(),
        path.as_ref()
    );
    Ok(league)
}

pub fn load_flight_file<P: AsRef<Path>>(path: P) -> LeagueResult<FlightRound> {
    let file = File::open(path.as_ref())?;
    let round: FlightRound = serde_json::from_reader(BufReader::new(file))?;
    debug!(
        "Loaded round '{}' ({} entries)",
        round.round_id,
        round.entries.len()
    );
    Ok(round)
}

pub fn load_legacy_differentials<P: AsRef<Path>>(path: P) -> LeagueResult<Vec<DifferentialEntry>> {
    let file = File::open(path)?;
    read_legacy_differentials(file)
}

/// Reads `id,date,differential` rows (header required, date as YYYY-MM-DD).
/// Rows that do not parse are skipped.
pub fn read_legacy_differentials<R: Read>(reader: R) -> LeagueResult<Vec<DifferentialEntry>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut entries = Vec::new();
    for (line, result) in rdr.records().enumerate() {
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                warn!("Skipping unreadable row {}: {}", line + 2, e);
                continue;
            }
        };
        if record.len() < 3 {
            warn!("Skipping short row {}", line + 2);
            continue;
        }

        let date = NaiveDate::parse_from_str(&record[1], "%Y-%m-%d");
        let differential = record[2].parse::<f64>();
        match (date, differential) {
            (Ok(date), Ok(differential)) if differential.is_finite() => {
                entries.push(DifferentialEntry {
                    id: record[0].to_string(),
                    date,
                    differential,
                });
            }
            _ => warn!("Skipping malformed row {}: {:?}", line + 2, record),
        }
    }

    if entries.is_empty() {
        debug!("Legacy differential file contained no usable rows");
    }
    Ok(entries)
}

pub fn write_json<P: AsRef<Path>, T: serde::Serialize>(path: P, value: &T) -> LeagueResult<()> {
    let file = File::create(path.as_ref())?;
    serde_json::to_writer_pretty(file, value).map_err(LeagueError::from)
}
