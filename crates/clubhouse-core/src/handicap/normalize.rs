use crate::consts::STANDARD_PAR;
use crate::error::LeagueResult;
use crate::handicap::differential::score_differential_or_default;
use crate::records::{DifferentialEntry, RoundEntry, ScoreBasedEntry};

/// Reduces either round shape to the differential the index engine works on.
///
/// Score-based rounds use the adjusted gross score when one was recorded and
/// fall back to the raw gross score otherwise. A round without a usable
/// rating is rated at par: the card's own par, else the sum of its hole
/// pars, else [`STANDARD_PAR`].
pub fn normalize(entry: &RoundEntry, default_slope: i32) -> LeagueResult<DifferentialEntry> {
    match entry {
        RoundEntry::DifferentialBased(e) => Ok(DifferentialEntry {
            id: e.id.clone(),
            date: e.date,
            differential: e.differential,
        }),
        RoundEntry::ScoreBased(e) => {
            let score = e.adjusted_gross_score.unwrap_or(e.gross_score);
            let differential = score_differential_or_default(
                score as f64,
                e.rating,
                e.slope,
                default_slope,
                card_par(e) as f64,
            )?;
            Ok(DifferentialEntry {
                id: e.id.clone(),
                date: e.date,
                differential,
            })
        }
    }
}

fn card_par(e: &ScoreBasedEntry) -> i32 {
    e.par
        .or_else(|| {
            (!e.holes.is_empty()).then(|| e.holes.iter().map(|h| h.par as i32).sum())
        })
        .unwrap_or(STANDARD_PAR)
}

/// Normalizes a whole history, keeping input order.
pub fn normalize_all(
    entries: &[RoundEntry],
    default_slope: i32,
) -> LeagueResult<Vec<DifferentialEntry>> {
    entries.iter().map(|e| normalize(e, default_slope)).collect()
}
