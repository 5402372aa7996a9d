use crate::consts::{FRONT_NINE_LAST_HOLE, NET_DOUBLE_BOGEY_OVER_PAR};
use crate::course::allocation::allocate_strokes;
use crate::error::{LeagueError, LeagueResult};
use crate::records::{Course, Hole, ScoreRecord, TeeBox};
use chrono::NaiveDate;

/// Highest score that counts on a hole for handicap purposes (net double bogey).
#[inline]
pub fn hole_score_cap(par: u8, strokes_received: i32) -> i32 {
    par as i32 + NET_DOUBLE_BOGEY_OVER_PAR + strokes_received
}

/// Sum of per-hole gross scores, each capped at net double bogey.
/// `strokes[i]` is the score on hole `i + 1`; unplayed holes are skipped.
pub fn adjusted_gross_score(holes: &[Hole], strokes: &[Option<u8>], course_handicap: i32) -> i32 {
    allocate_strokes(course_handicap, holes)
        .iter()
        .filter_map(|a| {
            let gross = stroke_for(strokes, a.hole_number)?;
            Some((gross as i32).min(hole_score_cap(a.par, a.strokes)))
        })
        .sum()
}

fn stroke_for(strokes: &[Option<u8>], hole_number: u8) -> Option<u8> {
    let idx = (hole_number as usize).checked_sub(1)?;
    strokes.get(idx).copied().flatten()
}

/// Finalizes a round into a [`ScoreRecord`]. Every hole of the course must
/// carry a score.
pub fn score_record_from_strokes(
    round_id: &str,
    player_id: &str,
    date: NaiveDate,
    course: &Course,
    tee: &TeeBox,
    strokes: &[Option<u8>],
    course_handicap: i32,
) -> LeagueResult<ScoreRecord> {
    if player_id.trim().is_empty() {
        return Err(LeagueError::MissingPlayerIdentity);
    }

    let mut hole_strokes = Vec::with_capacity(course.holes.len());
    let mut front_nine = 0;
    let mut back_nine = 0;

    let mut holes: Vec<&Hole> = course.holes.iter().collect();
    holes.sort_by_key(|h| h.hole_number);

    for h in holes {
        let gross = stroke_for(strokes, h.hole_number).ok_or_else(|| {
            LeagueError::MalformedScoreRecord(format!(
                "player '{}' has no score on hole {}",
                player_id, h.hole_number
            ))
        })?;
        if h.hole_number <= FRONT_NINE_LAST_HOLE {
            front_nine += gross as i32;
        } else {
            back_nine += gross as i32;
        }
        hole_strokes.push(gross);
    }

    Ok(ScoreRecord {
        round_id: round_id.to_string(),
        player_id: player_id.to_string(),
        date,
        gross_score: front_nine + back_nine,
        adjusted_gross_score: adjusted_gross_score(&course.holes, strokes, course_handicap),
        front_nine,
        back_nine,
        hole_strokes,
        rating: tee.rating.filter(|r| r.is_finite()).unwrap_or(course.par as f64),
        slope: tee.slope,
        par: course.par,
    })
}
