use crate::error::{LeagueError, LeagueResult};
use crate::records::{TeeBox, STANDARD_SLOPE};
use crate::util::round_half_up;
use tracing::warn;

/// `round(index * slope / 113 + (rating - par))`, halves rounding up.
pub fn course_handicap(index: f64, slope: i32, rating: f64, par: i32) -> LeagueResult<i32> {
    if slope <= 0 {
        return Err(LeagueError::InvalidCourseData(format!(
            "slope must be positive, got {}",
            slope
        )));
    }
    if !rating.is_finite() || !index.is_finite() {
        return Err(LeagueError::InvalidCourseData(format!(
            "index {} / rating {} must be finite",
            index, rating
        )));
    }
    let raw = index * (slope as f64 / STANDARD_SLOPE as f64) + (rating - par as f64);
    Ok(round_half_up(raw))
}

/// Lenient form for leaderboards: a bad slope becomes `default_slope`, a bad
/// rating becomes the par, a non-finite index plays off scratch.
pub fn course_handicap_for_tee(index: f64, tee: &TeeBox, par: i32, default_slope: i32) -> i32 {
    let slope = if tee.slope > 0 {
        tee.slope
    } else {
        warn!(
            "Tee '{}' has slope {}, substituting {}",
            tee.name, tee.slope, default_slope
        );
        default_slope
    };
    let rating = match tee.rating.filter(|r| r.is_finite()) {
        Some(r) => r,
        None => {
            warn!("Tee '{}' has no usable rating, using par {}", tee.name, par);
            par as f64
        }
    };
    let index = if index.is_finite() { index } else { 0.0 };

    // Both inputs are sanitized above.
    course_handicap(index, slope, rating, par).unwrap_or(0)
}
