use crate::error::{LeagueError, LeagueResult};
use crate::records::STANDARD_SLOPE;
use crate::util::round_half_up_tenths;
use tracing::warn;

/// `(adjusted_gross - rating) * 113 / slope`, rounded half-up to one decimal.
///
/// Negative differentials are legitimate (a round better than the rating)
/// and are returned as-is.
pub fn score_differential(adjusted_gross: f64, rating: f64, slope: i32) -> LeagueResult<f64> {
    if slope <= 0 {
        return Err(LeagueError::InvalidCourseData(format!(
            "slope must be positive, got {}",
            slope
        )));
    }
    if !rating.is_finite() {
        return Err(LeagueError::InvalidCourseData(format!(
            "rating must be finite, got {}",
            rating
        )));
    }
    if !adjusted_gross.is_finite() {
        return Err(LeagueError::MalformedScoreRecord(format!(
            "adjusted gross score must be finite, got {}",
            adjusted_gross
        )));
    }

    let raw = (adjusted_gross - rating) * STANDARD_SLOPE as f64 / slope as f64;
    Ok(round_half_up_tenths(raw))
}

/// Lenient variant used on the live paths: an unusable slope is replaced
/// by `default_slope`, a missing or non-finite rating by `fallback_rating`
/// (the par).
pub fn score_differential_or_default(
    adjusted_gross: f64,
    rating: Option<f64>,
    slope: i32,
    default_slope: i32,
    fallback_rating: f64,
) -> LeagueResult<f64> {
    let slope = if slope > 0 {
        slope
    } else {
        warn!("Slope {} is unusable, substituting {}", slope, default_slope);
        default_slope
    };
    let rating = match rating.filter(|r| r.is_finite()) {
        Some(r) => r,
        None => {
            warn!("Rating {:?} is unusable, substituting par {}", rating, fallback_rating);
            fallback_rating
        }
    };
    score_differential(adjusted_gross, rating, slope)
}
