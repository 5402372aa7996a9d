use crate::error::{LeagueError, LeagueResult};
use crate::records::Hole;
use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoleAllocation {
    pub hole_number: u8,
    pub par: u8,
    /// Stroke index actually used (repaired if the course data was broken).
    pub difficulty: u8,
    pub strokes: i32,
}

/// Strokes a player with `course_handicap` receives on the hole ranked
/// `difficulty` (1 = hardest) of a `hole_count`-hole round.
///
/// Uses floor division and a non-negative remainder, so a plus handicap
/// (negative) gives strokes back starting from the easiest hole.
#[inline]
pub fn strokes_on_hole(course_handicap: i32, difficulty: u8, hole_count: usize) -> i32 {
    if hole_count == 0 {
        return 0;
    }
    let n = hole_count as i32;
    let base = course_handicap.div_euclid(n);
    let remainder = course_handicap.rem_euclid(n);
    base + i32::from(difficulty as i32 <= remainder)
}

/// Checks that the difficulties form a permutation of `1..=holes.len()`.
pub fn validate_stroke_index(holes: &[Hole]) -> LeagueResult<()> {
    let n = holes.len();
    let mut seen = vec![false; n + 1];
    for h in holes {
        let d = h.difficulty as usize;
        if d == 0 || d > n {
            return Err(LeagueError::InvalidCourseData(format!(
                "hole {} has difficulty {} outside 1..={}",
                h.hole_number, h.difficulty, n
            )));
        }
        if seen[d] {
            return Err(LeagueError::InvalidCourseData(format!(
                "difficulty {} used by more than one hole",
                d
            )));
        }
        seen[d] = true;
    }
    Ok(())
}

/// Distributes exactly `course_handicap` strokes over `holes`, hardest first.
///
/// Broken stroke indexes are repaired by re-ranking holes on
/// (difficulty, hole number) so the total still adds up. Output follows
/// the input hole order.
pub fn allocate_strokes(course_handicap: i32, holes: &[Hole]) -> Vec<HoleAllocation> {
    let ranks: Vec<u8> = match validate_stroke_index(holes) {
        Ok(()) => holes.iter().map(|h| h.difficulty).collect(),
        Err(e) => {
            warn!("{}; re-ranking holes", e);
            repaired_ranks(holes)
        }
    };

    holes
        .iter()
        .zip(ranks)
        .map(|(h, rank)| HoleAllocation {
            hole_number: h.hole_number,
            par: h.par,
            difficulty: rank,
            strokes: strokes_on_hole(course_handicap, rank, holes.len()),
        })
        .collect()
}

fn repaired_ranks(holes: &[Hole]) -> Vec<u8> {
    let mut order: Vec<usize> = (0..holes.len()).collect();
    order.sort_by_key(|&i| (holes[i].difficulty, holes[i].hole_number));

    let mut ranks = vec![0u8; holes.len()];
    for (rank, &i) in order.iter().enumerate() {
        ranks[i] = (rank + 1) as u8;
    }
    ranks
}
