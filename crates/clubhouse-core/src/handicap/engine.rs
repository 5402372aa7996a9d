use crate::config::HandicapParams;
use crate::consts::BEST_OF_TABLE;
use crate::handicap::types::{HandicapComputation, UsedFlag};
use crate::records::DifferentialEntry;
use crate::util::truncate_tenths;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Rolling handicap index calculator. Pure: the same inputs always give
/// the same output and nothing outside the call is touched.
#[derive(Debug, Clone, Default)]
pub struct HandicapEngine {
    pub params: HandicapParams,
}

/// How many of the best differentials count for a given number of rounds.
/// Below three rounds there is no official index; callers average what
/// they have instead.
pub fn best_of_count(rounds: usize) -> usize {
    BEST_OF_TABLE
        .iter()
        .find(|(min_rounds, _)| rounds >= *min_rounds)
        .map(|(_, n)| *n)
        .unwrap_or(0)
}

/// The low index to store after a round produced `final_index`.
pub fn next_low_index(current_low: Option<f64>, final_index: f64) -> f64 {
    match current_low {
        Some(low) => low.min(final_index),
        None => final_index,
    }
}

impl HandicapEngine {
    pub fn new(params: HandicapParams) -> Self {
        Self { params }
    }

    /// Computes the index from `entries` (any order; sorted by date here,
    /// equal dates keep their input order) anchored on `low_index`.
    ///
    /// Selection tie-break: among equal differentials at the cut-off the
    /// earlier round wins, then the earlier input position.
    pub fn compute(
        &self,
        entries: &[DifferentialEntry],
        low_index: Option<f64>,
    ) -> HandicapComputation {
        let mut ordered: Vec<(usize, &DifferentialEntry)> = entries
            .iter()
            .enumerate()
            .filter(|(_, e)| {
                let ok = e.differential.is_finite();
                if !ok {
                    warn!("Skipping round '{}' with non-finite differential", e.id);
                }
                ok
            })
            .collect();
        ordered.sort_by(|a, b| a.1.date.cmp(&b.1.date).then(a.0.cmp(&b.0)));

        let window_start = ordered
            .len()
            .saturating_sub(self.params.max_rounds_considered);
        let window = &ordered[window_start..];
        let considered = window.len();

        if considered == 0 {
            return HandicapComputation {
                differentials: ordered
                    .iter()
                    .map(|(i, e)| UsedFlag {
                        id: e.id.clone(),
                        position: *i,
                        used: false,
                    })
                    .collect(),
                insufficient_history: true,
                low_index_candidate: low_index,
                ..Default::default()
            };
        }

        let insufficient_history =
            considered < self.params.min_rounds_for_index.max(1) || best_of_count(considered) == 0;
        let best_of = if insufficient_history {
            considered
        } else {
            best_of_count(considered)
        };

        let mut ranked: Vec<&(usize, &DifferentialEntry)> = window.iter().collect();
        ranked.sort_by(|a, b| {
            a.1.differential
                .total_cmp(&b.1.differential)
                .then(a.1.date.cmp(&b.1.date))
                .then(a.0.cmp(&b.0))
        });
        let selected: HashSet<usize> = ranked.iter().take(best_of).map(|(i, _)| *i).collect();

        let sum: f64 = ranked
            .iter()
            .take(best_of)
            .map(|(_, e)| e.differential)
            .sum();
        let raw_index = truncate_tenths(sum / best_of as f64);

        let (handicap_index, is_soft_capped, is_hard_capped) = match low_index {
            Some(low) if low.is_finite() => self.apply_caps(raw_index, low),
            _ => (raw_index, false, false),
        };

        let low_index_candidate = if insufficient_history {
            low_index
        } else {
            Some(next_low_index(low_index, handicap_index))
        };

        debug!(
            "Index {:.1} (raw {:.1}) from best {} of {} rounds, soft={}, hard={}",
            handicap_index, raw_index, best_of, considered, is_soft_capped, is_hard_capped
        );

        HandicapComputation {
            handicap_index,
            raw_index,
            differentials: ordered
                .iter()
                .map(|(i, e)| UsedFlag {
                    id: e.id.clone(),
                    position: *i,
                    used: selected.contains(i),
                })
                .collect(),
            is_soft_capped,
            is_hard_capped,
            rounds_considered: considered,
            best_of,
            insufficient_history,
            low_index_candidate,
        }
    }

    /// Soft cap halves the increase beyond `low + soft_cap_threshold`;
    /// hard cap clamps at `low + hard_cap_threshold`.
    ///
    /// Lines and index are compared in whole tenths so a plus-handicap low
    /// such as -4.9 does not put the line a hair off the grid.
    fn apply_caps(&self, raw_index: f64, low: f64) -> (f64, bool, bool) {
        let p = &self.params;
        let soft_line = to_tenths(low + p.soft_cap_threshold);
        let hard_line = to_tenths(low + p.hard_cap_threshold);

        let mut index = raw_index;
        let mut soft = false;
        let mut hard = false;

        let raw = to_tenths(raw_index);
        if raw > soft_line {
            let excess = (raw - soft_line) as f64 * p.soft_cap_factor;
            index = truncate_tenths((soft_line as f64 + excess) / 10.0);
            soft = true;
        }
        if to_tenths(index) > hard_line {
            index = hard_line as f64 / 10.0;
            hard = true;
        }
        (index, soft, hard)
    }
}

#[inline]
fn to_tenths(value: f64) -> i64 {
    (value * 10.0).round() as i64
}
