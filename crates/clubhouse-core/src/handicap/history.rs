use crate::error::LeagueResult;
use crate::handicap::engine::{next_low_index, HandicapEngine};
use crate::handicap::normalize::normalize_all;
use crate::handicap::types::{HandicapComputation, HandicapHistory, HistoryRow};
use crate::records::{DifferentialEntry, PlayerHandicapUpdate, PlayerHistory, RoundEntry};
use crate::util::same_tenth;
use tracing::{debug, info};

impl HandicapEngine {
    /// Replays a player's rounds oldest to newest, snapshotting the index
    /// before and after each one, then marks which rounds count right now.
    ///
    /// Snapshots are anchored on a low index tracked through the replay
    /// (starting empty and only moving once an official index exists), not
    /// on the stored `low_index`. The before/after columns can therefore
    /// differ from what [`HandicapEngine::compute`] gives for the same
    /// prefix with the stored low, when that low came from rounds no longer
    /// on file or from an external source. Only the final pass and
    /// `is_low_hi` use the stored low.
    ///
    /// Each snapshot re-runs [`HandicapEngine::compute`], so the replay is
    /// quadratic in the number of rounds.
    pub fn reconstruct(
        &self,
        rounds: &[RoundEntry],
        low_index: Option<f64>,
    ) -> LeagueResult<HandicapHistory> {
        let entries = normalize_all(rounds, self.params.default_slope)?;
        Ok(self.reconstruct_differentials(&entries, low_index))
    }

    pub fn reconstruct_differentials(
        &self,
        entries: &[DifferentialEntry],
        low_index: Option<f64>,
    ) -> HandicapHistory {
        let mut ordered: Vec<DifferentialEntry> = entries.to_vec();
        ordered.sort_by(|a, b| a.date.cmp(&b.date));

        let mut rows = Vec::with_capacity(ordered.len());
        let mut running_low: Option<f64> = None;

        for k in 0..ordered.len() {
            let before = self.compute(&ordered[..k], running_low);
            let after = self.compute(&ordered[..=k], running_low);

            let round = &ordered[k];
            if !after.insufficient_history {
                running_low = Some(next_low_index(running_low, after.handicap_index));
            }

            rows.push(HistoryRow {
                id: round.id.clone(),
                date: round.date,
                differential: round.differential,
                index_before: before.handicap_index,
                index_after: after.handicap_index,
                used: after.is_used_at(k),
                is_low_hi: low_index.is_some_and(|low| same_tenth(after.handicap_index, low)),
                used_for_current: false,
                is_soft_capped: after.is_soft_capped,
                is_hard_capped: after.is_hard_capped,
            });
        }

        let current = self.compute(&ordered, low_index);
        for (k, row) in rows.iter_mut().enumerate() {
            row.used_for_current = current.is_used_at(k);
        }

        debug!(
            "Reconstructed {} rounds, current index {:.1}",
            rows.len(),
            current.handicap_index
        );

        rows.reverse();
        HandicapHistory { rows, current }
    }

    /// Batch replay entry point: recomputes a stored player's index and the
    /// low index that should be written back.
    pub fn recompute_player(&self, player: &PlayerHistory) -> LeagueResult<PlayerHandicapUpdate> {
        let entries = normalize_all(&player.rounds, self.params.default_slope)?;
        let result: HandicapComputation = self.compute(&entries, player.low_handicap_index);

        info!(
            "Player '{}': index {:.1} from {} rounds",
            player.player_id, result.handicap_index, result.rounds_considered
        );

        Ok(PlayerHandicapUpdate {
            player_id: player.player_id.clone(),
            handicap_index: result.handicap_index,
            low_handicap_index: result.low_index_candidate,
            rounds_considered: result.rounds_considered,
        })
    }
}
