use crate::error::{LeagueError, LeagueResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsedFlag {
    pub id: String,
    /// Index of the round in the slice handed to the engine.
    pub position: usize,
    pub used: bool,
}

/// Result of one index computation. `differentials` lists every input
/// entry in play order, including those outside the rolling window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct HandicapComputation {
    pub handicap_index: f64,
    pub raw_index: f64,
    pub differentials: Vec<UsedFlag>,
    pub is_soft_capped: bool,
    pub is_hard_capped: bool,

    pub rounds_considered: usize,
    pub best_of: usize,
    pub insufficient_history: bool,
    /// What the caller should store as the low index after this round.
    pub low_index_candidate: Option<f64>,
}

impl HandicapComputation {
    pub fn is_used(&self, id: &str) -> bool {
        self.differentials.iter().any(|d| d.used && d.id == id)
    }

    /// Ids need not be unique across merged sources; the input position is.
    pub fn is_used_at(&self, position: usize) -> bool {
        self.differentials
            .iter()
            .any(|d| d.used && d.position == position)
    }

    pub fn used_count(&self) -> usize {
        self.differentials.iter().filter(|d| d.used).count()
    }

    /// The index, or `InsufficientHistory` while it is only a provisional
    /// average of fewer rounds than an official index needs.
    pub fn official_index(&self) -> LeagueResult<f64> {
        if self.insufficient_history {
            return Err(LeagueError::InsufficientHistory {
                available: self.rounds_considered,
            });
        }
        Ok(self.handicap_index)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRow {
    pub id: String,
    pub date: NaiveDate,
    pub differential: f64,
    pub index_before: f64,
    pub index_after: f64,
    /// Counted towards the index at the time the round was played.
    pub used: bool,
    /// The round brought the index down to the stored low.
    pub is_low_hi: bool,
    /// Counts towards the index right now.
    pub used_for_current: bool,
    pub is_soft_capped: bool,
    pub is_hard_capped: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct HandicapHistory {
    /// Newest round first.
    pub rows: Vec<HistoryRow>,
    pub current: HandicapComputation,
}
