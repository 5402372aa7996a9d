use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Slope of a tee of standard difficulty; differentials and course
/// handicaps are normalized against it.
pub const STANDARD_SLOPE: i32 = 113;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hole {
    pub hole_number: u8,
    pub par: u8,
    /// Stroke index, 1 = hardest.
    pub difficulty: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeeBox {
    pub name: String,
    /// Unrated tees play at par.
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default = "default_slope")]
    pub slope: i32,
}

fn default_slope() -> i32 {
    STANDARD_SLOPE
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub name: String,
    pub par: i32,
    pub holes: Vec<Hole>,
    #[serde(default)]
    pub tees: Vec<TeeBox>,
}

/// A score differential traceable back to the round it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DifferentialEntry {
    pub id: String,
    pub date: NaiveDate,
    pub differential: f64,
}

/// Current-format round: the differential is derived from score and tee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBasedEntry {
    pub id: String,
    pub date: NaiveDate,
    pub gross_score: i32,
    #[serde(default)]
    pub adjusted_gross_score: Option<i32>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default = "default_slope")]
    pub slope: i32,
    /// Only consulted when the rating is missing.
    #[serde(default)]
    pub par: Option<i32>,
    #[serde(default)]
    pub holes: Vec<Hole>,
}

/// Legacy round recorded before per-hole data existed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DifferentialBasedEntry {
    pub id: String,
    pub date: NaiveDate,
    pub differential: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RoundEntry {
    ScoreBased(ScoreBasedEntry),
    DifferentialBased(DifferentialBasedEntry),
}

impl From<DifferentialEntry> for RoundEntry {
    fn from(e: DifferentialEntry) -> Self {
        RoundEntry::DifferentialBased(DifferentialBasedEntry {
            id: e.id,
            date: e.date,
            differential: e.differential,
        })
    }
}

/// One player's finalized result for one round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRecord {
    pub round_id: String,
    pub player_id: String,
    pub date: NaiveDate,
    pub gross_score: i32,
    pub adjusted_gross_score: i32,
    pub front_nine: i32,
    pub back_nine: i32,
    pub hole_strokes: Vec<u8>,
    pub rating: f64,
    pub slope: i32,
    pub par: i32,
}

impl From<&ScoreRecord> for ScoreBasedEntry {
    fn from(r: &ScoreRecord) -> Self {
        Self {
            id: r.round_id.clone(),
            date: r.date,
            gross_score: r.gross_score,
            adjusted_gross_score: Some(r.adjusted_gross_score),
            rating: Some(r.rating),
            slope: r.slope,
            par: Some(r.par),
            holes: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerHistory {
    pub player_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub low_handicap_index: Option<f64>,
    #[serde(default)]
    pub handicap_index: Option<f64>,
    #[serde(default)]
    pub rounds: Vec<RoundEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct LeagueFile {
    #[serde(default)]
    pub name: String,
    pub players: Vec<PlayerHistory>,
}

impl LeagueFile {
    pub fn player(&self, player_id: &str) -> Option<&PlayerHistory> {
        self.players.iter().find(|p| p.player_id == player_id)
    }
}

/// What the player state store receives back after a recomputation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerHandicapUpdate {
    pub player_id: String,
    pub handicap_index: f64,
    pub low_handicap_index: Option<f64>,
    pub rounds_considered: usize,
}

/// A competitor in one flight of one round. `strokes[i]` is the gross
/// score on hole `i + 1`; `None` marks a hole without a recorded score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightEntry {
    pub player_id: String,
    #[serde(default)]
    pub name: String,
    pub handicap_index: f64,
    #[serde(default)]
    pub strokes: Vec<Option<u8>>,
    #[serde(default = "default_in_pool")]
    pub in_pool: bool,
}

fn default_in_pool() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightRound {
    pub round_id: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub flight: String,
    pub course: Course,
    pub tee: TeeBox,
    pub entries: Vec<FlightEntry>,
}
