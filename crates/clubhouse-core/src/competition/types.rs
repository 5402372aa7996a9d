use crate::consts::FRONT_NINE_LAST_HOLE;
use crate::course::allocation::strokes_on_hole;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    #[strum(to_string = "Front 9")]
    Front,
    #[strum(to_string = "Back 9")]
    Back,
    #[strum(to_string = "Total")]
    Total,
}

impl Category {
    pub fn includes_hole(self, hole_number: u8) -> bool {
        match self {
            Category::Front => hole_number <= FRONT_NINE_LAST_HOLE,
            Category::Back => hole_number > FRONT_NINE_LAST_HOLE,
            Category::Total => true,
        }
    }

    /// Position in `[front, back, total]` split tables.
    pub fn split_index(self) -> usize {
        match self {
            Category::Front => 0,
            Category::Back => 1,
            Category::Total => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoleGross {
    pub hole_number: u8,
    pub difficulty: u8,
    pub gross_score: i32,
}

/// One player's line on the flight leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightRow {
    pub player_id: String,
    pub course_handicap: i32,
    pub front_gross: i32,
    pub back_gross: i32,
    pub total_gross: i32,
    pub front_net: i32,
    pub back_net: i32,
    pub total_net: i32,
    /// Hardest hole first.
    pub gross_hole_scores: Vec<HoleGross>,
    pub in_pool: bool,
}

impl FlightRow {
    /// Builds the row from per-hole gross scores. Nine-hole nets subtract
    /// the strokes allocated on those holes; the total net subtracts the
    /// full course handicap.
    pub fn new(player_id: &str, course_handicap: i32, mut hole_scores: Vec<HoleGross>) -> Self {
        hole_scores.sort_by_key(|h| (h.difficulty, h.hole_number));
        let hole_count = hole_scores.len();

        let mut front_gross = 0;
        let mut back_gross = 0;
        let mut front_strokes = 0;
        let mut back_strokes = 0;
        for h in &hole_scores {
            let strokes = strokes_on_hole(course_handicap, h.difficulty, hole_count);
            if Category::Front.includes_hole(h.hole_number) {
                front_gross += h.gross_score;
                front_strokes += strokes;
            } else {
                back_gross += h.gross_score;
                back_strokes += strokes;
            }
        }
        let total_gross = front_gross + back_gross;

        Self {
            player_id: player_id.to_string(),
            course_handicap,
            front_gross,
            back_gross,
            total_gross,
            front_net: front_gross - front_strokes,
            back_net: back_gross - back_strokes,
            total_net: total_gross - course_handicap,
            gross_hole_scores: hole_scores,
            in_pool: true,
        }
    }

    pub fn net(&self, category: Category) -> i32 {
        match category {
            Category::Front => self.front_net,
            Category::Back => self.back_net,
            Category::Total => self.total_net,
        }
    }

    /// Gross scores on the category's holes, hardest first.
    pub fn tiebreak_sequence(&self, category: Category) -> Vec<i32> {
        self.gross_hole_scores
            .iter()
            .filter(|h| category.includes_hole(h.hole_number))
            .map(|h| h.gross_score)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Standing {
    pub player_id: String,
    /// Shared by players the tie-break cannot separate.
    pub position: usize,
    pub net: i32,
    pub tiebreak: Vec<i32>,
}

impl Standing {
    /// Indistinguishable on net and on every tie-break hole.
    pub fn is_absolute_tie(&self, other: &Standing) -> bool {
        self.net == other.net && self.tiebreak == other.tiebreak
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payout {
    pub player_id: String,
    pub amount: f64,
    pub position: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResult {
    pub category: Category,
    pub pot: f64,
    pub standings: Vec<Standing>,
    pub winners: Vec<Payout>,
    pub prizes: Vec<Payout>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExcludedEntry {
    pub player_id: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightResult {
    pub round_id: String,
    pub flight: String,
    pub pool_total: f64,
    pub rows: Vec<FlightRow>,
    pub categories: Vec<CategoryResult>,
    pub excluded: Vec<ExcludedEntry>,
}

impl FlightResult {
    pub fn category(&self, category: Category) -> Option<&CategoryResult> {
        self.categories.iter().find(|c| c.category == category)
    }
}
