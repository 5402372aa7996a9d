#![allow(dead_code)]

use chrono::{Days, NaiveDate};
use clubhouse_core::records::{
    Course, DifferentialEntry, FlightEntry, FlightRound, Hole, RoundEntry, TeeBox,
};

pub const STROKE_INDEX: [u8; 18] = [7, 15, 1, 11, 3, 17, 9, 13, 5, 8, 16, 2, 12, 4, 18, 10, 14, 6];
pub const PARS: [u8; 18] = [4, 5, 3, 4, 4, 3, 5, 4, 4, 4, 3, 5, 4, 4, 3, 5, 4, 4];

pub fn day(offset: u64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .checked_add_days(Days::new(offset))
        .unwrap()
}

pub fn diff(id: &str, offset: u64, value: f64) -> DifferentialEntry {
    DifferentialEntry {
        id: id.to_string(),
        date: day(offset),
        differential: value,
    }
}

/// One entry per value, one week apart, ids `r0`, `r1`, ...
pub fn weekly(values: &[f64]) -> Vec<DifferentialEntry> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| diff(&format!("r{}", i), i as u64 * 7, v))
        .collect()
}

pub fn weekly_rounds(values: &[f64]) -> Vec<RoundEntry> {
    weekly(values).into_iter().map(RoundEntry::from).collect()
}

pub fn mock_holes() -> Vec<Hole> {
    (0..18)
        .map(|i| Hole {
            hole_number: (i + 1) as u8,
            par: PARS[i],
            difficulty: STROKE_INDEX[i],
        })
        .collect()
}

pub fn mock_tee() -> TeeBox {
    TeeBox {
        name: "White".to_string(),
        rating: Some(72.0),
        slope: 113,
    }
}

pub fn mock_course() -> Course {
    Course {
        name: "Pine Hollow".to_string(),
        par: 72,
        holes: mock_holes(),
        tees: vec![mock_tee()],
    }
}

/// Builder for flight entries to keep leaderboard tests short.
pub struct EntryBuilder {
    entry: FlightEntry,
}

impl EntryBuilder {
    pub fn new(player_id: &str) -> Self {
        Self {
            entry: FlightEntry {
                player_id: player_id.to_string(),
                name: String::new(),
                handicap_index: 0.0,
                strokes: PARS.iter().map(|&p| Some(p)).collect(),
                in_pool: true,
            },
        }
    }

    pub fn index(mut self, handicap_index: f64) -> Self {
        self.entry.handicap_index = handicap_index;
        self
    }

    /// Sets the gross score on `hole_number` (1-based).
    pub fn hole(mut self, hole_number: usize, gross: u8) -> Self {
        self.entry.strokes[hole_number - 1] = Some(gross);
        self
    }

    pub fn missing(mut self, hole_number: usize) -> Self {
        self.entry.strokes[hole_number - 1] = None;
        self
    }

    pub fn out_of_pool(mut self) -> Self {
        self.entry.in_pool = false;
        self
    }

    pub fn build(self) -> FlightEntry {
        self.entry
    }
}

pub fn mock_round(entries: Vec<FlightEntry>) -> FlightRound {
    FlightRound {
        round_id: "week-12".to_string(),
        date: day(80),
        flight: "A".to_string(),
        course: mock_course(),
        tee: mock_tee(),
        entries,
    }
}
