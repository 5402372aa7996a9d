use crate::competition::payout::{award_prizes, category_pots, distribute_pot};
use crate::competition::ranking::rank_category;
use crate::competition::types::{
    Category, CategoryResult, ExcludedEntry, FlightResult, FlightRow, HoleGross,
};
use crate::config::{HandicapParams, PoolParams};
use crate::course::allocation::allocate_strokes;
use crate::course::handicap::course_handicap_for_tee;
use crate::error::{LeagueError, LeagueResult};
use crate::records::{FlightEntry, FlightRound};
use strum::IntoEnumIterator;
use tracing::{debug, warn};
use typed_builder::TypedBuilder;

#[derive(TypedBuilder)]
pub struct FlightResultParams {
    pub round: FlightRound,
    #[builder(default)]
    pub pool: PoolParams,
    #[builder(default)]
    pub handicap: HandicapParams,
}

impl FlightResultParams {
    /// Builds the flight leaderboard: nets, standings, pool payouts and
    /// fixed prizes per category. Entries with missing hole scores are left
    /// out and reported in `excluded`.
    pub fn compute(self) -> LeagueResult<FlightResult> {
        let round = self.round;
        let position_split = self.pool.get_position_split().map_err(LeagueError::Config)?;
        let category_split = self.pool.get_category_split().map_err(LeagueError::Config)?;
        let prize_amounts = self.pool.get_prize_amounts().map_err(LeagueError::Config)?;

        if round.entries.iter().any(|e| e.player_id.trim().is_empty()) {
            return Err(LeagueError::MissingPlayerIdentity);
        }

        let par = if round.course.par > 0 {
            round.course.par
        } else {
            round.course.holes.iter().map(|h| h.par as i32).sum()
        };

        let mut rows = Vec::with_capacity(round.entries.len());
        let mut excluded = Vec::new();

        for entry in &round.entries {
            match build_row(entry, &round, par, self.handicap.default_slope) {
                Ok(row) => rows.push(row),
                Err(e) => {
                    warn!("Excluding '{}' from flight: {}", entry.player_id, e);
                    excluded.push(ExcludedEntry {
                        player_id: entry.player_id.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        let pool_players = rows.iter().filter(|r| r.in_pool).count();
        let pool_total = self.pool.entry_fee * pool_players as f64;
        let pots = category_pots(pool_total, category_split);

        let mut categories = Vec::new();
        for category in Category::iter() {
            let standings = rank_category(&rows, category);
            let pool_standings: Vec<_> = standings
                .iter()
                .filter(|s| rows.iter().any(|r| r.player_id == s.player_id && r.in_pool))
                .cloned()
                .collect();

            let pot = pots[category.split_index()];
            let winners = distribute_pot(&pool_standings, pot, &position_split)?;
            let prizes = award_prizes(&standings, &prize_amounts);

            debug!(
                "{} {}: pot {:.2}, {} winner(s)",
                round.round_id,
                category,
                pot,
                winners.len()
            );

            categories.push(CategoryResult {
                category,
                pot,
                standings,
                winners,
                prizes,
            });
        }

        Ok(FlightResult {
            round_id: round.round_id,
            flight: round.flight,
            pool_total,
            rows,
            categories,
            excluded,
        })
    }
}

fn build_row(
    entry: &FlightEntry,
    round: &FlightRound,
    par: i32,
    default_slope: i32,
) -> LeagueResult<FlightRow> {
    let course_handicap =
        course_handicap_for_tee(entry.handicap_index, &round.tee, par, default_slope);

    let mut hole_scores = Vec::with_capacity(round.course.holes.len());
    for alloc in allocate_strokes(course_handicap, &round.course.holes) {
        let gross = (alloc.hole_number as usize)
            .checked_sub(1)
            .and_then(|i| entry.strokes.get(i).copied().flatten())
            .ok_or_else(|| {
                LeagueError::MalformedScoreRecord(format!(
                    "no gross score on hole {}",
                    alloc.hole_number
                ))
            })?;
        hole_scores.push(HoleGross {
            hole_number: alloc.hole_number,
            difficulty: alloc.difficulty,
            gross_score: gross as i32,
        });
    }

    if hole_scores.is_empty() {
        return Err(LeagueError::MalformedScoreRecord(
            "course has no holes".to_string(),
        ));
    }

    let mut row = FlightRow::new(&entry.player_id, course_handicap, hole_scores);
    row.in_pool = entry.in_pool;
    Ok(row)
}
