use crate::reports;
use clap::Args;
use clubhouse_core::competition::assign_flights;
use clubhouse_core::config::Config;
use clubhouse_core::error::LeagueResult;
use clubhouse_core::handicap::HandicapEngine;
use clubhouse_core::loader::load_league_file;
use std::path::PathBuf;
use tracing::debug;

#[derive(Args, Debug, Clone)]
pub struct FlightsArgs {
    #[command(flatten)]
    pub config: Config,

    #[arg(short, long)]
    pub league: PathBuf,
}

pub fn run(args: FlightsArgs, config: &Config) -> LeagueResult<()> {
    let league = load_league_file(&args.league)?;
    let engine = HandicapEngine::new(config.handicap.clone());

    // Stored indexes are used as-is; players without one are recomputed.
    let players = league
        .players
        .iter()
        .map(|p| match p.handicap_index {
            Some(index) => Ok((p.player_id.clone(), index)),
            None => {
                debug!("No stored index for '{}', recomputing", p.player_id);
                engine
                    .recompute_player(p)
                    .map(|u| (u.player_id, u.handicap_index))
            }
        })
        .collect::<LeagueResult<Vec<_>>>()?;

    let flights = assign_flights(&players, config.pool.flight_count)?;
    reports::print_flights(&flights, &players);
    Ok(())
}
