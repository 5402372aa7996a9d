use crate::reports;
use clap::Args;
use clubhouse_core::config::Config;
use clubhouse_core::error::LeagueResult;
use clubhouse_core::handicap::HandicapEngine;
use clubhouse_core::loader::{load_league_file, write_json};
use clubhouse_core::records::PlayerHandicapUpdate;
use rayon::prelude::*;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct ReplayArgs {
    #[command(flatten)]
    pub config: Config,

    #[arg(short, long)]
    pub league: PathBuf,

    /// Where to write the JSON report of updated indexes
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplayReport {
    pub league: String,
    pub updates: Vec<PlayerHandicapUpdate>,
}

pub fn run(args: ReplayArgs, config: &Config) -> LeagueResult<()> {
    let league = load_league_file(&args.league)?;
    let engine = HandicapEngine::new(config.handicap.clone());

    info!("🔁 Replaying {} players...", league.players.len());
    let start = Instant::now();

    // Players share nothing, so each one is recomputed on its own thread.
    let updates = league
        .players
        .par_iter()
        .map(|player| engine.recompute_player(player))
        .collect::<LeagueResult<Vec<_>>>()?;

    info!(
        "🏁 Replay complete in {:.2}s",
        start.elapsed().as_secs_f64()
    );
    reports::print_replay_report(&updates);

    if let Some(path) = &args.out {
        let report = ReplayReport {
            league: league.name,
            updates,
        };
        write_json(path, &report)?;
        info!("💾 Wrote {} updates to {:?}", report.updates.len(), path);
    }
    Ok(())
}
