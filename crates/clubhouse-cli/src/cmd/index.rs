use crate::reports;
use clap::Args;
use clubhouse_core::config::Config;
use clubhouse_core::error::LeagueResult;
use clubhouse_core::handicap::{normalize_all, HandicapEngine};
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct IndexArgs {
    #[command(flatten)]
    pub config: Config,

    #[arg(short, long)]
    pub league: PathBuf,

    #[arg(short, long)]
    pub player: String,

    /// CSV of `id,date,differential` rounds kept from the old system
    #[arg(long)]
    pub legacy: Option<PathBuf>,
}

pub fn run(args: IndexArgs, config: &Config) -> LeagueResult<()> {
    let player = super::load_player(&args.league, &args.player, args.legacy.as_deref())?;

    let engine = HandicapEngine::new(config.handicap.clone());
    let entries = normalize_all(&player.rounds, config.handicap.default_slope)?;
    let result = engine.compute(&entries, player.low_handicap_index);

    reports::print_index_report(&player, &entries, &result);
    Ok(())
}
