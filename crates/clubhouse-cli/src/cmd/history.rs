use crate::reports;
use clap::Args;
use clubhouse_core::config::Config;
use clubhouse_core::error::LeagueResult;
use clubhouse_core::handicap::HandicapEngine;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct HistoryArgs {
    #[command(flatten)]
    pub config: Config,

    #[arg(short, long)]
    pub league: PathBuf,

    #[arg(short, long)]
    pub player: String,

    #[arg(long)]
    pub legacy: Option<PathBuf>,
}

pub fn run(args: HistoryArgs, config: &Config) -> LeagueResult<()> {
    let player = super::load_player(&args.league, &args.player, args.legacy.as_deref())?;

    let engine = HandicapEngine::new(config.handicap.clone());
    let history = engine.reconstruct(&player.rounds, player.low_handicap_index)?;

    reports::print_history_report(&player, &history);
    Ok(())
}
