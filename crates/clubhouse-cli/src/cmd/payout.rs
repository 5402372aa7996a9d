use crate::reports;
use clap::Args;
use clubhouse_core::competition::FlightResultParams;
use clubhouse_core::config::Config;
use clubhouse_core::error::LeagueResult;
use clubhouse_core::loader::{load_flight_file, write_json};
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct PayoutArgs {
    #[command(flatten)]
    pub config: Config,

    #[arg(short, long)]
    pub flight: PathBuf,

    /// Also write the full result as JSON
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: PayoutArgs, config: &Config) -> LeagueResult<()> {
    let round = load_flight_file(&args.flight)?;

    let result = FlightResultParams::builder()
        .round(round)
        .pool(config.pool.clone())
        .handicap(config.handicap.clone())
        .build()
        .compute()?;

    reports::print_leaderboard(&result);
    for category in &result.categories {
        reports::print_category_result(category);
    }
    reports::print_excluded(&result.excluded);

    if let Some(path) = &args.out {
        write_json(path, &result)?;
        info!("💾 Wrote flight result to {:?}", path);
    }
    Ok(())
}
