use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use clubhouse_core::config::Config;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON config file; values typed on the command line win.
    #[arg(global = true, long = "config")]
    config_file: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Index(cmd::index::IndexArgs),
    History(cmd::history::HistoryArgs),
    Replay(cmd::replay::ReplayArgs),
    Payout(cmd::payout::PayoutArgs),
    Flights(cmd::flights::FlightsArgs),
}

impl Commands {
    fn config(&self) -> &Config {
        match self {
            Commands::Index(args) => &args.config,
            Commands::History(args) => &args.config,
            Commands::Replay(args) => &args.config,
            Commands::Payout(args) => &args.config,
            Commands::Flights(args) => &args.config,
        }
    }
}

fn resolve_config(path: Option<&str>, cli_config: &Config, sub_matches: &ArgMatches) -> Config {
    let Some(path) = path else {
        return cli_config.clone();
    };

    info!("⚙️  Loading config from: {}", path);
    let mut config = Config::load_from_file(path).unwrap_or_else(|e| {
        error!("{}", e);
        process::exit(1);
    });
    config.merge_from_cli(cli_config, sub_matches);
    config
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let Some((_, sub_matches)) = matches.subcommand() else {
        error!("No subcommand given");
        process::exit(2);
    };
    let config = resolve_config(
        cli.config_file.as_deref(),
        cli.command.config(),
        sub_matches,
    );

    let result = match cli.command {
        Commands::Index(args) => cmd::index::run(args, &config),
        Commands::History(args) => cmd::history::run(args, &config),
        Commands::Replay(args) => cmd::replay::run(args, &config),
        Commands::Payout(args) => cmd::payout::run(args, &config),
        Commands::Flights(args) => cmd::flights::run(args, &config),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
