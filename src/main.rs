use chromatic_arena::catalog::StaticCatalog;
use chromatic_arena::config::Config;
use chromatic_arena::ArenaResult;
use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Movement catalog JSON. Defaults to the built-in movements.
    #[arg(global = true, long)]
    catalog: Option<String>,

    /// JSON config file; explicit command-line flags take precedence.
    #[arg(global = true, long)]
    config: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Score(cmd::score::ScoreArgs),
    Batch(cmd::batch::BatchArgs),
    Movements(cmd::movements::MovementsArgs),
    Sample(cmd::sample::SampleArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli, &matches) {
        error!("{}", e);
        process::exit(1);
    }
}

fn run(cli: Cli, matches: &ArgMatches) -> ArenaResult<()> {
    let catalog = match &cli.catalog {
        Some(path) => {
            info!("Loading movement catalog: {}", path);
            StaticCatalog::load_from_file(path)?
        }
        None => StaticCatalog::builtin()?,
    };

    match cli.command {
        Commands::Score(mut args) => {
            args.config = resolve_config(
                cli.config.as_deref(),
                &args.config,
                matches.subcommand_matches("score"),
            )?;
            cmd::score::run(args, &catalog)
        }
        Commands::Batch(mut args) => {
            args.config = resolve_config(
                cli.config.as_deref(),
                &args.config,
                matches.subcommand_matches("batch"),
            )?;
            cmd::batch::run(args, &catalog)
        }
        Commands::Movements(args) => cmd::movements::run(args, &catalog),
        Commands::Sample(args) => cmd::sample::run(args, &catalog),
    }
}

/// File config as the base, with explicit command-line values merged over it.
fn resolve_config(
    path: Option<&str>,
    cli_config: &Config,
    sub_matches: Option<&ArgMatches>,
) -> ArenaResult<Config> {
    let Some(path) = path else {
        return Ok(cli_config.clone());
    };

    info!("Loading config from: {}", path);
    let mut config = Config::load_from_file(path)?;
    if let Some(m) = sub_matches {
        config.merge_from_cli(cli_config, m);
    }
    Ok(config)
}
