use crate::reports;
use chromatic_arena::api::resolve_rules;
use chromatic_arena::canvas::CanvasDescription;
use chromatic_arena::catalog::MovementCatalog;
use chromatic_arena::config::{Config, OutputFormat};
use chromatic_arena::scorer::calculate_score;
use chromatic_arena::ArenaResult;
use clap::Args;
use std::path::PathBuf;
use tracing::debug;

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub config: Config,

    /// Canvas description JSON.
    #[arg(short, long)]
    pub canvas: PathBuf,

    #[arg(short, long)]
    pub movement: String,
}

pub fn run(args: ScoreArgs, catalog: &dyn MovementCatalog) -> ArenaResult<()> {
    debug!("Scoring {:?} as '{}'", args.canvas, args.movement);
    let canvas = CanvasDescription::load_from_file(&args.canvas)?;
    let rules = resolve_rules(catalog, &args.movement, &args.config.rules);
    let result = calculate_score(&canvas, &args.movement, &rules)?;

    match args.config.output.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Table => {
            reports::print_score_report(&args.movement, catalog.movement(&args.movement), &result)
        }
    }
    Ok(())
}
