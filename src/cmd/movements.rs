use crate::reports;
use chromatic_arena::catalog::MovementCatalog;
use chromatic_arena::config::{OutputFormat, OutputParams};
use chromatic_arena::ArenaResult;
use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct MovementsArgs {
    #[command(flatten)]
    pub output: OutputParams,

    /// Only list movements unlocked at this player level.
    #[arg(short, long)]
    pub level: Option<u32>,
}

pub fn run(args: MovementsArgs, catalog: &dyn MovementCatalog) -> ArenaResult<()> {
    let movements = match args.level {
        Some(level) => catalog.unlocked_at(level),
        None => catalog.movements(),
    };

    match args.output.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&movements)?),
        OutputFormat::Table => reports::print_movement_catalog(&movements),
    }
    Ok(())
}
