use chromatic_arena::catalog::MovementCatalog;
use chromatic_arena::sample::random_canvas;
use chromatic_arena::ArenaResult;
use clap::Args;
use tracing::debug;

#[derive(Args, Debug, Clone)]
pub struct SampleArgs {
    /// Movement whose palette the shapes are drawn from.
    #[arg(short, long)]
    pub movement: String,

    #[arg(short = 'n', long, default_value_t = 8)]
    pub objects: usize,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,
}

pub fn run(args: SampleArgs, catalog: &dyn MovementCatalog) -> ArenaResult<()> {
    let mut rng = match args.seed {
        Some(s) => fastrand::Rng::with_seed(s),
        None => fastrand::Rng::new(),
    };

    let palette = catalog
        .movement(&args.movement)
        .map(|m| m.color_palette.clone())
        .unwrap_or_default();
    debug!(
        "Sampling {} shapes from a {}-color palette",
        args.objects,
        palette.len()
    );

    let canvas = random_canvas(&mut rng, &palette, args.objects);
    println!("{}", serde_json::to_string_pretty(&canvas)?);
    Ok(())
}
