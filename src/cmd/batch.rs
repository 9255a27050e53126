use crate::reports;
use chromatic_arena::api::resolve_rules;
use chromatic_arena::canvas::CanvasDescription;
use chromatic_arena::catalog::MovementCatalog;
use chromatic_arena::config::{Config, OutputFormat};
use chromatic_arena::scorer::{calculate_score, ScoreResult};
use chromatic_arena::ArenaResult;
use clap::Args;
use rayon::prelude::*;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct BatchArgs {
    #[command(flatten)]
    pub config: Config,

    /// Directory of canvas JSON files.
    #[arg(short, long)]
    pub dir: PathBuf,

    #[arg(short, long)]
    pub movement: String,

    /// Also write the ranking to a CSV file.
    #[arg(long)]
    pub csv: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchRow {
    pub file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ScoreResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BatchRow {
    pub fn total(&self) -> f64 {
        self.result.as_ref().map_or(-1.0, |r| r.total_score)
    }
}

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    file: &'a str,
    movement: &'a str,
    total_score: Option<f64>,
    bonus: Option<f64>,
    breakdown: String,
    error: &'a str,
}

pub fn run(args: BatchArgs, catalog: &dyn MovementCatalog) -> ArenaResult<()> {
    let paths = canvas_files(&args.dir)?;
    if paths.is_empty() {
        warn!("No canvas files found in {:?}", args.dir);
    }

    let rules = resolve_rules(catalog, &args.movement, &args.config.rules);
    let start = Instant::now();

    let mut rows: Vec<BatchRow> = paths
        .par_iter()
        .map(|path| {
            let file = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            let outcome = CanvasDescription::load_from_file(path)
                .and_then(|canvas| calculate_score(&canvas, &args.movement, &rules));

            match outcome {
                Ok(result) => BatchRow {
                    file,
                    result: Some(result),
                    error: None,
                },
                Err(e) => {
                    warn!("Skipping {}: {}", file, e);
                    BatchRow {
                        file,
                        result: None,
                        error: Some(e.to_string()),
                    }
                }
            }
        })
        .collect();

    rows.sort_by(|a, b| {
        b.total()
            .total_cmp(&a.total())
            .then_with(|| a.file.cmp(&b.file))
    });

    info!(
        "Scored {} canvases in {:.2?}",
        rows.iter().filter(|r| r.result.is_some()).count(),
        start.elapsed()
    );

    match args.config.output.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
        OutputFormat::Table => reports::print_batch_report(&args.movement, &rows),
    }

    if let Some(path) = &args.csv {
        write_csv(path, &args.movement, &rows)?;
        info!("Wrote ranking to {:?}", path);
    }
    Ok(())
}

fn canvas_files(dir: &Path) -> ArenaResult<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

fn write_csv(path: &Path, movement: &str, rows: &[BatchRow]) -> ArenaResult<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        let breakdown = row
            .result
            .as_ref()
            .map(|r| {
                r.breakdown
                    .iter()
                    .map(|(category, score)| format!("{}={}", category, score))
                    .collect::<Vec<_>>()
                    .join(";")
            })
            .unwrap_or_default();

        writer.serialize(CsvRow {
            file: &row.file,
            movement,
            total_score: row.result.as_ref().map(|r| r.total_score),
            bonus: row.result.as_ref().map(|r| r.bonus),
            breakdown,
            error: row.error.as_deref().unwrap_or(""),
        })?;
    }
    writer.flush()?;
    Ok(())
}
