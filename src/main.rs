// src/main.rs
mod extractors;
mod manual;
mod storage;
mod utils;

use std::path::Path;

use clap::Parser;

use extractors::section::UnitExtractor;
use manual::models::{SearchBounds, UnitId};
use manual::source;
use storage::StorageManager;
use utils::AppError;

/// Command Line Interface for slicing a training manual into units
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path or URL of the manual document
    #[arg(short, long)]
    manual: String,

    /// Unit to extract, as MAJOR.MINOR (e.g. "2.3")
    #[arg(short, long)]
    unit: UnitId,

    /// Highest major number a heading in the manual may carry
    #[arg(long, default_value_t = 10)]
    max_major: u32,

    /// Highest minor number a heading in the manual may carry
    #[arg(long, default_value_t = 10)]
    max_minor: u32,

    /// Output directory for extracted content
    #[arg(short, long, default_value = "./output")]
    output_dir: String,

    /// Print the extracted unit as JSON to stdout instead of saving it
    #[arg(long)]
    json: bool,

    /// Debug mode - save the raw manual and a heading-offset report
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::info!("Starting extraction for args: {:?}", args);

    let bounds = SearchBounds::new(args.max_major, args.max_minor);

    // 3. Load the manual text
    let document = source::load_manual(&args.manual).await?;
    tracing::info!("Loaded manual ({} bytes)", document.len());

    // 4. Debug artifacts are written before extraction so they exist even
    //    when the unit cannot be found.
    if args.debug {
        let debug_dir = Path::new(&args.output_dir).join("debug");
        std::fs::create_dir_all(&debug_dir)?;

        let raw_path = debug_dir.join("raw_manual.md");
        std::fs::write(&raw_path, &document)?;
        tracing::info!("Saved raw manual to: {}", raw_path.display());

        let report_path = debug_dir.join("heading_report.txt");
        utils::report::write_heading_report(&document, bounds, &report_path)?;
    }

    // 5. Extract the requested unit
    let extractor = UnitExtractor::new();
    let unit = extractor
        .extract(&document, args.unit, bounds)
        .ok_or_else(|| AppError::UnitNotFound(args.unit.to_string()))?;
    tracing::info!(
        "Extracted unit {} '{}' ({} bytes)",
        unit.unit,
        unit.title,
        unit.body.len()
    );

    // 6. Emit the result: JSON to stdout, or content + metadata on disk
    if args.json {
        let rendered = serde_json::to_string_pretty(&unit)
            .map_err(|e| AppError::Processing(format!("Failed to render unit as JSON: {}", e)))?;
        println!("{}", rendered);
        return Ok(());
    }

    let storage = StorageManager::new(&args.output_dir)?;
    match storage.save_unit(&unit) {
        Ok(path) => tracing::info!("Saved unit content to: {}", path.display()),
        Err(e) => tracing::error!("Failed to save unit content: {}", e),
    }
    match storage.save_unit_metadata(&unit) {
        Ok(path) => tracing::info!("Saved unit metadata to: {}", path.display()),
        Err(e) => tracing::error!("Failed to save unit metadata: {}", e),
    }

    Ok(())
}
