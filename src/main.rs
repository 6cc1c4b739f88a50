use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use tracing::warn;

use dogparks::catalog::{CityBounds, ParkCatalog};
use dogparks::config::FileConfig;
use dogparks::data::dog_parks;
use dogparks::export::{write_js, write_json};
use dogparks::logging::init_logging;

/// Madison, WI dog park data for the map front-end
///
/// Examples:
///   # Show the parks grouped by source
///   dogparks list
///
///   # Write dog_parks.json and dog_parks.js into the site directory
///   dogparks export --output-json site/dog_parks.json --output-js site/dog_parks.js
///
///   # Only the script variant
///   dogparks export --no-json
#[derive(Parser, Debug)]
#[command(name = "dogparks")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config file (optional, auto-searches dogparks.toml if not provided)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a summary by source and a sample of parks
    List {
        /// Number of parks to show
        #[arg(long)]
        sample: Option<usize>,
    },
    /// Write the JSON and JavaScript artifacts
    Export(ExportArgs),
    /// Report parks whose coordinates fall outside the Madison area
    Check,
}

#[derive(clap::Args, Debug, Default)]
struct ExportArgs {
    /// Location label recorded in the artifacts
    #[arg(short = 'l', long)]
    location: Option<String>,

    /// Output JSON file path (defaults to dog_parks.json)
    #[arg(long)]
    output_json: Option<PathBuf>,

    /// Output JavaScript file path (defaults to dog_parks.js)
    #[arg(long)]
    output_js: Option<PathBuf>,

    /// Skip the JSON artifact
    #[arg(long)]
    no_json: bool,

    /// Skip the JavaScript artifact
    #[arg(long)]
    no_js: bool,

    /// Keep near-duplicate parks
    #[arg(long)]
    no_dedup: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let (file_config, skipped) = match args.config {
        Some(ref path) => (FileConfig::from_path(path)?, Vec::new()),
        None => {
            let search = FileConfig::load();
            (search.config.unwrap_or_default(), search.skipped)
        }
    };

    init_logging(args.verbose || file_config.verbose);
    for entry in &skipped {
        warn!(path = %entry.path.display(), reason = %entry.reason, "skipping unparsable config file");
    }

    let catalog = madison_catalog(&file_config);
    match args.command {
        Command::List { sample } => {
            list(&catalog, sample.unwrap_or(file_config.sample_size));
            Ok(())
        }
        Command::Export(opts) => {
            let written = export(catalog, &file_config, opts)?;
            for (path, count) in written {
                println!("Exported {} parks to {}", count, path.display());
            }
            Ok(())
        }
        Command::Check => check(&catalog),
    }
}

/// Madison parks labelled with the configured location.
fn madison_catalog(config: &FileConfig) -> ParkCatalog {
    ParkCatalog::new(config.location.clone(), dog_parks().to_vec())
}

/// Write the enabled artifacts. Flags override the config file.
fn export(
    mut catalog: ParkCatalog,
    config: &FileConfig,
    opts: ExportArgs,
) -> Result<Vec<(PathBuf, usize)>> {
    let write_json_file = config.json && !opts.no_json;
    let write_js_file = config.js && !opts.no_js;
    if !write_json_file && !write_js_file {
        bail!("Nothing to export: both JSON and JavaScript outputs are disabled");
    }

    if let Some(location) = opts.location {
        catalog.location = location;
    }

    if config.dedup && !opts.no_dedup {
        let removed = catalog.dedup();
        println!("Removed {} duplicate parks", removed);
    }

    let mut written = Vec::new();
    if write_json_file {
        let path = opts.output_json.unwrap_or_else(|| config.output_json.clone());
        write_json(&path, &catalog).context("Failed to write JSON export")?;
        written.push((path, catalog.len()));
    }
    if write_js_file {
        let path = opts.output_js.unwrap_or_else(|| config.output_js.clone());
        write_js(&path, &catalog).context("Failed to write JavaScript export")?;
        written.push((path, catalog.len()));
    }
    Ok(written)
}

fn list(catalog: &ParkCatalog, sample: usize) {
    println!("Dog parks for {}", catalog.location);
    println!("================================");
    println!();
    println!("Summary by source:");
    for entry in catalog.summary_by_source() {
        println!("  - {}: {} parks", entry.source, entry.count);
    }
    println!();
    println!("Sample parks:");
    for park in catalog.sample(sample) {
        println!("  - {} ({:.4}, {:.4})", park.name, park.lat, park.lng);
        if !park.amenities.is_empty() {
            println!("    Amenities: {}", park.amenities.join(", "));
        }
    }
}

fn check(catalog: &ParkCatalog) -> Result<()> {
    let bounds = CityBounds::madison();
    let outside = bounds.outside(&catalog.parks);

    if outside.is_empty() {
        println!("All {} parks fall inside the Madison area", catalog.len());
        return Ok(());
    }

    for park in &outside {
        println!(
            "  - {} ({:.4}, {:.4}) is outside the Madison area",
            park.name, park.lat, park.lng
        );
    }
    bail!("{} of {} parks are outside the Madison area", outside.len(), catalog.len())
}
