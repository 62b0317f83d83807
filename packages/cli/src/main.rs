#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI entry point for the sector map boundary tools.
//!
//! Normalizes and previews single boundaries (from a file or stdin), audits
//! exported boundary records in bulk, and starts the HTTP server. Uses
//! `indicatif-log-bridge` (via [`sector_map_cli_utils::init_logger`]) so
//! log lines and the audit progress bar share the terminal cleanly.

use std::io::Read as _;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use sector_map_boundary::audit::audit_boundaries;
use sector_map_boundary::config::load_defaults;
use sector_map_boundary_models::StoredBoundary;
use sector_map_cli_utils::AuditProgress;
use sector_map_server::api::{normalize_response, preview_response};
use sector_map_server_models::{PreviewRequest, ViewportSize};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "sector_map_cli", about = "Sector map boundary tools")]
struct Cli {
    /// Map defaults TOML file (overrides `SECTOR_MAP_CONFIG`)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize a boundary and print its canonical ring and `GeoJSON`
    Normalize {
        /// File containing the boundary JSON (reads stdin if omitted)
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Derive the display center, bounding region, and map scene for a boundary
    Preview {
        /// File containing the boundary JSON (reads stdin if omitted)
        #[arg(long)]
        file: Option<PathBuf>,
        /// Manually entered latitude
        #[arg(long, allow_negative_numbers = true)]
        lat: Option<f64>,
        /// Manually entered longitude
        #[arg(long, allow_negative_numbers = true)]
        lng: Option<f64>,
        /// Viewport width in pixels (with --height, adds a fitted viewport)
        #[arg(long, requires = "height")]
        width: Option<u32>,
        /// Viewport height in pixels
        #[arg(long, requires = "width")]
        height: Option<u32>,
        /// Highest zoom for the fitted viewport
        #[arg(long)]
        max_zoom: Option<f64>,
    },
    /// Audit a JSON array of exported boundary records
    Audit {
        /// File containing `[{"id", "level", "name", "boundary"}, ...]`
        #[arg(long)]
        file: PathBuf,
        /// Print the full report as JSON instead of a summary table
        #[arg(long)]
        json: bool,
    },
    /// Start the HTTP API server (honors `BIND_ADDR` and `PORT`)
    Serve,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let multi = sector_map_cli_utils::init_logger();
    let cli = Cli::parse();

    let defaults = load_defaults(cli.config.as_deref())?;

    match cli.command {
        Commands::Normalize { file } => {
            let boundary = boundary_value(read_input(file.as_deref())?);
            let response = normalize_response(&boundary)?;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        Commands::Preview {
            file,
            lat,
            lng,
            width,
            height,
            max_zoom,
        } => {
            let request = PreviewRequest {
                boundary: boundary_value(read_input(file.as_deref())?),
                manual_lat: lat.map_or(Value::Null, Value::from),
                manual_lng: lng.map_or(Value::Null, Value::from),
                viewport: width.zip(height).map(|(width_px, height_px)| ViewportSize {
                    width_px,
                    height_px,
                    max_zoom,
                }),
            };
            let response = preview_response(&request, &defaults);
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        Commands::Audit { file, json } => {
            let contents = std::fs::read_to_string(&file)?;
            let records: Vec<StoredBoundary> = serde_json::from_str(&contents)?;
            log::info!("Loaded {} records from {}", records.len(), file.display());

            let progress = AuditProgress::new(&multi, "Auditing boundaries");
            let report = audit_boundaries(&records, &progress);

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{:<12} {:>8} {:>14}", "LEVEL", "TOTAL", "WITH BOUNDARY");
                println!("{}", "-".repeat(36));
                for (level, counts) in &report.by_level {
                    let label: &str = level.as_ref();
                    println!(
                        "{label:<12} {:>8} {:>14}",
                        counts.total, counts.with_boundary
                    );
                }
                println!();
                for (reason, count) in &report.by_reason {
                    println!("{reason:<20} {count}");
                }
                for issue in &report.issues {
                    println!(
                        "  {} {} ({}): {}",
                        issue.level,
                        issue.id,
                        issue.name.as_deref().unwrap_or("unnamed"),
                        issue.detail
                    );
                }
            }
        }
        Commands::Serve => {
            actix_web::rt::System::new().block_on(sector_map_server::run_server(defaults))?;
        }
    }

    Ok(())
}

/// Reads boundary text from `file`, or from stdin when no file is given.
fn read_input(file: Option<&Path>) -> std::io::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Wraps raw boundary text so blank input reads as a missing boundary.
fn boundary_value(text: String) -> Value {
    if text.trim().is_empty() {
        Value::Null
    } else {
        Value::String(text)
    }
}
