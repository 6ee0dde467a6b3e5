//! weather-gen CLI
//!
//! Usage:
//!   weather-gen --declarations data/weather_ids.inc \
//!               --catalog include/constants/map_groups.h \
//!               --tables data/weather_tables.inc \
//!               --out-table data/weather_ids.s \
//!               --out-report data/maps/weather/weather_report.txt
//!
//! Exits non-zero only when a mandatory input is missing or an artifact
//! cannot be written; source inconsistencies are warnings, counted on the
//! final status line and listed in the report.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use weather_gen::{run, GenConfig};

#[derive(Parser)]
#[command(name = "weather-gen")]
#[command(about = "Generate the packed map weather table and its audit report")]
struct Cli {
    /// Weather id declaration include (mandatory input)
    #[arg(long, value_name = "FILE")]
    declarations: PathBuf,

    /// Map catalog header defining MAP_* coordinates (mandatory input)
    #[arg(long, value_name = "FILE")]
    catalog: PathBuf,

    /// Weather behavior table source; validation degrades if absent
    #[arg(long, value_name = "FILE")]
    tables: PathBuf,

    /// Where to write the packed table artifact
    #[arg(long, value_name = "FILE")]
    out_table: PathBuf,

    /// Where to write the audit report
    #[arg(long, value_name = "FILE")]
    out_report: PathBuf,

    /// Also dump the run summary and diagnostics as JSON
    #[arg(long, value_name = "FILE")]
    diagnostics_json: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cfg = GenConfig {
        declarations: cli.declarations,
        catalog: cli.catalog,
        tables: cli.tables,
        out_table: cli.out_table,
        out_report: cli.out_report,
    };

    let summary = run(&cfg).context("weather table generation failed")?;

    if let Some(path) = &cli.diagnostics_json {
        let json = serde_json::to_string_pretty(&summary)
            .context("failed to serialize run summary")?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }

    if summary.diagnostics.is_empty() {
        tracing::info!("Completed with no warnings.");
    } else {
        tracing::info!("Completed with {} warning(s).", summary.diagnostic_count());
    }

    Ok(())
}
