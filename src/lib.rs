//! weather-gen: map weather table generator
//!
//! Reconciles three human-edited sources — the weather id declaration
//! include, the map catalog header, and the weather behavior table source —
//! and emits the packed `gMapWeatherIds` lookup table plus a plain-text
//! audit report:
//! - Line parsers for the three source shapes
//! - Cross-reference validator (warn-only, never fails the build)
//! - Deterministic grouper shared by both emitters
//! - Table and report emitters
//! - Append-only diagnostic collector threaded through every stage
//!
//! Only a missing mandatory input is fatal; every inconsistency inside the
//! sources becomes a diagnostic and both artifacts are still produced.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

pub mod diagnostics;
pub mod emit;
pub mod grouper;
pub mod model;
pub mod parse;
pub mod validator;

// Re-export commonly used types
pub use diagnostics::{Diagnostic, DiagnosticCode, Diagnostics};
pub use emit::{render_report, render_table};
pub use grouper::{group_associations, ClusterGroup};
pub use model::{Association, ClusterTables, RegionCatalog, RegionCoord};
pub use parse::{parse_catalog, parse_declarations, parse_tables};
pub use validator::validate;

/// Fatal errors. Everything else the pipeline encounters is a diagnostic.
#[derive(Debug, Error)]
pub enum GenError {
    #[error("{role} not found at {}", path.display())]
    MissingInput { role: &'static str, path: PathBuf },

    #[error("failed to read {}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Input and output paths for one generator run.
#[derive(Clone, Debug)]
pub struct GenConfig {
    /// Weather id declaration include (mandatory).
    pub declarations: PathBuf,
    /// Map catalog header (mandatory).
    pub catalog: PathBuf,
    /// Weather behavior table source (optional on disk).
    pub tables: PathBuf,
    /// Output path for the packed table artifact.
    pub out_table: PathBuf,
    /// Output path for the audit report.
    pub out_report: PathBuf,
}

/// What a run produced, plus every diagnostic it accumulated.
#[derive(Debug, Serialize)]
pub struct RunSummary {
    pub association_count: usize,
    pub cluster_count: usize,
    pub diagnostics: Diagnostics,
}

impl RunSummary {
    pub fn diagnostic_count(&self) -> usize {
        self.diagnostics.len()
    }
}

/// Run the full pipeline: parse all three sources, cross-validate, group,
/// and write both artifacts.
///
/// Mandatory inputs are checked before any parsing; the table source being
/// absent only limits validation. Artifacts are always written, diagnostics
/// or not.
pub fn run(cfg: &GenConfig) -> Result<RunSummary, GenError> {
    if !cfg.declarations.is_file() {
        return Err(GenError::MissingInput {
            role: "weather id declarations",
            path: cfg.declarations.clone(),
        });
    }
    if !cfg.catalog.is_file() {
        return Err(GenError::MissingInput {
            role: "map catalog",
            path: cfg.catalog.clone(),
        });
    }

    let declarations_src = read_input(&cfg.declarations)?;
    let catalog_src = read_input(&cfg.catalog)?;
    let tables_src = if cfg.tables.is_file() {
        Some(read_input(&cfg.tables)?)
    } else {
        None
    };

    let mut diags = Diagnostics::new();
    let associations = parse_declarations(&declarations_src, &cfg.declarations, &mut diags);
    let catalog = parse_catalog(&catalog_src, &cfg.catalog, &mut diags);
    let tables = parse_tables(tables_src.as_deref(), &cfg.tables, &mut diags);

    validate(
        &associations,
        &catalog,
        &tables,
        &cfg.declarations,
        &cfg.catalog,
        &mut diags,
    );

    let groups = group_associations(&associations);

    let table_text = render_table(&groups, &cfg.declarations);
    let report_text = render_report(
        &groups,
        &catalog,
        &diags,
        &cfg.declarations,
        &cfg.catalog,
        &cfg.tables,
    );

    write_output(&cfg.out_table, &table_text)?;
    write_output(&cfg.out_report, &report_text)?;

    Ok(RunSummary {
        association_count: associations.len(),
        cluster_count: groups.len(),
        diagnostics: diags,
    })
}

fn read_input(path: &Path) -> Result<String, GenError> {
    fs::read_to_string(path).map_err(|source| GenError::ReadInput {
        path: path.to_path_buf(),
        source,
    })
}

fn write_output(path: &Path, text: &str) -> Result<(), GenError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| GenError::WriteOutput {
                path: path.to_path_buf(),
                source,
            })?;
        }
    }
    fs::write(path, text).map_err(|source| GenError::WriteOutput {
        path: path.to_path_buf(),
        source,
    })
}
