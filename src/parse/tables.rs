//! Cluster table label parser.
//!
//! The behavior table source defines one assembly label per cluster:
//!
//! ```text
//! WeatherTable_Y0:
//! ```
//!
//! Unlike the other two sources, this one is allowed to be absent; the
//! cross-reference checks that need it are simply skipped (with a
//! diagnostic saying so).

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::diagnostics::{DiagnosticCode, Diagnostics};
use crate::model::{ClusterTables, WEATHER_TABLE_PREFIX};

/// `WeatherTable_<letter><digit>:` with nothing else on the line.
static TABLE_LABEL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^WeatherTable_([A-Z][0-9]):\s*$").unwrap());

/// Parse the behavior table source into the set of defined cluster ids.
///
/// `source` is `None` when the file does not exist on disk.
pub fn parse_tables(source: Option<&str>, path: &Path, diags: &mut Diagnostics) -> ClusterTables {
    let Some(source) = source else {
        diags.warn(
            DiagnosticCode::MissingTableSource,
            format!(
                "{} not found; cluster table validation will be limited",
                path.display()
            ),
        );
        return ClusterTables::new();
    };

    let mut tables = ClusterTables::new();
    for line in source.lines() {
        if let Some(caps) = TABLE_LABEL_RE.captures(line.trim()) {
            tables.insert(caps[1].to_string());
        }
    }

    if tables.is_empty() {
        diags.warn(
            DiagnosticCode::NoTableLabels,
            format!(
                "No {WEATHER_TABLE_PREFIX}* labels found in {}",
                path.display()
            ),
        );
    }

    tables
}
