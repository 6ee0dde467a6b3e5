//! Weather id declaration parser.
//!
//! Accepts lines of the shape:
//!
//! ```text
//! #define WEATHER_ID_ROUTE28              Y0
//! ```
//!
//! and derives the engine map macro (`MAP_ROUTE28`) from the weather id.
//! Duplicate identifiers are diagnosed but the records are kept — the
//! report is the place to sort that out, not the parser.

use std::collections::HashSet;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::diagnostics::{DiagnosticCode, Diagnostics};
use crate::model::{Association, MAP_PREFIX, WEATHER_ID_PREFIX};

/// `#define <macro> <letter><digit>`, trailing whitespace only.
static DEFINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#define\s+(\w+)\s+([A-Z][0-9])\s*$").unwrap());

/// Parse the declaration source into associations, in source order.
pub fn parse_declarations(source: &str, path: &Path, diags: &mut Diagnostics) -> Vec<Association> {
    let mut associations = Vec::new();
    let mut seen_weather_ids: HashSet<String> = HashSet::new();
    let mut seen_maps: HashSet<String> = HashSet::new();

    for (lineno, line) in source.lines().enumerate() {
        let lineno = lineno + 1;
        let line = line.trim();
        if !line.starts_with("#define") {
            continue;
        }

        let Some(caps) = DEFINE_RE.captures(line) else {
            // A #define with some other value shape; not ours.
            continue;
        };

        let macro_name = &caps[1];
        let cluster_id = caps[2].to_string();
        let Some(map_suffix) = macro_name.strip_prefix(WEATHER_ID_PREFIX) else {
            continue;
        };

        let weather_id = macro_name.to_string();
        let map_id = format!("{MAP_PREFIX}{map_suffix}");

        let region_letter = cluster_id.chars().next().unwrap_or('\0');
        let cluster_number = match cluster_id[1..].parse::<i32>() {
            Ok(n) => n,
            Err(_) => {
                diags.warn(
                    DiagnosticCode::InvalidClusterId,
                    format!(
                        "{}:{}: invalid cluster id '{}' for {}",
                        path.display(),
                        lineno,
                        cluster_id,
                        weather_id
                    ),
                );
                -1
            }
        };

        if !seen_weather_ids.insert(weather_id.clone()) {
            diags.warn(
                DiagnosticCode::DuplicateWeatherId,
                format!(
                    "{}:{}: duplicate WEATHER_ID macro {}",
                    path.display(),
                    lineno,
                    weather_id
                ),
            );
        }
        if !seen_maps.insert(map_id.clone()) {
            diags.warn(
                DiagnosticCode::DuplicateMapEntry,
                format!(
                    "{}:{}: duplicate map entry for {}",
                    path.display(),
                    lineno,
                    map_id
                ),
            );
        }

        associations.push(Association {
            map_id,
            weather_id,
            cluster_id,
            region_letter,
            cluster_number,
        });
    }

    if associations.is_empty() && !source.is_empty() {
        diags.warn(
            DiagnosticCode::NoDeclarations,
            format!(
                "No {WEATHER_ID_PREFIX}* definitions with cluster IDs found in {}",
                path.display()
            ),
        );
    }

    associations
}
