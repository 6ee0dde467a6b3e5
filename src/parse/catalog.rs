//! Region catalog parser.
//!
//! The catalog header defines every valid map as a packed coordinate:
//!
//! ```text
//! #define MAP_ROUTE28 (13 | (43 << 8))
//! ```
//!
//! where the first literal is the in-group index and the second the group
//! index. The catalog legitimately contains plenty of other macros; those
//! are skipped without comment. Duplicate map names are last-write-wins,
//! also without comment — the catalog is the authoritative source and is
//! trusted in a way the hand-maintained declaration list is not.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::diagnostics::{DiagnosticCode, Diagnostics};
use crate::model::{RegionCatalog, RegionCoord, MAP_PREFIX};

/// `#define MAP_<name> (<num> | (<group> << 8))`.
static MAP_DEFINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#define\s+(MAP_\w+)\s+\((\d+)\s*\|\s*\((\d+)\s*<<\s*8\)\s*\)").unwrap()
});

/// Parse the catalog source into a map identifier -> coordinate lookup.
pub fn parse_catalog(source: &str, path: &Path, diags: &mut Diagnostics) -> RegionCatalog {
    let mut catalog = RegionCatalog::new();

    for (lineno, line) in source.lines().enumerate() {
        let lineno = lineno + 1;
        let line = line.trim();
        if !line.starts_with("#define") {
            continue;
        }
        let Some(caps) = MAP_DEFINE_RE.captures(line) else {
            continue;
        };

        let name = &caps[1];
        let (num, group) = match (caps[2].parse::<u16>(), caps[3].parse::<u16>()) {
            (Ok(num), Ok(group)) => (num, group),
            _ => {
                diags.warn(
                    DiagnosticCode::BadCatalogValue,
                    format!(
                        "{}:{}: could not parse group/num for {}",
                        path.display(),
                        lineno,
                        name
                    ),
                );
                continue;
            }
        };

        catalog.insert(name.to_string(), RegionCoord { group, num });
    }

    if catalog.is_empty() {
        diags.warn(
            DiagnosticCode::EmptyCatalog,
            format!(
                "No {MAP_PREFIX}* definitions parsed from {}",
                path.display()
            ),
        );
    }

    catalog
}
