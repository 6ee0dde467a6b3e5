//! Audit report emitter.
//!
//! Human-readable companion to the packed table: names the three consumed
//! sources, lists every cluster with its members and their catalog-resolved
//! coordinates, then repeats every accumulated diagnostic verbatim in the
//! order it was recorded. A map the catalog does not know renders with `?`
//! coordinates, mirroring the validator's finding.

use std::path::Path;

use crate::diagnostics::Diagnostics;
use crate::grouper::ClusterGroup;
use crate::model::RegionCatalog;

pub fn render_report(
    groups: &[ClusterGroup],
    catalog: &RegionCatalog,
    diags: &Diagnostics,
    declarations_path: &Path,
    catalog_path: &Path,
    tables_path: &Path,
) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("Weather System Report".to_string());
    lines.push("=====================".to_string());
    lines.push(String::new());
    lines.push(format!("Source: {}", declarations_path.display()));
    lines.push(format!("Map groups: {}", catalog_path.display()));
    lines.push(format!("Weather tables: {}", tables_path.display()));
    lines.push(String::new());
    lines.push("Clusters and maps:".to_string());
    lines.push("------------------".to_string());
    lines.push(String::new());

    for group in groups {
        lines.push(format!("Cluster {}:", group.cluster_id));
        for assoc in &group.members {
            let (group_str, num_str) = match catalog.get(&assoc.map_id) {
                Some(coord) => (coord.group.to_string(), coord.num.to_string()),
                None => ("?".to_string(), "?".to_string()),
            };
            lines.push(format!(
                "  {}  (group={}, num={})  <- {}",
                assoc.map_id, group_str, num_str, assoc.weather_id
            ));
        }
        lines.push(String::new());
    }

    lines.push(String::new());
    lines.push("Warnings:".to_string());
    lines.push("---------".to_string());
    if diags.is_empty() {
        lines.push("None.".to_string());
    } else {
        for message in diags.messages() {
            lines.push(format!("- {message}"));
        }
    }
    lines.push(String::new());

    lines.join("\n")
}
