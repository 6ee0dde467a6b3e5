//! Cross-reference validator.
//!
//! Four independent checks over the parsed inputs, run in a fixed order so
//! the report reads the same on every run:
//!
//! 1. every declared map must exist in the catalog;
//! 2. every catalog map should have a weather declaration;
//! 3. every defined cluster table should be used by some map;
//! 4. every used cluster should have a table defined.
//!
//! Checks 3 and 4 only run when a table source was actually parsed. No
//! check ever halts the pipeline; findings go to the diagnostic collector
//! and nowhere else.

use std::collections::HashSet;
use std::path::Path;

use crate::diagnostics::{DiagnosticCode, Diagnostics};
use crate::model::{
    cluster_sort_key, Association, ClusterTables, RegionCatalog, MAP_PREFIX, WEATHER_TABLE_PREFIX,
};

pub fn validate(
    associations: &[Association],
    catalog: &RegionCatalog,
    tables: &ClusterTables,
    declarations_path: &Path,
    catalog_path: &Path,
    diags: &mut Diagnostics,
) {
    let mut used_clusters: HashSet<&str> = HashSet::new();
    let mut used_maps: HashSet<&str> = HashSet::new();

    // 1. Declared maps must exist in the catalog.
    for assoc in associations {
        used_clusters.insert(&assoc.cluster_id);
        used_maps.insert(&assoc.map_id);
        if !catalog.contains_key(&assoc.map_id) {
            diags.warn(
                DiagnosticCode::UnknownMap,
                format!(
                    "{} (from {}) does not exist in {}",
                    assoc.map_id,
                    assoc.weather_id,
                    catalog_path.display()
                ),
            );
        }
    }

    // 2. Catalog maps with no weather declaration, in identifier order.
    for map_name in catalog.keys() {
        if !map_name.starts_with(MAP_PREFIX) {
            continue;
        }
        if !used_maps.contains(map_name.as_str()) {
            diags.warn(
                DiagnosticCode::MapWithoutWeather,
                format!(
                    "{} exists in {} but has no WEATHER_ID entry in {}",
                    map_name,
                    catalog_path.display(),
                    declarations_path.display()
                ),
            );
        }
    }

    if tables.is_empty() {
        return;
    }

    // 3. Tables defined but unused, in cluster order.
    let mut unused: Vec<&str> = tables
        .iter()
        .map(String::as_str)
        .filter(|cid| !used_clusters.contains(*cid))
        .collect();
    unused.sort_by_key(|cid| cluster_sort_key(cid));
    for cid in unused {
        diags.warn(
            DiagnosticCode::UnusedCluster,
            format!("Cluster {cid} has a {WEATHER_TABLE_PREFIX}{cid} table but no maps assigned"),
        );
    }

    // 4. Clusters used by maps but with no table, in cluster order.
    let mut missing: Vec<&str> = used_clusters
        .iter()
        .copied()
        .filter(|cid| !tables.contains(*cid))
        .collect();
    missing.sort_by_key(|cid| cluster_sort_key(cid));
    for cid in missing {
        diags.warn(
            DiagnosticCode::MissingClusterTable,
            format!("Cluster {cid} is used by maps but has no {WEATHER_TABLE_PREFIX}{cid} table defined"),
        );
    }
}
