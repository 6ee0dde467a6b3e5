//! Core data types for the weather table generator.
//!
//! All of these are built once during the parse phase and read-only
//! afterwards; the diagnostic collector is the only structure that keeps
//! mutating past construction.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Prefix of the declaration-side macro names.
pub const WEATHER_ID_PREFIX: &str = "WEATHER_ID_";

/// Prefix of the engine-facing map macro names.
pub const MAP_PREFIX: &str = "MAP_";

/// Prefix of the behavior table labels.
pub const WEATHER_TABLE_PREFIX: &str = "WeatherTable_";

/// One accepted declaration line: a map bound to a weather cluster.
///
/// `weather_id` and `map_id` are two views of the same real-world map and
/// stay in lockstep (`map_id` is derived by swapping the macro prefix).
/// `cluster_number` is -1 when the digit could not be decoded; the record
/// is still kept so the report shows it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Association {
    pub map_id: String,
    pub weather_id: String,
    pub cluster_id: String,
    pub region_letter: char,
    pub cluster_number: i32,
}

/// Packed physical coordinates of a map, as the catalog defines them:
/// `num` in the low byte, `group` shifted into the high byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionCoord {
    pub group: u16,
    pub num: u16,
}

/// Authoritative map identifier -> coordinates lookup. Sorted keys give
/// the validator its deterministic iteration order for free.
pub type RegionCatalog = BTreeMap<String, RegionCoord>;

/// Cluster ids that have a concrete behavior table defined.
pub type ClusterTables = BTreeSet<String>;

/// Sort key for cluster ids: region letter, then cluster number.
///
/// Cluster ids are always `<uppercase letter><digit>` by the time they get
/// here, so this matches plain string order, but it is the single ordering
/// definition shared by the grouper and the validator.
pub fn cluster_sort_key(cluster_id: &str) -> (char, u32) {
    let mut chars = cluster_id.chars();
    let letter = chars.next().unwrap_or('\0');
    let number = chars.as_str().parse::<u32>().unwrap_or(0);
    (letter, number)
}
