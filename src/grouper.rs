//! Deterministic grouping of associations by cluster.
//!
//! This is the single ordering authority for both emitters: clusters sorted
//! by (region letter, cluster number), members sorted by map identifier.
//! The emitters render what they are given and never re-sort.

use std::collections::HashMap;

use crate::model::{cluster_sort_key, Association};

/// One cluster and its member associations, both in final output order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClusterGroup {
    pub cluster_id: String,
    pub region_letter: char,
    pub members: Vec<Association>,
}

/// Partition associations by cluster id and impose the output ordering.
///
/// Duplicate declarations are kept: every input association appears exactly
/// once in the result. The member sort is stable, so duplicates of the same
/// map identifier stay in source order.
pub fn group_associations(associations: &[Association]) -> Vec<ClusterGroup> {
    let mut by_cluster: HashMap<&str, Vec<Association>> = HashMap::new();
    for assoc in associations {
        by_cluster
            .entry(&assoc.cluster_id)
            .or_default()
            .push(assoc.clone());
    }

    let mut cluster_ids: Vec<&str> = by_cluster.keys().copied().collect();
    cluster_ids.sort_by_key(|cid| cluster_sort_key(cid));

    cluster_ids
        .into_iter()
        .map(|cid| {
            let mut members = by_cluster.remove(cid).unwrap_or_default();
            members.sort_by(|a, b| a.map_id.cmp(&b.map_id));
            ClusterGroup {
                cluster_id: cid.to_string(),
                region_letter: cid.chars().next().unwrap_or('\0'),
                members,
            }
        })
        .collect()
}
