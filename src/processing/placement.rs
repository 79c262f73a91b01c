//! Next free node slot of a cluster.
//!
//! Cluster nodes are named `<vnf>_<project>_<cluster>_<index>`.

use std::collections::HashSet;

/// Smallest non-negative index not yet used by a node of the cluster.
///
/// The index of a node is the text after its last `_`. Names without the
/// prefix, and indexes that are not numbers, are ignored.
pub fn next_free_slot<'a, I>(cluster_prefix: &str, names: I) -> u32
where
    I: IntoIterator<Item = &'a str>,
{
    let used: HashSet<u32> = names
        .into_iter()
        .filter(|name| name.starts_with(cluster_prefix))
        .filter_map(|name| name.rsplit('_').next())
        .filter_map(|index| index.parse().ok())
        .collect();
    log::debug!("cluster '{cluster_prefix}' uses slots {used:?}");

    let mut slot = 0;
    while used.contains(&slot) {
        slot += 1;
    }
    slot
}
