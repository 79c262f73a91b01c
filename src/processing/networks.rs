//! Network indexing and subnet attachment.

use super::index::IdIndex;
use crate::error::{InventoryError, ResolvePolicy, Result};
use crate::models::{Network, RawNetwork, RawSubnet, Subnet};
use std::collections::HashSet;

/// Non-shared networks keyed by id.
#[derive(Debug, Default)]
pub struct NetworkIndex {
    networks: IdIndex<Network>,
}

impl NetworkIndex {
    /// Index every network that is not shared with other projects.
    pub fn build(raw_networks: Vec<RawNetwork>) -> Result<NetworkIndex> {
        let total = raw_networks.len();
        let mut networks = IdIndex::new();
        for raw in raw_networks.into_iter().filter(|n| !n.shared) {
            networks.insert("networks", Network::new(raw))?;
        }
        log::info!(
            "indexed {} networks ({} shared filtered out)",
            networks.len(),
            total - networks.len()
        );
        Ok(NetworkIndex { networks })
    }

    pub fn get(&self, id: &str) -> Option<&Network> {
        self.networks.get(id)
    }

    pub fn len(&self) -> usize {
        self.networks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Network> {
        self.networks.iter()
    }
}

/// Outcome counts of [`attach_subnets`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AttachReport {
    pub attached: usize,
    pub skipped: usize,
    /// Subnets that replaced an earlier one of the same family.
    pub overwritten: usize,
}

/// Attach each subnet to its owning network, in place.
///
/// A subnet whose network is not indexed (for example one on a shared
/// network) is handled by `policy`. Within a network the last subnet of a
/// family wins. A subnet id seen twice is malformed input.
pub fn attach_subnets(
    networks: &mut NetworkIndex,
    raw_subnets: Vec<RawSubnet>,
    policy: ResolvePolicy,
) -> Result<AttachReport> {
    let mut report = AttachReport::default();
    let mut seen = HashSet::new();
    for raw in raw_subnets {
        if !seen.insert(raw.id.clone()) {
            return Err(InventoryError::malformed(
                "subnets",
                raw.id,
                "duplicate id in collection",
            ));
        }
        let subnet = Subnet::from(raw);
        let Some(network) = networks.networks.get_mut(&subnet.network_id) else {
            policy.on_dangling(InventoryError::dangling(
                "subnet network",
                &subnet.id,
                &subnet.network_id,
            ))?;
            report.skipped += 1;
            continue;
        };
        let (subnet_id, version) = (subnet.id.clone(), subnet.ip_version);
        if let Some(previous) = network.attach(subnet) {
            log::warn!(
                "network '{}' already had IPv{version} subnet {}, replaced by {subnet_id}",
                network.name,
                previous.id
            );
            report.overwritten += 1;
        }
        report.attached += 1;
    }
    log::info!(
        "attached {} subnets ({} skipped, {} overwritten)",
        report.attached,
        report.skipped,
        report.overwritten
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{decode_records, IpVersion};
    use serde_json::json;

    fn networks() -> NetworkIndex {
        let raw = decode_records(
            "networks",
            vec![
                json!({ "id": "n1", "name": "private", "shared": false }),
                json!({ "id": "n2", "name": "public", "shared": true }),
                json!({ "id": "n3", "name": "legacy", "shared": "False" }),
            ],
        )
        .unwrap();
        NetworkIndex::build(raw).unwrap()
    }

    fn subnet(id: &str, network_id: &str, cidr: &str, version: u8) -> RawSubnet {
        decode_records::<RawSubnet>(
            "subnets",
            vec![json!({
                "id": id, "name": id, "cidr": cidr,
                "ip_version": version, "network_id": network_id
            })],
        )
        .unwrap()
        .remove(0)
    }

    #[test]
    fn test_shared_networks_filtered() {
        let index = networks();
        let ids: Vec<&str> = index.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["n1", "n3"]);
        assert!(index.get("n2").is_none());
    }

    #[test]
    fn test_attach_by_family() {
        let mut index = networks();
        let report = attach_subnets(
            &mut index,
            vec![
                subnet("s4", "n1", "10.0.0.0/24", 4),
                subnet("s6", "n1", "fd00::/64", 6),
            ],
            ResolvePolicy::Strict,
        )
        .unwrap();
        assert_eq!(report.attached, 2);
        let network = index.get("n1").unwrap();
        assert_eq!(network.ipv4.as_ref().unwrap().id, "s4");
        assert_eq!(network.ipv6.as_ref().unwrap().ip_version, IpVersion::V6);
    }

    #[test]
    fn test_subnet_on_shared_network_skipped() {
        let mut index = networks();
        let report = attach_subnets(
            &mut index,
            vec![subnet("s-pub", "n2", "172.24.4.0/24", 4)],
            ResolvePolicy::Skip,
        )
        .unwrap();
        assert_eq!(report.skipped, 1);
        assert!(index
            .iter()
            .all(|n| n.ipv4.as_ref().map(|s| s.id.as_str()) != Some("s-pub")));
    }

    #[test]
    fn test_subnet_on_unknown_network_strict() {
        let mut index = networks();
        let err = attach_subnets(
            &mut index,
            vec![subnet("s-x", "n9", "10.9.0.0/24", 4)],
            ResolvePolicy::Strict,
        )
        .unwrap_err();
        assert!(matches!(err, InventoryError::DanglingReference { .. }));
    }

    #[test]
    fn test_same_family_last_write_wins() {
        let mut index = networks();
        let report = attach_subnets(
            &mut index,
            vec![
                subnet("first", "n3", "10.3.0.0/24", 4),
                subnet("second", "n3", "10.3.1.0/24", 4),
            ],
            ResolvePolicy::Strict,
        )
        .unwrap();
        assert_eq!(report.overwritten, 1);
        let network = index.get("n3").unwrap();
        assert_eq!(network.ipv4.as_ref().unwrap().id, "second");
    }

    #[test]
    fn test_duplicate_subnet_id() {
        let mut index = networks();
        let err = attach_subnets(
            &mut index,
            vec![
                subnet("s1", "n1", "10.0.0.0/24", 4),
                subnet("s1", "n1", "10.0.1.0/24", 4),
            ],
            ResolvePolicy::Strict,
        )
        .unwrap_err();
        assert!(
            matches!(&err, InventoryError::MalformedInput { collection, path, .. }
                if collection == "subnets" && path == "s1"),
            "{err}"
        );
    }
}
