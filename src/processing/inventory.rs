//! Builds every index from one snapshot, in dependency order.

use super::compute::{NodeIndex, PortIndex, VolumeIndex};
use super::networks::{attach_subnets, NetworkIndex};
use super::security_groups::{SecurityGroupDraft, SecurityGroupIndex};
use crate::config::Config;
use crate::error::{ResolvePolicy, Result};
use crate::models::{decode_record, decode_records, RawProject, Snapshot, Tenant};

/// Resolution policy per kind of cross-reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvePolicies {
    pub security_groups: ResolvePolicy,
    pub subnets: ResolvePolicy,
    pub volumes: ResolvePolicy,
}

impl Default for ResolvePolicies {
    /// Rule references must resolve. Subnets of filtered shared networks and
    /// volumes racing server deletion are skipped with a warning.
    fn default() -> Self {
        ResolvePolicies {
            security_groups: ResolvePolicy::Strict,
            subnets: ResolvePolicy::Skip,
            volumes: ResolvePolicy::Skip,
        }
    }
}

impl ResolvePolicies {
    pub fn strict() -> Self {
        ResolvePolicies {
            security_groups: ResolvePolicy::Strict,
            subnets: ResolvePolicy::Strict,
            volumes: ResolvePolicy::Strict,
        }
    }
}

/// The cross-referenced inventory of one tenant.
#[derive(Debug)]
pub struct Inventory {
    pub tenant: Tenant,
    pub security_groups: SecurityGroupIndex,
    pub networks: NetworkIndex,
    pub ports: PortIndex,
    pub nodes: NodeIndex,
    pub volumes: VolumeIndex,
}

/// Decode and index a snapshot.
///
/// Subnets are attached only once networks are indexed, volumes are resolved
/// only once nodes are indexed, and rule references only once every group is
/// indexed.
pub fn build_inventory(
    snapshot: Snapshot,
    config: &Config,
    policies: ResolvePolicies,
) -> Result<Inventory> {
    let Snapshot {
        project,
        security_groups,
        networks,
        subnets,
        ports,
        servers,
        volumes,
    } = snapshot;

    let project: RawProject = decode_record("project", project)?;
    let tenant = Tenant::new(project, config)?;
    log::info!("building inventory for tenant '{}'", tenant.name());

    let security_groups =
        SecurityGroupDraft::build(decode_records("security_groups", security_groups)?)?
            .resolve(policies.security_groups)?;

    let mut networks = NetworkIndex::build(decode_records("networks", networks)?)?;
    attach_subnets(
        &mut networks,
        decode_records("subnets", subnets)?,
        policies.subnets,
    )?;

    let ports = PortIndex::build(decode_records("ports", ports)?)?;
    let nodes = NodeIndex::build(decode_records("servers", servers)?)?;
    let volumes = VolumeIndex::build(
        decode_records("volumes", volumes)?,
        &nodes,
        policies.volumes,
    )?;

    Ok(Inventory {
        tenant,
        security_groups,
        networks,
        ports,
        nodes,
        volumes,
    })
}
