//! Projection of the resolved indexes into a [`Document`].
//!
//! No lookups happen here; every cross-reference was resolved while building.

use super::document::*;
use crate::models::{Network, Node, SecurityGroup, SecurityGroupRule, Subnet, Tenant, Volume};
use crate::processing::{Inventory, NetworkIndex, NodeIndex, SecurityGroupIndex, VolumeIndex};

/// Render the indexes in the fixed section order.
pub fn render(
    tenant: &Tenant,
    security_groups: &SecurityGroupIndex,
    networks: &NetworkIndex,
    nodes: &NodeIndex,
    volumes: &VolumeIndex,
) -> Document {
    log::info!("#Start render()");
    Document {
        tenant: tenant_block(tenant),
        security_groups: security_groups.iter().map(|g| g.name.clone()).collect(),
        external_security_group_rules: security_groups
            .external_rules()
            .map(|(group, rule)| rule_entry(group, rule))
            .collect(),
        internal_security_group_rules: security_groups
            .internal_rules()
            .map(|(group, rule)| rule_entry(group, rule))
            .collect(),
        networks: networks.iter().map(network_entry).collect(),
        nodes: nodes.iter().map(node_entry).collect(),
        volumes: volumes.iter().map(volume_entry).collect(),
    }
}

/// Render a whole [`Inventory`].
pub fn render_inventory(inventory: &Inventory) -> Document {
    render(
        &inventory.tenant,
        &inventory.security_groups,
        &inventory.networks,
        &inventory.nodes,
        &inventory.volumes,
    )
}

fn tenant_block(tenant: &Tenant) -> TenantBlock {
    TenantBlock {
        name: tenant.name().to_string(),
        description: tenant.description().to_string(),
        password: tenant.password().to_string(),
        cloud: tenant.cloud().to_string(),
    }
}

fn rule_entry(group: &SecurityGroup, rule: &SecurityGroupRule) -> RuleEntry {
    let remote_ip_prefix = rule.remote_ip_prefix().map(str::to_string);
    let remote_group = rule.remote_group_name().map(str::to_string);
    RuleEntry {
        group: group.name.clone(),
        direction: rule.direction.clone(),
        ethertype: rule.ethertype.clone(),
        protocol: rule.protocol.clone(),
        min: rule.port_range_min,
        max: rule.port_range_max,
        mode: if remote_ip_prefix.is_some() {
            RuleMode::Cidr
        } else {
            RuleMode::Group
        },
        remote_ip_prefix,
        remote_group,
    }
}

fn network_entry(network: &Network) -> NetworkEntry {
    let subnet = |s: &Subnet| SubnetEntry {
        cidr: s.cidr.clone(),
    };
    NetworkEntry {
        name: network.name.clone(),
        ipv4: network.ipv4.as_ref().map(subnet),
        ipv6: network.ipv6.as_ref().map(subnet),
    }
}

fn node_entry(node: &Node) -> NodeEntry {
    NodeEntry {
        name: node.name.clone(),
        availability_zone: node.availability_zone.clone(),
        flavor: node.flavor.clone(),
        image: node.image.clone(),
        key_name: node.key_name.clone(),
        nics: node
            .nics
            .iter()
            .map(|nic| NicEntry {
                port_name: nic.clone(),
            })
            .collect(),
    }
}

fn volume_entry(volume: &Volume) -> VolumeEntry {
    VolumeEntry {
        name: volume.name.clone(),
        server: volume.attachment.as_ref().map(|a| a.server.clone()),
        volume_type: volume.volume_type.clone(),
        size: volume.size,
        device: volume.attachment.as_ref().and_then(|a| a.device.clone()),
    }
}
