//! The report document. Field declaration order is the output order.

use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub tenant: TenantBlock,
    pub security_groups: Vec<String>,
    pub external_security_group_rules: Vec<RuleEntry>,
    pub internal_security_group_rules: Vec<RuleEntry>,
    pub networks: Vec<NetworkEntry>,
    pub nodes: Vec<NodeEntry>,
    pub volumes: Vec<VolumeEntry>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct TenantBlock {
    pub name: String,
    pub description: String,
    pub password: String,
    pub cloud: String,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RuleMode {
    Cidr,
    Group,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RuleEntry {
    /// Name of the group owning the rule.
    pub group: String,
    pub direction: String,
    pub ethertype: String,
    pub protocol: Option<String>,
    pub min: Option<u16>,
    pub max: Option<u16>,
    pub mode: RuleMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_ip_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_group: Option<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetEntry {
    pub cidr: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct NetworkEntry {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv4: Option<SubnetEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv6: Option<SubnetEntry>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct NicEntry {
    #[serde(rename = "port-name")]
    pub port_name: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct NodeEntry {
    pub name: String,
    pub availability_zone: Option<String>,
    pub flavor: Option<String>,
    pub image: Option<String>,
    pub key_name: Option<String>,
    pub nics: Vec<NicEntry>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct VolumeEntry {
    pub name: String,
    pub server: Option<String>,
    #[serde(rename = "type")]
    pub volume_type: Option<String>,
    pub size: u64,
    pub device: Option<String>,
}
