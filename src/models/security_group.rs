//! Security groups and their rules.

use super::de;
use super::Identified;
use crate::error::{InventoryError, Result};
use serde::{Deserialize, Serialize};

/// Security group record as returned by the networking service.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RawSecurityGroup {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// `rules` is the spelling of `openstack security group show`.
    #[serde(alias = "rules", deserialize_with = "de::list_or_null")]
    pub security_group_rules: Vec<RawSecurityGroupRule>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RawSecurityGroupRule {
    pub id: String,
    pub ethertype: String,
    pub direction: String,
    #[serde(default)]
    pub protocol: Option<String>,
    #[serde(default)]
    pub port_range_min: Option<u16>,
    #[serde(default)]
    pub port_range_max: Option<u16>,
    #[serde(default, deserialize_with = "de::non_empty")]
    pub remote_group_id: Option<String>,
    #[serde(default, deserialize_with = "de::non_empty")]
    pub remote_ip_prefix: Option<String>,
}

/// Reference from a rule to another security group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupRef {
    /// Raw id, not yet looked up.
    Unresolved { id: String },
    /// Looked up; `name` is a copy of the target group's name.
    Resolved { id: String, name: String },
}

impl GroupRef {
    pub fn id(&self) -> &str {
        match self {
            GroupRef::Unresolved { id } | GroupRef::Resolved { id, .. } => id,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            GroupRef::Unresolved { .. } => None,
            GroupRef::Resolved { name, .. } => Some(name),
        }
    }
}

/// What a rule matches on the remote side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleRemote {
    Group(GroupRef),
    Prefix(String),
    /// Neither group nor prefix.
    Any,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityGroupRule {
    pub id: String,
    pub ethertype: String,
    pub direction: String,
    pub protocol: Option<String>,
    pub port_range_min: Option<u16>,
    pub port_range_max: Option<u16>,
    pub remote: RuleRemote,
}

impl SecurityGroupRule {
    /// Remote CIDR prefix, for rules classified as external.
    pub fn remote_ip_prefix(&self) -> Option<&str> {
        match &self.remote {
            RuleRemote::Prefix(prefix) => Some(prefix),
            _ => None,
        }
    }

    /// Name of the remote group, once resolved.
    pub fn remote_group_name(&self) -> Option<&str> {
        match &self.remote {
            RuleRemote::Group(group) => group.name(),
            _ => None,
        }
    }
}

impl TryFrom<RawSecurityGroupRule> for SecurityGroupRule {
    type Error = InventoryError;

    fn try_from(raw: RawSecurityGroupRule) -> Result<Self> {
        let remote = match (raw.remote_group_id, raw.remote_ip_prefix) {
            (Some(_), Some(_)) => {
                return Err(InventoryError::malformed(
                    "security_groups",
                    format!("rule {}", raw.id),
                    "rule has both remote_group_id and remote_ip_prefix",
                ))
            }
            (Some(id), None) => RuleRemote::Group(GroupRef::Unresolved { id }),
            (None, Some(prefix)) => RuleRemote::Prefix(prefix),
            (None, None) => RuleRemote::Any,
        };
        Ok(SecurityGroupRule {
            id: raw.id,
            ethertype: raw.ethertype,
            direction: raw.direction,
            protocol: raw.protocol,
            port_range_min: raw.port_range_min,
            port_range_max: raw.port_range_max,
            remote,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityGroup {
    pub id: String,
    pub name: String,
    pub description: String,
    pub rules: Vec<SecurityGroupRule>,
}

impl TryFrom<RawSecurityGroup> for SecurityGroup {
    type Error = InventoryError;

    fn try_from(raw: RawSecurityGroup) -> Result<Self> {
        let rules = raw
            .security_group_rules
            .into_iter()
            .map(SecurityGroupRule::try_from)
            .collect::<Result<Vec<_>>>()?;
        Ok(SecurityGroup {
            id: raw.id,
            name: raw.name,
            description: raw.description.unwrap_or_default(),
            rules,
        })
    }
}

impl Identified for SecurityGroup {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw_rule(value: serde_json::Value) -> RawSecurityGroupRule {
        serde_json::from_value(value).expect("valid rule")
    }

    #[test]
    fn test_rule_remote_classification() {
        let rule = SecurityGroupRule::try_from(raw_rule(json!({
            "id": "r1", "ethertype": "IPv4", "direction": "ingress",
            "protocol": "tcp", "port_range_min": 22, "port_range_max": 22,
            "remote_group_id": null, "remote_ip_prefix": "0.0.0.0/0"
        })))
        .unwrap();
        assert_eq!(rule.remote_ip_prefix(), Some("0.0.0.0/0"));
        assert_eq!(rule.remote_group_name(), None);

        let rule = SecurityGroupRule::try_from(raw_rule(json!({
            "id": "r2", "ethertype": "IPv6", "direction": "egress"
        })))
        .unwrap();
        assert_eq!(rule.remote, RuleRemote::Any);
        assert_eq!(rule.protocol, None);
    }

    #[test]
    fn test_rule_with_both_remotes_is_malformed() {
        let err = SecurityGroupRule::try_from(raw_rule(json!({
            "id": "r3", "ethertype": "IPv4", "direction": "ingress",
            "remote_group_id": "g1", "remote_ip_prefix": "10.0.0.0/8"
        })))
        .unwrap_err();
        assert!(matches!(err, InventoryError::MalformedInput { .. }));
    }

    #[test]
    fn test_cli_rules_alias() {
        let group: RawSecurityGroup = serde_json::from_value(json!({
            "id": "g1", "name": "web", "description": null,
            "rules": [{ "id": "r1", "ethertype": "IPv4", "direction": "egress" }]
        }))
        .unwrap();
        let group = SecurityGroup::try_from(group).unwrap();
        assert_eq!(group.rules.len(), 1);
        assert_eq!(group.description, "");
    }
}
