use super::de;
use super::Identified;
use serde::{Deserialize, Serialize};

/// Port record as returned by the networking service.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RawPort {
    pub id: String,
    pub name: String,
    pub device_id: String,
    pub network_id: String,
    #[serde(
        default,
        alias = "security_group_ids",
        deserialize_with = "de::list_or_null"
    )]
    pub security_groups: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Port {
    pub id: String,
    pub name: String,
    pub device_id: String,
    pub network_id: String,
    /// Every security group id of the port, in source order.
    pub security_groups: Vec<String>,
}

impl Port {
    /// The first security group of the port, if any.
    pub fn primary_security_group(&self) -> Option<&str> {
        self.security_groups.first().map(String::as_str)
    }
}

impl From<RawPort> for Port {
    fn from(raw: RawPort) -> Self {
        Port {
            id: raw.id,
            name: raw.name,
            device_id: raw.device_id,
            network_id: raw.network_id,
            security_groups: raw.security_groups,
        }
    }
}

impl Identified for Port {
    fn id(&self) -> &str {
        &self.id
    }
}
