//! Networks and the subnets attached to them.

use super::de;
use super::Identified;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Network record as returned by the networking service.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RawNetwork {
    pub id: String,
    pub name: String,
    /// Normalized to a boolean; the CLI may print it as `"True"`/`"False"`.
    #[serde(deserialize_with = "de::flag")]
    pub shared: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RawSubnet {
    pub id: String,
    pub name: String,
    pub cidr: String,
    pub ip_version: IpVersion,
    pub network_id: String,
}

/// Address family of a subnet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IpVersion {
    V4,
    V6,
}

impl Serialize for IpVersion {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        match self {
            IpVersion::V4 => serializer.serialize_u8(4),
            IpVersion::V6 => serializer.serialize_u8(6),
        }
    }
}

impl<'de> Deserialize<'de> for IpVersion {
    fn deserialize<D>(deserializer: D) -> Result<IpVersion, D::Error>
    where
        D: Deserializer<'de>,
    {
        match de::number(deserializer)? {
            4 => Ok(IpVersion::V4),
            6 => Ok(IpVersion::V6),
            other => Err(D::Error::custom(format!("invalid ip_version: {other}"))),
        }
    }
}

impl fmt::Display for IpVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IpVersion::V4 => write!(f, "4"),
            IpVersion::V6 => write!(f, "6"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subnet {
    pub id: String,
    pub name: String,
    pub cidr: String,
    pub ip_version: IpVersion,
    pub network_id: String,
}

impl From<RawSubnet> for Subnet {
    fn from(raw: RawSubnet) -> Self {
        Subnet {
            id: raw.id,
            name: raw.name,
            cidr: raw.cidr,
            ip_version: raw.ip_version,
            network_id: raw.network_id,
        }
    }
}

/// A non-shared network with at most one subnet per address family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Network {
    pub id: String,
    pub name: String,
    pub ipv4: Option<Subnet>,
    pub ipv6: Option<Subnet>,
}

impl Network {
    pub fn new(raw: RawNetwork) -> Network {
        Network {
            id: raw.id,
            name: raw.name,
            ipv4: None,
            ipv6: None,
        }
    }

    /// Put a subnet into the slot of its family and return what it replaced.
    pub fn attach(&mut self, subnet: Subnet) -> Option<Subnet> {
        let slot = match subnet.ip_version {
            IpVersion::V4 => &mut self.ipv4,
            IpVersion::V6 => &mut self.ipv6,
        };
        slot.replace(subnet)
    }
}

impl Identified for Network {
    fn id(&self) -> &str {
        &self.id
    }
}
