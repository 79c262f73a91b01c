//! Compute nodes (servers).

use super::de;
use super::Identified;
use serde::{Deserialize, Serialize};

/// Server record as returned by the compute service.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RawServer {
    pub id: String,
    pub name: String,
    #[serde(
        default,
        rename = "OS-EXT-AZ:availability_zone",
        alias = "availability_zone",
        deserialize_with = "de::non_empty"
    )]
    pub availability_zone: Option<String>,
    /// Some SDKs nest the zone under `location`.
    #[serde(default)]
    pub location: Option<RawLocation>,
    pub flavor: NamedRef,
    #[serde(default)]
    pub image: Option<NamedRef>,
    #[serde(default)]
    pub key_name: Option<String>,
    #[serde(default)]
    pub addresses: Option<Addresses>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct RawLocation {
    #[serde(default)]
    pub zone: Option<String>,
}

const NOT_APPLICABLE: &str = "N/A";

/// A flavor or image reference: an object or the CLI's `"name (id)"` text.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum NamedRef {
    Object {
        #[serde(default)]
        original_name: Option<String>,
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        id: Option<String>,
    },
    Text(String),
}

impl NamedRef {
    /// Best human name of the reference. Boot-from-volume images are `""`
    /// from the API and `"N/A (booted from volume)"` from the CLI.
    pub fn name(&self) -> Option<String> {
        match self {
            NamedRef::Object {
                original_name,
                name,
                id,
            } => original_name.clone().or_else(|| name.clone()).or_else(|| id.clone()),
            NamedRef::Text(text) => {
                let text = match text.rfind(" (") {
                    Some(pos) if text.ends_with(')') => &text[..pos],
                    _ => text.as_str(),
                };
                let text = text.trim();
                if text.is_empty() || text == NOT_APPLICABLE {
                    None
                } else {
                    Some(text.to_string())
                }
            }
        }
    }
}

/// Address map keyed by network name, or the CLI's `"net=ip; net2=ip"` text.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum Addresses {
    Map(serde_json::Map<String, serde_json::Value>),
    Text(String),
}

impl Addresses {
    /// Network interface names in the order the source lists them.
    pub fn interface_names(&self) -> Vec<String> {
        match self {
            Addresses::Map(map) => map.keys().cloned().collect(),
            Addresses::Text(text) => text
                .split(';')
                .filter_map(|part| part.split('=').next())
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: String,
    pub name: String,
    pub availability_zone: Option<String>,
    pub flavor: Option<String>,
    pub image: Option<String>,
    pub key_name: Option<String>,
    pub nics: Vec<String>,
}

impl From<RawServer> for Node {
    fn from(raw: RawServer) -> Self {
        let availability_zone = raw
            .availability_zone
            .or_else(|| raw.location.and_then(|l| l.zone));
        Node {
            id: raw.id,
            name: raw.name,
            availability_zone,
            flavor: raw.flavor.name(),
            image: raw.image.as_ref().and_then(NamedRef::name),
            key_name: raw.key_name,
            nics: raw
                .addresses
                .as_ref()
                .map(Addresses::interface_names)
                .unwrap_or_default(),
        }
    }
}

impl Identified for Node {
    fn id(&self) -> &str {
        &self.id
    }
}
