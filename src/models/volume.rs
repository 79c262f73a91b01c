use super::de;
use super::Identified;
use serde::{Deserialize, Serialize};

/// Volume record as returned by the block storage service.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RawVolume {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(deserialize_with = "de::number")]
    pub size: u64,
    #[serde(default, alias = "type")]
    pub volume_type: Option<String>,
    #[serde(default, deserialize_with = "de::list_or_null")]
    pub attachments: Vec<RawAttachment>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RawAttachment {
    pub server_id: String,
    #[serde(default)]
    pub device: Option<String>,
}

/// Where a volume is mounted, resolved against the node index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VolumeAttachment {
    pub server: String,
    pub device: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Volume {
    pub id: String,
    pub name: String,
    pub size: u64,
    pub volume_type: Option<String>,
    pub attachment: Option<VolumeAttachment>,
}

impl Identified for Volume {
    fn id(&self) -> &str {
        &self.id
    }
}
