//! Port, node and volume indexing.

use super::index::IdIndex;
use crate::error::{InventoryError, ResolvePolicy, Result};
use crate::models::{Node, Port, RawPort, RawServer, RawVolume, Volume, VolumeAttachment};

#[derive(Debug, Default)]
pub struct PortIndex {
    ports: IdIndex<Port>,
}

impl PortIndex {
    pub fn build(raw_ports: Vec<RawPort>) -> Result<PortIndex> {
        let mut ports = IdIndex::new();
        for raw in raw_ports {
            ports.insert("ports", Port::from(raw))?;
        }
        log::info!("indexed {} ports", ports.len());
        Ok(PortIndex { ports })
    }

    pub fn get(&self, id: &str) -> Option<&Port> {
        self.ports.get(id)
    }

    pub fn len(&self) -> usize {
        self.ports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ports.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Port> {
        self.ports.iter()
    }
}

#[derive(Debug, Default)]
pub struct NodeIndex {
    nodes: IdIndex<Node>,
}

impl NodeIndex {
    pub fn build(raw_servers: Vec<RawServer>) -> Result<NodeIndex> {
        let mut nodes = IdIndex::new();
        for raw in raw_servers {
            nodes.insert("servers", Node::from(raw))?;
        }
        log::info!("indexed {} nodes", nodes.len());
        Ok(NodeIndex { nodes })
    }

    pub fn get(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }
}

#[derive(Debug, Default)]
pub struct VolumeIndex {
    volumes: IdIndex<Volume>,
}

impl VolumeIndex {
    /// Index volumes, resolving the first attachment's server to its name.
    ///
    /// Only the first attachment of a multi-attach volume is kept. An
    /// attachment to a server missing from `nodes` is handled by `policy`;
    /// when skipped the volume is indexed as unattached.
    pub fn build(
        raw_volumes: Vec<RawVolume>,
        nodes: &NodeIndex,
        policy: ResolvePolicy,
    ) -> Result<VolumeIndex> {
        let mut volumes = IdIndex::new();
        let mut attached = 0;
        for raw in raw_volumes {
            if raw.attachments.len() > 1 {
                log::debug!(
                    "volume {} has {} attachments, keeping the first",
                    raw.id,
                    raw.attachments.len()
                );
            }
            let attachment = match raw.attachments.into_iter().next() {
                Some(first) => match nodes.get(&first.server_id) {
                    Some(node) => Some(VolumeAttachment {
                        server: node.name.clone(),
                        device: first.device,
                    }),
                    None => {
                        policy.on_dangling(InventoryError::dangling(
                            "volume server",
                            &raw.id,
                            &first.server_id,
                        ))?;
                        None
                    }
                },
                None => None,
            };
            attached += usize::from(attachment.is_some());
            volumes.insert(
                "volumes",
                Volume {
                    id: raw.id,
                    name: raw.name.unwrap_or_default(),
                    size: raw.size,
                    volume_type: raw.volume_type,
                    attachment,
                },
            )?;
        }
        log::info!("indexed {} volumes ({attached} attached)", volumes.len());
        Ok(VolumeIndex { volumes })
    }

    pub fn get(&self, id: &str) -> Option<&Volume> {
        self.volumes.get(id)
    }

    pub fn len(&self) -> usize {
        self.volumes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.volumes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Volume> {
        self.volumes.iter()
    }
}
