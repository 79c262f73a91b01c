//! Inventory indexing and cross-reference resolution.
//!
//! - [`security_groups`] - Groups, rules and rule-to-group resolution
//! - [`networks`] - Networks and subnet attachment
//! - [`compute`] - Ports, nodes and volume-to-node resolution
//! - [`inventory`] - Builds all of the above from a snapshot, in order
//! - [`placement`] - Next free node slot of a cluster

mod compute;
mod index;
mod inventory;
mod networks;
mod placement;
mod security_groups;

// Re-export public types and functions
pub use compute::{NodeIndex, PortIndex, VolumeIndex};
pub use index::IdIndex;
pub use inventory::{build_inventory, Inventory, ResolvePolicies};
pub use networks::{attach_subnets, AttachReport, NetworkIndex};
pub use placement::next_free_slot;
pub use security_groups::{SecurityGroupDraft, SecurityGroupIndex};
