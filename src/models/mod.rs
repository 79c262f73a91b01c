//! Domain models for the cloud inventory.
//!
//! Each resource has a `Raw*` record, decoded verbatim from the provider, and
//! an indexed entity built from it:
//! - [`Tenant`] - the project of the run
//! - [`SecurityGroup`] and [`SecurityGroupRule`]
//! - [`Network`] and [`Subnet`]
//! - [`Port`], [`Node`] and [`Volume`]
//! - [`Snapshot`] - all raw collections of one run

pub mod de;
mod network;
mod node;
mod port;
mod security_group;
mod snapshot;
mod tenant;
mod volume;

pub use network::{IpVersion, Network, RawNetwork, RawSubnet, Subnet};
pub use node::{Addresses, NamedRef, Node, RawLocation, RawServer};
pub use port::{Port, RawPort};
pub use security_group::{
    GroupRef, RawSecurityGroup, RawSecurityGroupRule, RuleRemote, SecurityGroup,
    SecurityGroupRule,
};
pub use snapshot::{decode_record, decode_records, Snapshot};
pub use tenant::{RawProject, Tenant};
pub use volume::{RawAttachment, RawVolume, Volume, VolumeAttachment};

/// An entity keyed by a provider-assigned identifier.
pub trait Identified {
    fn id(&self) -> &str;
}
