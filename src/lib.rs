//! Cross-referenced inventory of an OpenStack tenant.
//!
//! Raw collections are fetched (or read from cache) as a [`models::Snapshot`],
//! indexed and resolved into a [`processing::Inventory`], and rendered as an
//! [`output::Document`].

pub mod cloud;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

use config::Config;
use processing::{build_inventory, next_free_slot, Inventory, ResolvePolicies};

pub use error::{InventoryError, ResolvePolicy, Result};

/// Read a snapshot from cache or the cloud and build the inventory from it.
///
/// Credentials are checked before anything is fetched.
pub fn get_inventory(
    cache_file: Option<&str>,
    config: &Config,
    policies: ResolvePolicies,
) -> Result<Inventory> {
    config.require_password()?;
    let snapshot = cloud::read_snapshot_cache(cache_file, config)?;
    build_inventory(snapshot, config, policies)
}

/// Next free node slot of the configured cluster.
///
/// Server names come from `cache_file` when given, otherwise from the cloud.
pub fn get_placement_slot(cache_file: Option<&str>, config: &Config) -> Result<u32> {
    let prefix = config.cluster_prefix()?;
    let names: Vec<String> = match cache_file {
        Some(file) => cloud::read_snapshot_file(file)?
            .servers
            .iter()
            .filter_map(|s| s.get("name").and_then(|n| n.as_str()))
            .map(str::to_string)
            .collect(),
        None => cloud::fetch_server_names(&config.cloud)?,
    };
    Ok(next_free_slot(&prefix, names.iter().map(String::as_str)))
}
