//! Cache management for inventory snapshots.
//!
//! Avoids refetching every collection when a report is re-rendered the same day.

use super::fetch::fetch_snapshot;
use crate::config::Config;
use crate::error::{InventoryError, Result};
use crate::models::Snapshot;
use std::path::Path;

/// Default cache file name of a tenant for today.
pub fn default_cache_file(config: &Config) -> String {
    let now = chrono::Local::now();
    format!(
        "inventory_cache_{}_{}.json",
        config.composite_project(),
        now.format("%Y-%m-%d")
    )
}

/// Read a snapshot file.
pub fn read_snapshot_file(path: &str) -> Result<Snapshot> {
    let json = std::fs::read_to_string(path).map_err(|source| InventoryError::Io {
        path: path.to_string(),
        source,
    })?;
    let mut deserializer = serde_json::Deserializer::from_str(&json);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        InventoryError::malformed("snapshot", e.path().to_string(), e.inner().to_string())
    })
}

/// Read a snapshot from cache, or fetch it from the cloud if no cache exists.
///
/// # Arguments
/// * `cache_file` - A specific snapshot file, which must exist. If None, the
///   dated default cache is used and written after fetching.
pub fn read_snapshot_cache(cache_file: Option<&str>, config: &Config) -> Result<Snapshot> {
    if let Some(file) = cache_file {
        if !Path::new(file).exists() {
            return Err(InventoryError::Io {
                path: file.to_string(),
                source: std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "cache file does not exist",
                ),
            });
        }
        log::info!("Using provided cache file: {file}");
        return read_snapshot_file(file);
    }

    let cache_file = default_cache_file(config);
    if Path::new(&cache_file).exists() {
        log::info!("Reading from cache file: {cache_file}");
        return read_snapshot_file(&cache_file);
    }

    log::warn!("Cache file not found: {cache_file}");
    let snapshot = fetch_snapshot(config)?;
    let json = serde_json::to_string(&snapshot)?;
    log::warn!("Writing data to cache file: {cache_file}");
    std::fs::write(&cache_file, json).map_err(|source| InventoryError::Io {
        path: cache_file.clone(),
        source,
    })?;
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            cloud: "admin".to_string(),
            vnf_name: "vnf".to_string(),
            project_name: "prod".to_string(),
            password: Some("secret".to_string()),
            cluster_name: None,
        }
    }

    #[test]
    fn test_read_snapshot_cache() {
        let snapshot = read_snapshot_cache(
            Some("src/tests/test_data/inventory_test_cache_01.json"),
            &config(),
        )
        .expect("Error reading snapshot cache");
        assert_eq!(snapshot.project["name"], "vnf_prod");
        assert_eq!(snapshot.security_groups.len(), 3);
        assert_eq!(snapshot.servers.len(), 2);
    }

    #[test]
    fn test_missing_cache_file() {
        let err = read_snapshot_cache(Some("src/tests/test_data/nope.json"), &config())
            .unwrap_err();
        assert!(matches!(err, InventoryError::Io { .. }));
    }

    #[test]
    fn test_default_cache_file_name() {
        let name = default_cache_file(&config());
        assert!(name.starts_with("inventory_cache_vnf_prod_"));
        assert!(name.ends_with(".json"));
    }
}
