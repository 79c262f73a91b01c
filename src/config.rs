//! Run configuration sourced from environment variables.

use crate::error::{InventoryError, Result};

/// Pause between consecutive cloud CLI calls, in milliseconds.
pub const SLEEP_MSEC: u64 = 100;

pub const ENV_CLOUD: &str = "OS_CLOUD";
pub const ENV_VNF_NAME: &str = "OS_VNF_NAME";
pub const ENV_PROJECT_NAME: &str = "OS_PROJECT_NAME";
pub const ENV_PASSWORD: &str = "OS_PASSWORD";
pub const ENV_CLUSTER_NAME: &str = "OS_CLUSTER_NAME";

/// Identity and credentials for one run.
///
/// Passed by value into whatever needs it; nothing here is global.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Cloud alias used for the administrative context.
    pub cloud: String,
    pub vnf_name: String,
    pub project_name: String,
    pub password: Option<String>,
    pub cluster_name: Option<String>,
}

impl Config {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Config> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| -> Result<String> {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| InventoryError::MissingConfig {
                    var: key.to_string(),
                })
        };
        let optional = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Config {
            cloud: required(ENV_CLOUD)?,
            vnf_name: required(ENV_VNF_NAME)?,
            project_name: required(ENV_PROJECT_NAME)?,
            password: optional(ENV_PASSWORD),
            cluster_name: optional(ENV_CLUSTER_NAME),
        })
    }

    /// Composite project identifier, `<vnf>_<project>`.
    ///
    /// Also used as the cloud alias of the tenant context.
    pub fn composite_project(&self) -> String {
        format!("{}_{}", self.vnf_name, self.project_name)
    }

    pub fn require_password(&self) -> Result<&str> {
        self.password
            .as_deref()
            .ok_or_else(|| InventoryError::MissingConfig {
                var: ENV_PASSWORD.to_string(),
            })
    }

    /// Node name prefix of a cluster, `<vnf>_<project>_<cluster>`.
    pub fn cluster_prefix(&self) -> Result<String> {
        let cluster = self
            .cluster_name
            .as_deref()
            .ok_or_else(|| InventoryError::MissingConfig {
                var: ENV_CLUSTER_NAME.to_string(),
            })?;
        Ok(format!("{}_{}", self.composite_project(), cluster))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_from_lookup_complete() {
        let config = Config::from_lookup(lookup_from(&[
            ("OS_CLOUD", "admin"),
            ("OS_VNF_NAME", "vnf"),
            ("OS_PROJECT_NAME", "prod"),
            ("OS_PASSWORD", "secret"),
        ]))
        .unwrap();
        assert_eq!(config.composite_project(), "vnf_prod");
        assert_eq!(config.require_password().unwrap(), "secret");
        assert!(config.cluster_prefix().is_err());
    }

    #[test]
    fn test_missing_required_value() {
        let err = Config::from_lookup(lookup_from(&[("OS_CLOUD", "admin"), ("OS_VNF_NAME", "vnf")]))
            .unwrap_err();
        match err {
            InventoryError::MissingConfig { var } => assert_eq!(var, "OS_PROJECT_NAME"),
            other => panic!("unexpected error {other}"),
        }
    }

    #[test]
    fn test_empty_value_counts_as_missing() {
        let err = Config::from_lookup(lookup_from(&[
            ("OS_CLOUD", " "),
            ("OS_VNF_NAME", "vnf"),
            ("OS_PROJECT_NAME", "prod"),
        ]))
        .unwrap_err();
        assert!(matches!(err, InventoryError::MissingConfig { var } if var == "OS_CLOUD"));
    }

    #[test]
    fn test_cluster_prefix() {
        let config = Config::from_lookup(lookup_from(&[
            ("OS_CLOUD", "admin"),
            ("OS_VNF_NAME", "vnf"),
            ("OS_PROJECT_NAME", "prod"),
            ("OS_CLUSTER_NAME", "db"),
        ]))
        .unwrap();
        assert_eq!(config.cluster_prefix().unwrap(), "vnf_prod_db");
        assert!(config.require_password().is_err());
    }
}
