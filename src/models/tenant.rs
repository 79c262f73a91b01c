//! Tenant (project) identity.

use crate::config::Config;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Project record as returned by the identity service.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RawProject {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// The resolved tenant of one run. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tenant {
    id: String,
    name: String,
    description: String,
    password: String,
    cloud: String,
}

impl Tenant {
    /// Combine the project record with the credentials of the run.
    pub fn new(project: RawProject, config: &Config) -> Result<Tenant> {
        Ok(Tenant {
            id: project.id,
            name: project.name,
            description: project.description.unwrap_or_default(),
            password: config.require_password()?.to_string(),
            cloud: config.cloud.clone(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// Cloud alias the tenant was looked up in.
    pub fn cloud(&self) -> &str {
        &self.cloud
    }
}
