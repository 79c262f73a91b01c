//! Retrieval of the raw collections through the `openstack` CLI.

use super::cli;
use super::session::{authenticate, openstack_cmd};
use crate::config::{self, Config};
use crate::error::{InventoryError, Result};
use crate::models::Snapshot;
use serde::Deserialize;
use serde_json::Value;

/// Row of an `openstack <resource> list` table.
#[derive(Deserialize, Debug)]
struct ListRow {
    #[serde(rename = "ID", alias = "id")]
    id: String,
    #[serde(rename = "Name", alias = "name", default)]
    name: Option<String>,
}

fn openstack_json(cloud: &str, args: &str) -> Result<Value> {
    let output = cli::run(&openstack_cmd(cloud, args))?;
    let mut deserializer = serde_json::Deserializer::from_str(&output);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        log::error!("OUTPUT START:\n\n{}\n\nOUTPUT END\n", output);
        InventoryError::malformed(args, e.path().to_string(), e.inner().to_string())
    })
}

fn list_rows(cloud: &str, resource: &str) -> Result<Vec<ListRow>> {
    let list = openstack_json(cloud, &format!("{resource} list"))?;
    serde_path_to_error::deserialize(list).map_err(|e| {
        InventoryError::malformed(resource, e.path().to_string(), e.inner().to_string())
    })
}

/// List a resource, then show every item of it in full.
fn fetch_collection(cloud: &str, resource: &str) -> Result<Vec<Value>> {
    let rows = list_rows(cloud, resource)?;
    log::info!("listing {resource}: {} items", rows.len());

    let mut records = Vec::with_capacity(rows.len());
    for row in rows {
        records.push(openstack_json(cloud, &format!("{resource} show {}", row.id))?);
        // Rate limiting pause
        std::thread::sleep(std::time::Duration::from_millis(config::SLEEP_MSEC));
    }
    Ok(records)
}

/// Fetch one consistent snapshot of the tenant.
///
/// The project is looked up in the administrative context; everything else
/// in the tenant context, whose cloud alias is the composite project name.
pub fn fetch_snapshot(config: &Config) -> Result<Snapshot> {
    let project_name = config.composite_project();

    authenticate(&config.cloud)?;
    let project = openstack_json(&config.cloud, &format!("project show {project_name}"))?;

    authenticate(&project_name)?;
    let snapshot = Snapshot {
        project,
        security_groups: fetch_collection(&project_name, "security group")?,
        networks: fetch_collection(&project_name, "network")?,
        subnets: fetch_collection(&project_name, "subnet")?,
        servers: fetch_collection(&project_name, "server")?,
        ports: fetch_collection(&project_name, "port")?,
        volumes: fetch_collection(&project_name, "volume")?,
    };
    log::info!(
        "Got snapshot of '{project_name}': {} groups, {} networks, {} subnets, {} servers, {} ports, {} volumes",
        snapshot.security_groups.len(),
        snapshot.networks.len(),
        snapshot.subnets.len(),
        snapshot.servers.len(),
        snapshot.ports.len(),
        snapshot.volumes.len()
    );
    Ok(snapshot)
}

/// Names of all servers visible to `cloud`.
pub fn fetch_server_names(cloud: &str) -> Result<Vec<String>> {
    authenticate(cloud)?;
    Ok(list_rows(cloud, "server")?
        .into_iter()
        .filter_map(|row| row.name)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_row_accepts_cli_and_api_keys() {
        let rows: Vec<ListRow> = serde_json::from_value(json!([
            { "ID": "a", "Name": "first", "Status": "ACTIVE" },
            { "id": "b", "name": null }
        ]))
        .unwrap();
        assert_eq!(rows[0].id, "a");
        assert_eq!(rows[0].name.as_deref(), Some("first"));
        assert_eq!(rows[1].name, None);
    }
}
