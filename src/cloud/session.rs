//! Cloud sessions. Credentials come from the `clouds.yaml` entry of an alias.

use super::cli;
use crate::error::{InventoryError, Result};

/// Build an `openstack` command line scoped to a cloud alias.
pub fn openstack_cmd(cloud: &str, args: &str) -> String {
    format!("openstack --os-cloud {cloud} {args} -f json")
}

/// Check that a session can be established for `cloud`.
pub fn authenticate(cloud: &str) -> Result<()> {
    log::info!("authenticating against cloud '{cloud}'");
    cli::run(&openstack_cmd(cloud, "token issue")).map_err(|e| auth_failure(cloud, e))?;
    Ok(())
}

fn auth_failure(cloud: &str, cause: InventoryError) -> InventoryError {
    InventoryError::AuthFailure {
        cloud: cloud.to_string(),
        cause: cause.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openstack_cmd() {
        assert_eq!(
            openstack_cmd("vnf_prod", "network list"),
            "openstack --os-cloud vnf_prod network list -f json"
        );
    }

    #[test]
    fn test_failed_token_issue_is_auth_failure() {
        let cause = InventoryError::Command("The request you have made requires authentication".into());
        match auth_failure("vnf_prod", cause) {
            InventoryError::AuthFailure { cloud, cause } => {
                assert_eq!(cloud, "vnf_prod");
                assert!(cause.contains("requires authentication"), "{cause}");
            }
            other => panic!("unexpected error {other}"),
        }
    }
}
