//! Error kinds for building and rendering the inventory.

use thiserror::Error;

/// Everything that can abort an inventory run.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// A required environment value is absent or empty.
    #[error("missing configuration: environment variable {var} is not set")]
    MissingConfig { var: String },

    /// The cloud session could not be established.
    #[error("authentication against cloud '{cloud}' failed: {cause}")]
    AuthFailure { cloud: String, cause: String },

    /// A raw record is missing a required field or carries an invalid value.
    #[error("malformed {collection} input at '{path}': {message}")]
    MalformedInput {
        collection: String,
        path: String,
        message: String,
    },

    /// A foreign key does not resolve within the current snapshot.
    #[error("dangling {kind} reference: {from} -> {to}")]
    DanglingReference {
        kind: &'static str,
        from: String,
        to: String,
    },

    /// An external command failed.
    #[error("command failed: {0}")]
    Command(String),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl InventoryError {
    pub(crate) fn malformed(
        collection: &str,
        path: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        InventoryError::MalformedInput {
            collection: collection.to_string(),
            path: path.into(),
            message: message.into(),
        }
    }

    pub(crate) fn dangling(kind: &'static str, from: &str, to: &str) -> Self {
        InventoryError::DanglingReference {
            kind,
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, InventoryError>;

/// What to do when a cross-reference does not resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolvePolicy {
    /// Abort with [`InventoryError::DanglingReference`].
    #[default]
    Strict,
    /// Log a warning and leave the reference unresolved.
    Skip,
}

impl ResolvePolicy {
    /// Apply the policy to a failed lookup.
    ///
    /// Returns `Ok(())` when the caller should skip and continue.
    pub fn on_dangling(self, err: InventoryError) -> Result<()> {
        match self {
            ResolvePolicy::Strict => Err(err),
            ResolvePolicy::Skip => {
                log::warn!("skipping: {err}");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_policy_propagates() {
        let err = InventoryError::dangling("subnet network", "s1", "n9");
        let result = ResolvePolicy::Strict.on_dangling(err);
        assert!(matches!(
            result,
            Err(InventoryError::DanglingReference { kind: "subnet network", .. })
        ));
    }

    #[test]
    fn test_skip_policy_swallows() {
        let err = InventoryError::dangling("volume server", "v1", "x");
        assert!(ResolvePolicy::Skip.on_dangling(err).is_ok());
    }

    #[test]
    fn test_error_messages() {
        let err = InventoryError::MissingConfig {
            var: "OS_CLOUD".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "missing configuration: environment variable OS_CLOUD is not set"
        );
        let err = InventoryError::malformed("networks", "[0].id", "missing field `id`");
        assert_eq!(
            err.to_string(),
            "malformed networks input at '[0].id': missing field `id`"
        );
    }
}
