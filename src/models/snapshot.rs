//! One consistent set of raw collections, as fetched or cached.

use crate::error::{InventoryError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw collections of one run, kept as JSON until each index decodes its own.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct Snapshot {
    pub project: Value,
    #[serde(default)]
    pub security_groups: Vec<Value>,
    #[serde(default)]
    pub networks: Vec<Value>,
    #[serde(default)]
    pub subnets: Vec<Value>,
    #[serde(default)]
    pub ports: Vec<Value>,
    #[serde(default)]
    pub servers: Vec<Value>,
    #[serde(default)]
    pub volumes: Vec<Value>,
}

/// Decode one raw collection, reporting the JSON path of the first bad field.
pub fn decode_records<T>(collection: &str, records: Vec<Value>) -> Result<Vec<T>>
where
    T: DeserializeOwned,
{
    serde_path_to_error::deserialize(Value::Array(records)).map_err(|e| {
        let path = e.path().to_string();
        InventoryError::malformed(collection, path, e.into_inner().to_string())
    })
}

/// Decode a single raw record.
pub fn decode_record<T>(collection: &str, record: Value) -> Result<T>
where
    T: DeserializeOwned,
{
    serde_path_to_error::deserialize(record).map_err(|e| {
        let path = e.path().to_string();
        InventoryError::malformed(collection, path, e.into_inner().to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RawNetwork;
    use serde_json::json;

    #[test]
    fn test_decode_reports_path() {
        let records = vec![
            json!({ "id": "n1", "name": "a", "shared": false }),
            json!({ "id": "n2", "name": "b", "shared": "sometimes" }),
        ];
        let err = decode_records::<RawNetwork>("networks", records).unwrap_err();
        match err {
            InventoryError::MalformedInput {
                collection, path, ..
            } => {
                assert_eq!(collection, "networks");
                assert_eq!(path, "[1].shared");
            }
            other => panic!("unexpected error {other}"),
        }
    }

    #[test]
    fn test_decode_missing_field() {
        let records = vec![json!({ "name": "no-id", "shared": false })];
        let err = decode_records::<RawNetwork>("networks", records).unwrap_err();
        assert!(err.to_string().contains("missing field `id`"), "{err}");
    }
}
