//! Lenient field decoders for values the API and the CLI spell differently.

use serde::de;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum FlagRepr {
    Bool(bool),
    Text(String),
}

/// Decode a boolean that may arrive as `true` or as the text `"True"`.
pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match FlagRepr::deserialize(deserializer)? {
        FlagRepr::Bool(b) => Ok(b),
        FlagRepr::Text(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(de::Error::custom(format!("invalid boolean flag: {other}"))),
        },
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberRepr {
    Number(u64),
    Text(String),
}

/// Decode an integer that may arrive as a number or as its decimal text.
pub fn number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberRepr::deserialize(deserializer)? {
        NumberRepr::Number(n) => Ok(n),
        NumberRepr::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| de::Error::custom(format!("invalid number: {s}"))),
    }
}

/// Treat an empty string as absent.
pub fn non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// Accept `null` where a list is expected.
pub fn list_or_null<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
