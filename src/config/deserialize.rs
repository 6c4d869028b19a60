// ABOUTME: Custom serde deserializers for request configuration.
// ABOUTME: Treats empty strings as absent and stringifies scalar values.

use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::types::{AppName, Secret};

/// `null`, missing, and `""` all mean "not set".
pub fn deserialize_non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    Ok(opt.filter(|s| !s.is_empty()))
}

pub fn deserialize_secret<'de, D>(deserializer: D) -> Result<Option<Secret>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(deserialize_non_empty(deserializer)?.map(Secret::new))
}

pub fn deserialize_path<'de, D>(deserializer: D) -> Result<Option<PathBuf>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(deserialize_non_empty(deserializer)?.map(PathBuf::from))
}

pub fn deserialize_app_name<'de, D>(deserializer: D) -> Result<Option<AppName>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    deserialize_non_empty(deserializer)?
        .map(|s| AppName::new(&s).map_err(serde::de::Error::custom))
        .transpose()
}

/// A map whose values may be strings, numbers, or booleans. Values are
/// rendered as strings; arrays and objects are rejected.
pub fn deserialize_scalar_map<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Option<BTreeMap<String, Value>> = Option::deserialize(deserializer)?;
    raw.unwrap_or_default()
        .into_iter()
        .map(|(key, value)| {
            scalar_to_string(&value)
                .map(|value| (key.clone(), value))
                .ok_or_else(|| {
                    serde::de::Error::custom(format!(
                        "value for '{key}' must be a string, number, or boolean"
                    ))
                })
        })
        .collect()
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
