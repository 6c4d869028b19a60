// ABOUTME: Cloud Foundry application manifest loading and patching.
// ABOUTME: Injects environment variables into every application before the push.

use serde_yaml::{Mapping, Value};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("failed to read manifest {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse manifest {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to serialize manifest {}: {source}", .path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to write manifest {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

const APPLICATIONS: &str = "applications";
const ENV: &str = "env";

/// A manifest document, kept as untyped YAML so unknown keys survive a save.
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    data: Value,
}

impl Manifest {
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        let data = serde_yaml::from_str(yaml)?;
        Ok(Self { data })
    }

    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content).map_err(|source| ManifestError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(&self.data)
    }

    pub fn save(&self, path: &Path) -> Result<(), ManifestError> {
        let yaml = self.to_yaml().map_err(|source| ManifestError::Serialize {
            path: path.to_path_buf(),
            source,
        })?;
        std::fs::write(path, yaml).map_err(|source| ManifestError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Number of entries under `applications`.
    pub fn application_count(&self) -> usize {
        self.data
            .get(APPLICATIONS)
            .and_then(Value::as_sequence)
            .map_or(0, Vec::len)
    }

    /// The `env` block of each application, in manifest order.
    ///
    /// Applications without an `env` block yield an empty map. Scalar values
    /// are rendered as strings; nested values are skipped.
    pub fn environment_variables(&self) -> Vec<BTreeMap<String, String>> {
        let Some(apps) = self.data.get(APPLICATIONS).and_then(Value::as_sequence) else {
            return Vec::new();
        };

        apps.iter()
            .map(|app| {
                app.get(ENV)
                    .and_then(Value::as_mapping)
                    .map(scalar_entries)
                    .unwrap_or_default()
            })
            .collect()
    }

    /// Set `name` in the `env` block of every application, creating the block
    /// where missing.
    pub fn add_environment_variable(&mut self, name: &str, value: &str) {
        for app in self.applications_mut() {
            let has_env = app.get(ENV).is_some_and(Value::is_mapping);
            if !has_env {
                app.insert(Value::from(ENV), Value::Mapping(Mapping::new()));
            }
            if let Some(Value::Mapping(env)) = app.get_mut(ENV) {
                env.insert(Value::from(name), Value::from(value));
            }
        }
    }

    fn applications_mut(&mut self) -> impl Iterator<Item = &mut Mapping> {
        self.data
            .get_mut(APPLICATIONS)
            .and_then(Value::as_sequence_mut)
            .into_iter()
            .flat_map(|apps| apps.iter_mut())
            .filter_map(Value::as_mapping_mut)
    }
}

fn scalar_entries(mapping: &Mapping) -> BTreeMap<String, String> {
    mapping
        .iter()
        .filter_map(|(k, v)| Some((k.as_str()?.to_string(), scalar_to_string(v)?)))
        .collect()
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
