// ABOUTME: Environment passed to every cf invocation.
// ABOUTME: Starts from the process environment and forces colour and dial-timeout settings.

use std::collections::BTreeMap;

pub const CF_COLOR: &str = "CF_COLOR";
pub const CF_DIAL_TIMEOUT: &str = "CF_DIAL_TIMEOUT";
pub const CF_TRACE: &str = "CF_TRACE";
pub const CF_DOCKER_PASSWORD: &str = "CF_DOCKER_PASSWORD";

const DIAL_TIMEOUT_SECS: &str = "30";

/// Environment variables for cf child processes.
///
/// Held separately from the resource's own environment so that secrets such
/// as the docker password only reach the child processes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CfEnvironment {
    env: BTreeMap<String, String>,
}

impl CfEnvironment {
    /// Only the variables the resource always sets.
    pub fn new() -> Self {
        let mut cfe = Self::default();
        cfe.apply_defaults();
        cfe
    }

    /// The current process environment plus the forced defaults.
    pub fn from_os() -> Self {
        let mut cfe = Self {
            env: std::env::vars_os()
                .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
                .collect(),
        };
        cfe.apply_defaults();
        cfe
    }

    fn apply_defaults(&mut self) {
        self.insert(CF_COLOR, "true");
        self.insert(CF_DIAL_TIMEOUT, DIAL_TIMEOUT_SECS);
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.env.insert(key.into(), value.into());
    }

    /// Enable `CF_TRACE` so cf prints its HTTP traffic.
    pub fn with_trace(mut self, verbose: bool) -> Self {
        if verbose {
            self.insert(CF_TRACE, "true");
        }
        self
    }

    /// Credentials for a private docker registry, read by `cf push`.
    pub fn with_docker_password(mut self, password: Option<&str>) -> Self {
        if let Some(password) = password {
            self.insert(CF_DOCKER_PASSWORD, password);
        }
        self
    }

    /// Merge `KEY=VALUE` strings; entries without `=` are skipped.
    pub fn extend_from_pairs<'a>(&mut self, pairs: impl IntoIterator<Item = &'a str>) {
        for pair in pairs {
            if let Some((key, value)) = split_key_value(pair) {
                self.insert(key, value);
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.env.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.env.iter()
    }

    pub fn len(&self) -> usize {
        self.env.len()
    }

    pub fn is_empty(&self) -> bool {
        self.env.is_empty()
    }

    /// `KEY=VALUE` strings in key order.
    pub fn to_pairs(&self) -> Vec<String> {
        self.env.iter().map(|(k, v)| format!("{k}={v}")).collect()
    }
}

/// Split on the first `=`, so values may themselves contain `=`.
pub fn split_key_value(item: &str) -> Option<(&str, &str)> {
    item.split_once('=')
}
