// ABOUTME: Configuration carried by resource requests: `source` and `params`.
// ABOUTME: Handles JSON parsing, credential selection, and path resolution.

mod deserialize;

use deserialize::{
    deserialize_app_name, deserialize_non_empty, deserialize_path, deserialize_scalar_map,
    deserialize_secret,
};

use crate::cf::{CF_PROGRAM, CfEnvironment, Credentials, PushSpec};
use crate::error::{Error, Result};
use crate::paths::resolve_single;
use crate::types::{AppName, Secret};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Overrides the cf program (name on `PATH` or absolute path).
pub const CF_BIN_ENV: &str = "CF_RESOURCE_CF_BIN";

/// Resource configuration from the pipeline's `source` block.
#[derive(Debug, Clone, Deserialize)]
pub struct Source {
    pub api: String,

    #[serde(default, deserialize_with = "deserialize_non_empty")]
    pub username: Option<String>,

    #[serde(default, deserialize_with = "deserialize_secret")]
    pub password: Option<Secret>,

    #[serde(default, deserialize_with = "deserialize_non_empty")]
    pub client_id: Option<String>,

    #[serde(default, deserialize_with = "deserialize_secret")]
    pub client_secret: Option<Secret>,

    pub organization: String,

    pub space: String,

    #[serde(default)]
    pub skip_cert_check: bool,

    #[serde(default)]
    pub verbose: bool,
}

impl Source {
    /// Client credentials win when both id and secret are set.
    pub fn credentials(&self) -> Result<Credentials> {
        if let (Some(client_id), Some(client_secret)) = (&self.client_id, &self.client_secret) {
            return Ok(Credentials::ClientCredentials {
                client_id: client_id.clone(),
                client_secret: client_secret.clone(),
            });
        }

        if let (Some(username), Some(password)) = (&self.username, &self.password) {
            return Ok(Credentials::Password {
                username: username.clone(),
                password: password.clone(),
            });
        }

        Err(Error::InvalidConfig(
            "source must set either username and password, or client_id and client_secret"
                .to_string(),
        ))
    }
}

/// Parameters of a `put` step.
#[derive(Debug, Clone, Deserialize)]
pub struct Params {
    pub manifest: PathBuf,

    #[serde(default, deserialize_with = "deserialize_path")]
    pub path: Option<PathBuf>,

    #[serde(default, deserialize_with = "deserialize_app_name")]
    pub current_app_name: Option<AppName>,

    #[serde(default, deserialize_with = "deserialize_scalar_map")]
    pub vars: BTreeMap<String, String>,

    #[serde(default)]
    pub vars_files: Vec<String>,

    #[serde(default, deserialize_with = "deserialize_scalar_map")]
    pub environment_variables: BTreeMap<String, String>,

    #[serde(default, deserialize_with = "deserialize_non_empty")]
    pub docker_username: Option<String>,

    #[serde(default, deserialize_with = "deserialize_secret")]
    pub docker_password: Option<Secret>,

    #[serde(default)]
    pub show_app_log: bool,

    #[serde(default)]
    pub no_start: bool,

    #[serde(default)]
    pub use_rolling_app_deployment: bool,
}

impl Params {
    /// Make `manifest` and `path` absolute under `sources` and expand globs.
    ///
    /// Each pattern must match exactly one file.
    pub fn resolve_paths(&mut self, sources: &Path) -> Result<()> {
        self.manifest = resolve_single(&sources.join(&self.manifest), "manifest path")?;

        if let Some(ref path) = self.path {
            self.path = Some(resolve_single(&sources.join(path), "path")?);
        }

        Ok(())
    }

    /// Push arguments for this release, without an app name override.
    pub fn push_spec(&self) -> PushSpec {
        PushSpec {
            app_name: None,
            manifest: self.manifest.clone(),
            path: self.path.clone(),
            vars: self.vars.clone(),
            vars_files: self.vars_files.clone(),
            docker_username: self.docker_username.clone(),
            no_start: self.no_start,
            rolling: self.use_rolling_app_deployment,
        }
    }
}

/// Environment for cf child processes serving this request.
pub fn cf_environment(source: &Source, params: &Params) -> CfEnvironment {
    CfEnvironment::from_os()
        .with_trace(source.verbose)
        .with_docker_password(params.docker_password.as_ref().map(Secret::expose))
}

/// The cf program to run, honouring [`CF_BIN_ENV`].
pub fn cf_program() -> String {
    std::env::var(CF_BIN_ENV)
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| CF_PROGRAM.to_string())
}
