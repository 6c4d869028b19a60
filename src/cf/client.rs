// ABOUTME: Cloud Foundry client built on top of a command runner.
// ABOUTME: Each method maps to one cf invocation; push may enter the app directory first.

use std::path::Path;

use super::error::CfError;
use super::push::PushSpec;
use super::runner::CommandRunner;
use super::workdir;
use crate::types::{AppName, Secret};

/// Default program name, resolved through `PATH`.
pub const CF_PROGRAM: &str = "cf";

/// How to authenticate against the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    Password { username: String, password: Secret },
    ClientCredentials {
        client_id: String,
        client_secret: Secret,
    },
}

/// Drives the cf CLI through a [`CommandRunner`].
#[derive(Debug)]
pub struct CloudFoundry<R> {
    runner: R,
    program: String,
}

impl<R: CommandRunner> CloudFoundry<R> {
    pub fn new(runner: R) -> Self {
        Self::with_program(runner, CF_PROGRAM)
    }

    pub fn with_program(runner: R, program: impl Into<String>) -> Self {
        Self {
            runner,
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Run `cf` with the given arguments.
    pub async fn cf(&self, args: &[String]) -> Result<(), CfError> {
        self.runner.run(&self.program, args).await
    }

    async fn cf_str(&self, args: &[&str]) -> Result<(), CfError> {
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        self.cf(&args).await
    }

    /// Point cf at the API and authenticate.
    pub async fn login(
        &self,
        api: &str,
        credentials: &Credentials,
        skip_ssl_validation: bool,
    ) -> Result<(), CfError> {
        let mut args = vec!["api", api];
        if skip_ssl_validation {
            args.push("--skip-ssl-validation");
        }
        self.cf_str(&args).await?;

        match credentials {
            Credentials::ClientCredentials {
                client_id,
                client_secret,
            } => {
                self.cf_str(&[
                    "auth",
                    "--client-credentials",
                    client_id.as_str(),
                    client_secret.expose(),
                ])
                .await
            }
            Credentials::Password { username, password } => {
                self.cf_str(&["auth", username.as_str(), password.expose()])
                    .await
            }
        }
    }

    pub async fn target(&self, organization: &str, space: &str) -> Result<(), CfError> {
        self.cf_str(&["target", "-o", organization, "-s", space]).await
    }

    pub async fn rename(&self, from: &AppName, to: &AppName) -> Result<(), CfError> {
        self.cf_str(&["rename", from.as_str(), to.as_str()]).await
    }

    pub async fn delete(&self, app: &AppName) -> Result<(), CfError> {
        self.cf_str(&["delete", "-f", app.as_str()]).await
    }

    pub async fn recent_logs(&self, app: &AppName) -> Result<(), CfError> {
        self.cf_str(&["logs", app.as_str(), "--recent"]).await
    }

    /// Push a release.
    ///
    /// A directory path is uploaded as `-p .` from inside that directory; a
    /// file path (zip, jar) is passed through as-is.
    pub async fn push(&self, spec: &PushSpec) -> Result<(), CfError> {
        let Some(ref path) = spec.path else {
            return self.cf(&spec.args(None)).await;
        };

        if is_directory(path).await? {
            let args = spec.args(Some("."));
            workdir::within(path, self.cf(&args)).await
        } else {
            let args = spec.args(Some(&path.display().to_string()));
            self.cf(&args).await
        }
    }
}

async fn is_directory(path: &Path) -> Result<bool, CfError> {
    let metadata = tokio::fs::metadata(path)
        .await
        .map_err(|source| CfError::PushPath {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(metadata.is_dir())
}
