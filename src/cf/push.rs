// ABOUTME: Arguments for `cf push`, built from deployment parameters.
// ABOUTME: Argument order is fixed so that recorded invocations are reproducible.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::types::AppName;

/// Everything `cf push` needs for one release.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PushSpec {
    /// Push under this name instead of the one in the manifest.
    pub app_name: Option<AppName>,
    pub manifest: PathBuf,
    /// Directory or archive to upload.
    pub path: Option<PathBuf>,
    pub vars: BTreeMap<String, String>,
    pub vars_files: Vec<String>,
    pub docker_username: Option<String>,
    pub no_start: bool,
    /// Use the platform's native rolling strategy.
    pub rolling: bool,
}

impl PushSpec {
    pub fn new(manifest: impl Into<PathBuf>) -> Self {
        Self {
            manifest: manifest.into(),
            ..Default::default()
        }
    }

    /// Same release, pushed under `app_name`.
    pub fn named(&self, app_name: AppName) -> Self {
        Self {
            app_name: Some(app_name),
            ..self.clone()
        }
    }

    /// Arguments for `cf`, with `path_arg` as the value of `-p`.
    pub fn args(&self, path_arg: Option<&str>) -> Vec<String> {
        let mut args = vec!["push".to_string()];

        if let Some(ref name) = self.app_name {
            args.push(name.to_string());
        }

        args.push("-f".to_string());
        args.push(self.manifest.display().to_string());

        if self.rolling {
            args.push("--strategy".to_string());
            args.push("rolling".to_string());
        }

        if self.no_start {
            args.push("--no-start".to_string());
        }

        for (name, value) in &self.vars {
            args.push("--var".to_string());
            args.push(format!("{name}={value}"));
        }

        for vars_file in &self.vars_files {
            args.push("--vars-file".to_string());
            args.push(vars_file.clone());
        }

        if let Some(ref user) = self.docker_username {
            args.push("--docker-username".to_string());
            args.push(user.clone());
        }

        if let Some(path) = path_arg {
            args.push("-p".to_string());
            args.push(path.to_string());
        }

        args
    }
}
