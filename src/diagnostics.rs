// ABOUTME: Diagnostics accumulator for non-fatal warnings during a put.
// ABOUTME: Collects warnings that shouldn't fail a push but should be shown to users.

/// Collects non-fatal warnings while serving a request.
#[derive(Debug, Default)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
}

impl Diagnostics {
    /// Record a warning, auto-logging it via tracing.
    pub fn warn(&mut self, warning: Warning) {
        tracing::warn!("{}", warning.message);
        self.warnings.push(warning);
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// A non-fatal warning collected during a put.
#[derive(Debug, Clone)]
pub struct Warning {
    pub kind: WarningKind,
    pub message: String,
}

impl Warning {
    pub fn manifest_environment(message: impl Into<String>) -> Self {
        Self {
            kind: WarningKind::ManifestEnvironment,
            message: message.into(),
        }
    }

    pub fn docker_credentials(message: impl Into<String>) -> Self {
        Self {
            kind: WarningKind::DockerCredentials,
            message: message.into(),
        }
    }

    pub fn strategy(message: impl Into<String>) -> Self {
        Self {
            kind: WarningKind::Strategy,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// Environment variables requested but the manifest has no applications.
    ManifestEnvironment,
    /// Docker password given without a docker username.
    DockerCredentials,
    /// A parameter has no effect with the selected push strategy.
    Strategy,
}
