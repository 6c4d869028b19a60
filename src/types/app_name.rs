// ABOUTME: Validated Cloud Foundry application name.
// ABOUTME: Derives the temporary "venerable" name used during zero-downtime pushes.

use std::fmt;
use thiserror::Error;

/// Suffix appended to the live app while the new release takes its name.
pub const VENERABLE_SUFFIX: &str = "-venerable";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AppNameError {
    #[error("app name cannot be empty")]
    Empty,

    #[error("app name cannot contain whitespace: '{0}'")]
    ContainsWhitespace(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AppName(String);

impl AppName {
    pub fn new(value: &str) -> Result<Self, AppNameError> {
        if value.is_empty() {
            return Err(AppNameError::Empty);
        }

        if value.chars().any(char::is_whitespace) {
            return Err(AppNameError::ContainsWhitespace(value.to_string()));
        }

        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name the previous release is parked under while the new one is pushed.
    pub fn venerable(&self) -> AppName {
        AppName(format!("{}{}", self.0, VENERABLE_SUFFIX))
    }
}

impl fmt::Display for AppName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for AppName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
