// ABOUTME: Application-wide error types for cf-resource.
// ABOUTME: Uses thiserror for ergonomic error handling.

use thiserror::Error;

use crate::cf::CfError;
use crate::deploy::RewindError;
use crate::manifest::ManifestError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid {what}: found {count} files instead of 1 at path: {pattern}")]
    InvalidPath {
        what: &'static str,
        count: usize,
        pattern: String,
    },

    #[error("invalid glob pattern {pattern}: {source}")]
    GlobPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Cf(#[from] CfError),

    #[error(transparent)]
    Deploy(#[from] RewindError<CfError>),

    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
