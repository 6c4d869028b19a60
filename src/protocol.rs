// ABOUTME: Concourse resource protocol payloads for check, in, and out.
// ABOUTME: Requests arrive as JSON on stdin; responses are written as JSON to stdout.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::config::{Params, Source};

/// A resource version: the moment a push completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version {
    pub timestamp: DateTime<Utc>,
}

impl Version {
    pub fn now() -> Self {
        Self {
            timestamp: Utc::now(),
        }
    }

    /// Zero-valued timestamps (`0001-01-01T00:00:00Z`) mean "no version".
    pub fn is_zero(&self) -> bool {
        self.timestamp.year() <= 1
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataPair {
    pub name: String,
    pub value: String,
}

impl MetadataPair {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Input of `in`. The source is not needed to fetch a version.
#[derive(Debug, Clone, Deserialize)]
pub struct GetRequest {
    #[serde(default)]
    pub version: Option<Version>,
}

impl GetRequest {
    /// Echo the requested version, or a fresh one if none was given.
    pub fn respond(&self) -> VersionResponse {
        let version = self
            .version
            .filter(|v| !v.is_zero())
            .unwrap_or_else(Version::now);
        VersionResponse {
            version,
            metadata: Vec::new(),
        }
    }
}

/// Input of `out`.
#[derive(Debug, Clone, Deserialize)]
pub struct PutRequest {
    pub source: Source,
    pub params: Params,
}

/// Output of `in` and `out`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionResponse {
    pub version: Version,
    pub metadata: Vec<MetadataPair>,
}

impl VersionResponse {
    /// Response for a push into `organization`/`space`, versioned now.
    pub fn pushed(organization: &str, space: &str) -> Self {
        Self {
            version: Version::now(),
            metadata: vec![
                MetadataPair::new("organization", organization),
                MetadataPair::new("space", space),
            ],
        }
    }
}

/// Output of `check`: this resource never reports new versions.
pub fn check_response() -> Vec<Version> {
    Vec::new()
}
