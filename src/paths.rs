// ABOUTME: Glob-based resolution of request paths.
// ABOUTME: A pattern must match exactly one file or directory.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Expand `pattern` and return its single match.
///
/// `what` names the parameter in the error message ("manifest path", "path").
pub fn resolve_single(pattern: &Path, what: &'static str) -> Result<PathBuf> {
    let pattern_str = pattern.to_string_lossy();

    let matches: Vec<PathBuf> = glob::glob(&pattern_str)
        .map_err(|source| Error::GlobPattern {
            pattern: pattern_str.to_string(),
            source,
        })?
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(e) => {
                tracing::debug!("Skipping unreadable glob match: {}", e);
                None
            }
        })
        .collect();

    match <[PathBuf; 1]>::try_from(matches) {
        Ok([path]) => Ok(path),
        Err(matches) => Err(Error::InvalidPath {
            what,
            count: matches.len(),
            pattern: pattern_str.to_string(),
        }),
    }
}
