// ABOUTME: Scoped change of the process working directory.
// ABOUTME: The previous directory is restored when the guard drops, on every exit path.

use std::future::Future;
use std::path::{Path, PathBuf};

use super::error::CfError;

/// Holds the process inside another working directory until dropped.
///
/// The working directory is process-wide state. Only one guard should be
/// alive at a time.
#[derive(Debug)]
pub struct WorkingDir {
    previous: PathBuf,
}

impl WorkingDir {
    pub fn enter(path: &Path) -> Result<Self, CfError> {
        let previous = std::env::current_dir().map_err(|source| CfError::WorkingDir {
            path: path.to_path_buf(),
            source,
        })?;

        std::env::set_current_dir(path).map_err(|source| CfError::WorkingDir {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!("Entered {}", path.display());
        Ok(Self { previous })
    }

    pub fn previous(&self) -> &Path {
        &self.previous
    }
}

impl Drop for WorkingDir {
    fn drop(&mut self) {
        if let Err(e) = std::env::set_current_dir(&self.previous) {
            tracing::error!(
                "Failed to restore working directory {}: {}",
                self.previous.display(),
                e
            );
        }
    }
}

/// Run `future` with the working directory set to `path`.
///
/// The directory is entered before the future is first polled and restored
/// when it completes, fails, panics, or is dropped.
pub async fn within<F, T>(path: &Path, future: F) -> Result<T, CfError>
where
    F: Future<Output = Result<T, CfError>>,
{
    let _guard = WorkingDir::enter(path)?;
    future.await
}
