// ABOUTME: Error type produced when a rewindable sequence does not succeed.
// ABOUTME: Keeps first-step failures, compensated failures, and failed rollbacks distinct.

/// Non-success result of a [`Rewind`](super::Rewind), as an error value.
#[derive(Debug, thiserror::Error)]
pub enum RewindError<E> {
    /// The first step failed; nothing needed undoing.
    #[error("{0}")]
    Forward(E),

    /// A later step failed and the previous step was undone.
    #[error("{0}")]
    RolledBack(E),

    /// Undoing the previous step failed. State may be inconsistent.
    #[error("{message}")]
    RollbackFailed { message: String, error: E },
}

impl<E> RewindError<E> {
    /// Whether the platform may have been left half-way through the sequence.
    pub fn is_inconsistent(&self) -> bool {
        matches!(self, RewindError::RollbackFailed { .. })
    }

    /// The error that ended the sequence.
    pub fn cause(&self) -> &E {
        match self {
            RewindError::Forward(e) | RewindError::RolledBack(e) => e,
            RewindError::RollbackFailed { error, .. } => error,
        }
    }
}
