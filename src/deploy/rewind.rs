// ABOUTME: Sequencer that runs actions in order and rewinds one step on failure.
// ABOUTME: Only the failing action's reverse_previous runs; earlier steps are never unwound.

use std::fmt;

use super::action::Action;
use super::error::RewindError;

/// Result of executing a [`Rewind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<E> {
    /// Every forward operation succeeded.
    Success,
    /// The first action failed. No compensation was attempted.
    ForwardFailure(E),
    /// A later action failed and its compensation succeeded (or was absent).
    /// Carries the forward error, unchanged.
    RolledBack(E),
    /// The compensation itself failed. The forward error is discarded.
    RollbackFailed {
        error: E,
        failure_message: Option<String>,
    },
}

impl<E> Outcome<E> {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }
}

impl<E: fmt::Display> Outcome<E> {
    /// Human-readable description of a non-success outcome.
    ///
    /// A failed rollback is reported as `"<failure message>: <error>"` when a
    /// failure message was configured, and as the bare error otherwise.
    pub fn message(&self) -> Option<String> {
        match self {
            Outcome::Success => None,
            Outcome::ForwardFailure(e) | Outcome::RolledBack(e) => Some(e.to_string()),
            Outcome::RollbackFailed {
                error,
                failure_message: Some(prefix),
            } => Some(format!("{prefix}: {error}")),
            Outcome::RollbackFailed {
                error,
                failure_message: None,
            } => Some(error.to_string()),
        }
    }

    pub fn into_result(self) -> Result<(), RewindError<E>> {
        let message = self.message();
        match self {
            Outcome::Success => Ok(()),
            Outcome::ForwardFailure(e) => Err(RewindError::Forward(e)),
            Outcome::RolledBack(e) => Err(RewindError::RolledBack(e)),
            Outcome::RollbackFailed { error, .. } => Err(RewindError::RollbackFailed {
                message: message.unwrap_or_else(|| error.to_string()),
                error,
            }),
        }
    }
}

/// An ordered list of actions, executed once.
#[must_use = "a rewind does nothing until executed"]
#[derive(Debug)]
pub struct Rewind<'a, E> {
    actions: Vec<Action<'a, E>>,
    failure_message: Option<String>,
}

impl<'a, E: 'a> Rewind<'a, E> {
    pub fn new(actions: Vec<Action<'a, E>>) -> Self {
        Self {
            actions,
            failure_message: None,
        }
    }

    /// Message prefixed to the error when a compensation fails.
    pub fn with_failure_message(mut self, message: impl Into<String>) -> Self {
        self.failure_message = Some(message.into());
        self
    }

    pub fn failure_message(&self) -> Option<&str> {
        self.failure_message.as_deref()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Run every forward operation in order until one fails.
    ///
    /// When action `i > 0` fails, its `reverse_previous` runs (undoing action
    /// `i - 1`) and execution stops. Nothing after the failing action runs.
    ///
    /// A sequence runs at most once:
    ///
    /// ```compile_fail
    /// use cf_resource::deploy::Rewind;
    ///
    /// let rewind: Rewind<'static, String> = Rewind::new(Vec::new());
    /// let _first = rewind.execute();
    /// let _second = rewind.execute();
    /// ```
    pub async fn execute(self) -> Outcome<E> {
        let Rewind {
            actions,
            failure_message,
        } = self;

        for (index, action) in actions.into_iter().enumerate() {
            let (forward, reverse_previous) = action.into_parts();

            let err = match forward.run().await {
                Ok(()) => continue,
                Err(err) => err,
            };

            if index == 0 {
                return Outcome::ForwardFailure(err);
            }

            let Some(reverse_previous) = reverse_previous else {
                return Outcome::RolledBack(err);
            };

            return match reverse_previous.run().await {
                Ok(()) => Outcome::RolledBack(err),
                Err(error) => Outcome::RollbackFailed {
                    error,
                    failure_message,
                },
            };
        }

        Outcome::Success
    }
}
