// ABOUTME: Forward and compensating steps of a rewindable sequence.
// ABOUTME: Operations are boxed one-shot futures that succeed or fail with an error.

use futures::FutureExt;
use futures::future::BoxFuture;
use std::fmt;
use std::future::Future;

/// A one-shot step with side effects. Yields `Ok(())` or the failure.
pub struct Operation<'a, E> {
    run: Box<dyn FnOnce() -> BoxFuture<'a, Result<(), E>> + Send + 'a>,
}

impl<'a, E: 'a> Operation<'a, E> {
    pub fn new<F, Fut>(f: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'a,
        Fut: Future<Output = Result<(), E>> + Send + 'a,
    {
        Self {
            run: Box::new(move || f().boxed()),
        }
    }

    pub async fn run(self) -> Result<(), E> {
        (self.run)().await
    }
}

impl<E> fmt::Debug for Operation<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Operation")
    }
}

/// One step of a [`Rewind`](super::Rewind).
///
/// `reverse_previous` undoes the step *before* this one. It only runs when
/// this action's forward operation fails.
#[derive(Debug)]
pub struct Action<'a, E> {
    forward: Operation<'a, E>,
    reverse_previous: Option<Operation<'a, E>>,
}

impl<'a, E: 'a> Action<'a, E> {
    pub fn new(forward: Operation<'a, E>) -> Self {
        Self {
            forward,
            reverse_previous: None,
        }
    }

    pub fn with_reverse_previous(mut self, reverse_previous: Operation<'a, E>) -> Self {
        self.reverse_previous = Some(reverse_previous);
        self
    }

    pub fn has_reverse_previous(&self) -> bool {
        self.reverse_previous.is_some()
    }

    pub(crate) fn into_parts(self) -> (Operation<'a, E>, Option<Operation<'a, E>>) {
        (self.forward, self.reverse_previous)
    }
}
