//! Pending operations
//!
//! Completion handles for in-flight store operations.
//!
//! A [`Pending`] resolves exactly once, either with the operation's value or
//! with a [`KvError`]. Async callers `.await` it; synchronous callers use
//! [`Pending::wait`].

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::runtime::Handle;
use tokio::sync::oneshot;

use crate::error::{KvError, Result};

/// Handle to an asynchronous put or get
#[must_use = "a pending operation does nothing observable unless awaited or waited on"]
pub struct Pending<T> {
    state: State<T>,
}

enum State<T> {
    /// Already resolved; `None` once the result has been taken
    Ready(Option<Result<T>>),

    /// Running on the runtime, result arrives over the channel
    Running(oneshot::Receiver<Result<T>>),
}

// Nothing inside is ever pinned structurally.
impl<T> Unpin for Pending<T> {}

impl<T: Send + 'static> Pending<T> {
    /// Create an already completed operation
    pub fn ready(result: Result<T>) -> Self {
        Self {
            state: State::Ready(Some(result)),
        }
    }

    /// Run `operation` on the given runtime and return its completion handle
    ///
    /// Returns immediately; the work happens off the caller's thread of
    /// control.
    pub fn spawn<F>(runtime: &Handle, operation: F) -> Self
    where
        F: Future<Output = Result<T>> + Send + 'static,
    {
        let (tx, rx) = oneshot::channel();
        runtime.spawn(async move {
            let result = operation.await;
            // Receiver dropped means nobody is interested in the outcome.
            let _ = tx.send(result);
        });
        Self {
            state: State::Running(rx),
        }
    }

    /// Block the current thread until the operation resolves
    ///
    /// # Panics
    ///
    /// Panics if called from within an asynchronous execution context; use
    /// `.await` there instead.
    pub fn wait(self) -> Result<T> {
        match self.state {
            State::Ready(Some(result)) => result,
            State::Ready(None) => Err(already_taken()),
            State::Running(rx) => rx.blocking_recv().unwrap_or_else(|_| Err(abandoned())),
        }
    }

    /// True if the operation was created already resolved
    ///
    /// A spawned operation reports `false` even after its task finishes;
    /// await it or call [`wait`](Self::wait) to observe completion.
    pub fn is_immediate(&self) -> bool {
        matches!(self.state, State::Ready(Some(_)))
    }
}

impl<T> Future for Pending<T> {
    type Output = Result<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        let outcome = match &mut this.state {
            State::Ready(result) => {
                return Poll::Ready(result.take().unwrap_or_else(|| Err(already_taken())))
            }
            State::Running(rx) => match Pin::new(rx).poll(cx) {
                // A dropped sender means the task died before sending.
                Poll::Ready(received) => received.unwrap_or_else(|_| Err(abandoned())),
                Poll::Pending => return Poll::Pending,
            },
        };
        this.state = State::Ready(None);
        Poll::Ready(outcome)
    }
}

impl<T> std::fmt::Debug for Pending<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = match &self.state {
            State::Ready(Some(_)) => "ready",
            State::Ready(None) => "consumed",
            State::Running(_) => "running",
        };
        f.debug_struct("Pending").field("state", &state).finish()
    }
}

fn abandoned() -> KvError {
    KvError::BackendOperation("operation abandoned before completion".to_string())
}

fn already_taken() -> KvError {
    KvError::IllegalState("pending operation polled after completion".to_string())
}
