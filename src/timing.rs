//! Debounce and throttle combinators
//!
//! Each wrapper owns its own timer state, so two independently wrapped
//! callbacks never interfere with each other.
//!
//! - [`Debounced`] defers the call until `wait` has passed without another
//!   call. Deferred calls run on the Tokio runtime captured at construction.
//! - [`Throttled`] is leading-edge: the first call runs immediately and later
//!   calls are dropped until the window closes.

use crate::core::error::{Error, Result};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::Instant;

type Callback<A> = Arc<dyn Fn(A) + Send + Sync>;

/// A callback that only fires once calls stop arriving for `wait`.
///
/// Dropping the wrapper does not cancel a call that is already scheduled;
/// use [`Debounced::cancel`] for that.
pub struct Debounced<A> {
    callback: Callback<A>,
    wait: Duration,
    runtime: Handle,
    pending: Mutex<Option<JoinHandle<()>>>,
}

/// Wraps `callback` so that only the last call in any `wait` window fires.
///
/// # Errors
///
/// Returns [`Error::NoRuntime`] when called outside a Tokio runtime.
pub fn debounce<A, F>(callback: F, wait: Duration) -> Result<Debounced<A>>
where
    A: Send + 'static,
    F: Fn(A) + Send + Sync + 'static,
{
    let runtime = Handle::try_current().map_err(|_| Error::NoRuntime)?;
    Ok(Debounced::with_handle(runtime, callback, wait))
}

impl<A: Send + 'static> Debounced<A> {
    /// Builds a debouncer that schedules onto an explicit runtime handle.
    pub fn with_handle<F>(runtime: Handle, callback: F, wait: Duration) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self {
            callback: Arc::new(callback),
            wait,
            runtime,
            pending: Mutex::new(None),
        }
    }

    /// Cancels any pending call and schedules `args` to fire after `wait`.
    pub fn call(&self, args: A) {
        let callback = Arc::clone(&self.callback);
        let wait = self.wait;

        let mut pending = self.lock_pending();
        if let Some(previous) = pending.take() {
            previous.abort();
            tracing::trace!("Debounced call superseded");
        }

        *pending = Some(self.runtime.spawn(async move {
            tokio::time::sleep(wait).await;
            callback(args);
        }));
    }

    /// Drops the pending call, if any. Returns whether one was pending.
    pub fn cancel(&self) -> bool {
        match self.lock_pending().take() {
            Some(handle) if !handle.is_finished() => {
                handle.abort();
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.lock_pending()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    fn lock_pending(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// A callback that fires at most once per `limit` window.
pub struct Throttled<A> {
    callback: Callback<A>,
    limit: Duration,
    window_start: Mutex<Option<Instant>>,
}

/// Wraps `callback` with a leading-edge throttle.
pub fn throttle<A, F>(callback: F, limit: Duration) -> Throttled<A>
where
    F: Fn(A) + Send + Sync + 'static,
{
    Throttled {
        callback: Arc::new(callback),
        limit,
        window_start: Mutex::new(None),
    }
}

impl<A> Throttled<A> {
    /// Runs the callback now unless a window is still open.
    ///
    /// Returns `true` if the callback ran.
    pub fn call(&self, args: A) -> bool {
        let now = Instant::now();
        {
            let mut window_start = self.lock_window();
            if let Some(start) = *window_start
                && now.duration_since(start) < self.limit
            {
                return false;
            }
            *window_start = Some(now);
        }

        (self.callback)(args);
        true
    }

    /// Closes the current window so the next call fires immediately.
    pub fn reset(&self) {
        *self.lock_window() = None;
    }

    fn lock_window(&self) -> MutexGuard<'_, Option<Instant>> {
        self.window_start
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
