//! Scoped disposal of screen-owned work.
//!
//! Every subscription and pending submission a screen owns is released
//! through one teardown call instead of per-subscription cleanup, so no
//! callback can leak into a destroyed screen.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::task::AbortHandle;

/// Handle to a screen's task scope. Cloning shares the same scope.
#[derive(Clone)]
pub struct ScreenScope {
    inner: Arc<ScopeInner>,
}

struct ScopeInner {
    active: AtomicBool,
    tasks: Mutex<Vec<AbortHandle>>,
}

impl ScreenScope {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(ScopeInner {
                active: AtomicBool::new(true),
                tasks: Mutex::new(Vec::new()),
            }),
        }
    }

    /// False once `teardown` has run.
    pub fn is_active(&self) -> bool {
        self.inner.active.load(Ordering::SeqCst)
    }

    /// Spawn a future owned by this scope. On a torn-down scope the
    /// future is dropped without running.
    pub fn spawn<F>(&self, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        if !self.is_active() {
            return;
        }
        let handle = tokio::spawn(future);
        self.inner.tasks.lock().push(handle.abort_handle());
    }

    /// Mark the scope inactive and abort every owned task. Idempotent.
    ///
    /// The flag is cleared before aborting so a task that is mid-poll
    /// sees the scope as inactive and stays silent.
    pub fn teardown(&self) {
        if self.inner.active.swap(false, Ordering::SeqCst) {
            let handles: Vec<AbortHandle> = self.inner.tasks.lock().drain(..).collect();
            for handle in handles {
                handle.abort();
            }
            tracing::debug!("Screen scope torn down");
        }
    }
}

impl Default for ScreenScope {
    fn default() -> Self {
        Self::new()
    }
}
