//! Combine-latest join over the three registration fields.
//!
//! An explicit state machine stands in for a reactive combine-latest
//! operator: each update records the latest value for its field and
//! recomputes the derived "submit enabled" signal from the most recent
//! value of all three. No value is published until every field has
//! emitted at least once.

use parking_lot::Mutex;
use tokio::sync::watch;

/// The three registration form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Username,
    Email,
    Password,
}

/// Latest-value holder for a single form field.
///
/// Written by UI input events, read by the flow at submit time. Starts
/// empty and lives for the owning screen's lifetime.
#[derive(Debug, Default)]
pub struct FieldState {
    value: Mutex<String>,
}

impl FieldState {
    pub fn set(&self, value: &str) {
        *self.value.lock() = value.to_string();
    }

    pub fn get(&self) -> String {
        self.value.lock().clone()
    }
}

#[derive(Debug, Default)]
struct JoinState {
    username: Option<String>,
    email: Option<String>,
    password: Option<String>,
    halted: bool,
}

impl JoinState {
    fn slot(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::Username => &mut self.username,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
        }
    }

    /// `None` until all three fields have emitted, then the AND of
    /// "latest value non-empty" across them.
    fn derived(&self) -> Option<bool> {
        match (&self.username, &self.email, &self.password) {
            (Some(u), Some(e), Some(p)) => {
                Some(!u.is_empty() && !e.is_empty() && !p.is_empty())
            }
            _ => None,
        }
    }
}

/// Derives the "submit enabled" signal from the three field sources.
///
/// The signal is published on a watch channel carrying `Option<bool>`:
/// `None` while any source has yet to emit, `Some(_)` afterwards,
/// recomputed on every update and never cached stale.
pub struct ValidationPipeline {
    state: Mutex<JoinState>,
    enabled_tx: watch::Sender<Option<bool>>,
}

impl ValidationPipeline {
    pub fn new() -> Self {
        let (enabled_tx, _) = watch::channel(None);
        Self {
            state: Mutex::new(JoinState::default()),
            enabled_tx,
        }
    }

    /// Record the latest value for `field` and recompute the signal.
    /// Ignored once the pipeline has halted.
    pub fn update(&self, field: Field, value: &str) {
        let mut state = self.state.lock();
        if state.halted {
            return;
        }
        *state.slot(field) = Some(value.to_string());
        if let Some(enabled) = state.derived() {
            self.enabled_tx.send_replace(Some(enabled));
        }
    }

    /// A field source failed: log and stop emitting.
    ///
    /// Log-and-halt, not retry — the last published value stays in the
    /// channel and no further updates are accepted.
    pub fn fail(&self, field: Field, error: &dyn std::error::Error) {
        let mut state = self.state.lock();
        if state.halted {
            return;
        }
        state.halted = true;
        tracing::warn!(?field, %error, "Field source failed; validation pipeline halted");
    }

    /// Subscribe to the derived signal.
    pub fn subscribe(&self) -> watch::Receiver<Option<bool>> {
        self.enabled_tx.subscribe()
    }

    /// Current value of the derived signal.
    pub fn submit_enabled(&self) -> Option<bool> {
        *self.enabled_tx.borrow()
    }
}

impl Default for ValidationPipeline {
    fn default() -> Self {
        Self::new()
    }
}
