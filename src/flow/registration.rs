//! Submission orchestration for the registration screen.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::watch;

use crate::api::{RegistrationRequest, UserApi};
use crate::flow::navigator::Navigator;
use crate::flow::validation::{Field, FieldState, ValidationPipeline};
use crate::scope::ScreenScope;

/// Observable submission state.
///
/// `Succeeded` and `Failed` are re-entry points: `submit` may be called
/// again from either, starting a fresh `Submitting` cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Captures field input, drives the validation pipeline, and on submit
/// issues the registration call, reporting the outcome to the navigator.
///
/// The UI is expected to disable the submit trigger while `Submitting`;
/// the flow itself does not guard against concurrent or empty-field
/// submissions.
pub struct RegistrationFlow {
    api: Arc<dyn UserApi>,
    navigator: Arc<dyn Navigator>,
    scope: ScreenScope,
    pipeline: ValidationPipeline,
    username: FieldState,
    email: FieldState,
    password: FieldState,
    state: Arc<Mutex<FlowState>>,
    progress_visible: Arc<AtomicBool>,
}

impl RegistrationFlow {
    pub fn new(api: Arc<dyn UserApi>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            api,
            navigator,
            scope: ScreenScope::new(),
            pipeline: ValidationPipeline::new(),
            username: FieldState::default(),
            email: FieldState::default(),
            password: FieldState::default(),
            state: Arc::new(Mutex::new(FlowState::Idle)),
            progress_visible: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn on_username_input(&self, text: &str) {
        self.username.set(text);
        self.pipeline.update(Field::Username, text);
    }

    pub fn on_email_input(&self, text: &str) {
        self.email.set(text);
        self.pipeline.update(Field::Email, text);
    }

    pub fn on_password_input(&self, text: &str) {
        self.password.set(text);
        self.pipeline.update(Field::Password, text);
    }

    /// The derived "submit enabled" signal.
    pub fn submit_enabled(&self) -> watch::Receiver<Option<bool>> {
        self.pipeline.subscribe()
    }

    pub fn pipeline(&self) -> &ValidationPipeline {
        &self.pipeline
    }

    pub fn state(&self) -> FlowState {
        *self.state.lock()
    }

    pub fn go_to_login(&self) {
        self.navigator.to_login();
    }

    /// Capture the current field values and issue the registration call.
    ///
    /// `show_progress` fires synchronously before the call is spawned;
    /// `hide_progress` fires exactly once when the call settles, followed
    /// by exactly one of `registered` / `to_error`. Field values are sent
    /// as captured — empty fields included — since the UI gates the
    /// trigger through the enabled signal.
    pub fn submit(&self) {
        if !self.scope.is_active() {
            return;
        }

        let request = RegistrationRequest::new(
            self.username.get(),
            self.email.get(),
            self.password.get(),
        );

        *self.state.lock() = FlowState::Submitting;
        self.progress_visible.store(true, Ordering::SeqCst);
        self.navigator.show_progress();

        let api = Arc::clone(&self.api);
        let navigator = Arc::clone(&self.navigator);
        let scope = self.scope.clone();
        let state = Arc::clone(&self.state);
        let progress_visible = Arc::clone(&self.progress_visible);

        self.scope.spawn(async move {
            let result = api.register(request).await;

            // The state lock serializes this whole callback section with
            // teardown, which flips the scope inactive under the same
            // lock. Once the active check passes, every callback below
            // lands before teardown can return.
            let mut state = state.lock();
            if !scope.is_active() {
                return;
            }
            if progress_visible.swap(false, Ordering::SeqCst) {
                navigator.hide_progress();
            }

            match result {
                Ok(response) => {
                    *state = FlowState::Succeeded;
                    navigator.registered(response);
                }
                Err(error) => {
                    *state = FlowState::Failed;
                    tracing::debug!(kind = error.kind(), %error, "Registration failed");
                    navigator.to_error(&error);
                }
            }
        });
    }

    /// Release every live subscription and pending submission.
    ///
    /// If a submission is in flight, its pending `hide_progress` fires
    /// here, inside the teardown call itself; after `teardown` returns no
    /// navigator callback is invoked again. Taking the state lock first
    /// waits out a worker that is mid-callback, so a settling submission
    /// finishes delivering before the scope goes inactive.
    pub fn teardown(&self) {
        let mut state = self.state.lock();
        self.scope.teardown();
        if self.progress_visible.swap(false, Ordering::SeqCst) {
            self.navigator.hide_progress();
        }
        if *state == FlowState::Submitting {
            *state = FlowState::Idle;
        }
    }
}
