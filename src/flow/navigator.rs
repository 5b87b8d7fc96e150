use crate::api::RegistrationResponse;
use crate::error::ApiError;

/// One-way outcome notifications from the flow to the presentation layer.
///
/// Callbacks are invoked from the flow's worker task; implementations
/// that touch UI state marshal to their own UI-affine thread.
pub trait Navigator: Send + Sync {
    /// Navigate to the login screen.
    fn to_login(&self);

    /// A submission started; show the progress indicator.
    fn show_progress(&self);

    /// The submission settled; hide the progress indicator.
    fn hide_progress(&self);

    /// The submission failed.
    fn to_error(&self, error: &ApiError);

    /// The submission succeeded.
    fn registered(&self, response: RegistrationResponse);
}
