//! Registration flow: field capture, combine-latest validation, and
//! submission orchestration.

mod navigator;
mod registration;
mod validation;

pub use navigator::Navigator;
pub use registration::{FlowState, RegistrationFlow};
pub use validation::{Field, FieldState, ValidationPipeline};
