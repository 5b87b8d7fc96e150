//! Client core for the Quotedeck application.
//!
//! This crate is the transport and flow layer behind the app's screens:
//! a configured HTTP stack with per-request header injection, a typed
//! JSON API client, and the registration flow with its combine-latest
//! field validation. Screens, rendering, and preference storage live
//! outside the crate and are supplied as injected collaborators.
//!
//! # Architecture
//!
//! ```text
//! UI input ──→ FieldState ──→ ValidationPipeline ──→ enabled signal ──→ UI
//! submit ──→ RegistrationFlow ──→ ApiClient ──→ HttpStack ──→ network
//!                 │                                  │
//!                 └──→ Navigator callbacks           └──→ HeaderAccessor
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod flow;
pub mod http;
pub mod scope;
pub mod trace;

pub use api::{ApiClient, ApiFactory, QuoteApi, UserApi};
pub use error::ApiError;
pub use flow::{Navigator, RegistrationFlow, ValidationPipeline};
pub use scope::ScreenScope;
