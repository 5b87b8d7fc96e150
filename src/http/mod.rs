//! Configured HTTP stack: client construction, header injection, and
//! per-request logging.
//!
//! reqwest has no okhttp-style interceptor chain, so the interceptor seam
//! lives in [`HttpStack`]: every outgoing request passes through the
//! header accessor and the logging policy before it hits the wire.

mod client;
mod headers;

pub use client::{build_client, HttpStack, LogPolicy, PoolConfig, TimeoutPolicy};
pub use headers::{with_headers, HeaderAccessor, HeaderSet};
