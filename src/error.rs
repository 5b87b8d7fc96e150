//! Error types for the API request pipeline.
//!
//! Transport failures, non-2xx responses, and body decode failures all
//! surface through [`ApiError`]; nothing at this layer retries or swallows
//! an error — every failure reaches the caller's `Result`.

use thiserror::Error;

/// Errors surfaced by the HTTP stack and the typed API client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The configured base URL cannot be parsed.
    #[error("Invalid base URL '{url}': {source}")]
    BaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// A path could not be resolved against the base URL.
    #[error("Invalid endpoint path '{path}': {source}")]
    Endpoint {
        path: String,
        #[source]
        source: url::ParseError,
    },

    /// HTTP client construction failed.
    #[error("Failed to build HTTP client: {source}")]
    ClientBuild {
        #[source]
        source: reqwest::Error,
    },

    /// The outgoing request could not be constructed (e.g. body
    /// serialization failed). Local, nothing reached the wire.
    #[error("Failed to build request: {source}")]
    RequestBuild {
        #[source]
        source: reqwest::Error,
    },

    /// Connection, TLS, or timeout failure while talking to the server.
    #[error("Transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("Server returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body could not be decoded into the expected type.
    #[error("Failed to decode response body: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// Short classification string, used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::BaseUrl { .. } => "base_url",
            ApiError::Endpoint { .. } => "endpoint",
            ApiError::ClientBuild { .. } => "client_build",
            ApiError::RequestBuild { .. } => "request_build",
            ApiError::Transport(_) => "transport",
            ApiError::Status { .. } => "status",
            ApiError::Decode { .. } => "decode",
        }
    }

    /// Status code of the server response, if this error carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
