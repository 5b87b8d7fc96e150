//! HTTP client construction and the per-request stack wrapper.

use std::sync::Arc;
use std::time::{Duration, Instant};

use reqwest::{Client, Method, Request, RequestBuilder, Response};
use serde::Deserialize;
use url::Url;

use super::headers::{with_headers, HeaderAccessor};
use crate::error::ApiError;

/// Bounds on the shared connection pool.
#[derive(Debug, Clone, Copy)]
pub struct PoolConfig {
    /// Idle connections kept per host.
    pub max_idle_per_host: usize,
    /// How long an idle connection stays pooled before being dropped.
    pub idle_timeout: Duration,
}

/// Connect and whole-request ceilings.
#[derive(Debug, Clone, Copy)]
pub struct TimeoutPolicy {
    pub connect: Duration,
    pub request: Duration,
}

/// Request/response logging verbosity, applied on every exchange.
///
/// Logging is observability only; it never alters a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogPolicy {
    /// No request/response logging.
    Off,
    /// One line per request and per response.
    Basic,
    /// `Basic` plus the outgoing header names and values.
    Headers,
}

/// Build a configured client: shared pool bounds plus timeout ceilings.
/// Construction performs no network I/O.
pub fn build_client(pool: &PoolConfig, timeouts: &TimeoutPolicy) -> Result<Client, ApiError> {
    Client::builder()
        .connect_timeout(timeouts.connect)
        .timeout(timeouts.request)
        .pool_max_idle_per_host(pool.max_idle_per_host)
        .pool_idle_timeout(pool.idle_timeout)
        .build()
        .map_err(|source| ApiError::ClientBuild { source })
}

/// A configured client plus the hooks applied to every outgoing request:
/// header injection from the [`HeaderAccessor`] and logging per
/// [`LogPolicy`].
pub struct HttpStack {
    client: Client,
    headers: Arc<dyn HeaderAccessor>,
    log_policy: LogPolicy,
}

impl HttpStack {
    pub fn new(client: Client, headers: Arc<dyn HeaderAccessor>, log_policy: LogPolicy) -> Self {
        Self {
            client,
            headers,
            log_policy,
        }
    }

    /// Start a request bound to this stack's client.
    pub fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.client.request(method, url)
    }

    /// Inject the current session headers and send.
    ///
    /// The accessor is consulted once, at send time, so a request always
    /// carries the headers current at the moment it goes out.
    pub async fn execute(&self, request: Request) -> Result<Response, ApiError> {
        let request = with_headers(&self.headers.get(), request);

        match self.log_policy {
            LogPolicy::Off => {}
            LogPolicy::Basic => {
                tracing::debug!(method = %request.method(), url = %request.url(), "--> request");
            }
            LogPolicy::Headers => {
                tracing::debug!(method = %request.method(), url = %request.url(), "--> request");
                for (name, value) in request.headers() {
                    tracing::debug!(header = %name, value = ?value, "--> header");
                }
            }
        }

        let started = Instant::now();
        let response = self
            .client
            .execute(request)
            .await
            .map_err(ApiError::Transport)?;

        if self.log_policy != LogPolicy::Off {
            tracing::debug!(
                status = response.status().as_u16(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "<-- response"
            );
        }

        Ok(response)
    }
}
