//! HTTP stack configuration.

mod loader;

pub use loader::ConfigError;

use std::time::Duration;

use serde::Deserialize;

use crate::http::{LogPolicy, PoolConfig, TimeoutPolicy};

/// Configuration for the API factory and its HTTP stack.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Base URL every API path is resolved against.
    pub base_url: String,
    /// TCP connect ceiling in seconds.
    pub connect_timeout_seconds: u64,
    /// Whole-request ceiling in seconds.
    pub request_timeout_seconds: u64,
    /// Idle connections kept per host.
    pub pool_max_idle_per_host: usize,
    /// How long an idle connection stays pooled, in seconds.
    pub pool_idle_timeout_seconds: u64,
    /// Request/response logging verbosity.
    pub log_policy: LogPolicy,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            connect_timeout_seconds: 5,
            request_timeout_seconds: 30,
            pool_max_idle_per_host: 8,
            pool_idle_timeout_seconds: 90,
            log_policy: LogPolicy::Basic,
        }
    }
}

impl HttpConfig {
    pub fn timeout_policy(&self) -> TimeoutPolicy {
        TimeoutPolicy {
            connect: Duration::from_secs(self.connect_timeout_seconds),
            request: Duration::from_secs(self.request_timeout_seconds),
        }
    }

    pub fn pool_config(&self) -> PoolConfig {
        PoolConfig {
            max_idle_per_host: self.pool_max_idle_per_host,
            idle_timeout: Duration::from_secs(self.pool_idle_timeout_seconds),
        }
    }
}
