//! Typed API client and the factory that assembles it.
//!
//! [`ApiFactory`] binds a base URL to a configured [`HttpStack`] and
//! produces an [`ApiClient`] — the typed proxy where each method is one
//! HTTP call with JSON bodies. Errors are never caught here; transport,
//! status, and decode failures propagate to the caller's `Result`.

mod models;

pub use models::{
    LoginBody, LoginRequest, LoginResponse, Quote, RegistrationBody, RegistrationRequest,
    RegistrationResponse,
};

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::config::HttpConfig;
use crate::error::ApiError;
use crate::http::{build_client, HeaderAccessor, HttpStack};

/// User account operations.
#[async_trait]
pub trait UserApi: Send + Sync {
    async fn register(
        &self,
        request: RegistrationRequest,
    ) -> Result<RegistrationResponse, ApiError>;

    async fn login(&self, request: LoginRequest) -> Result<LoginResponse, ApiError>;
}

/// Quote-list data source.
#[async_trait]
pub trait QuoteApi: Send + Sync {
    async fn quotes(&self) -> Result<Vec<Quote>, ApiError>;
}

/// Builds typed API clients bound to a base URL.
pub struct ApiFactory {
    base_url: Url,
    headers: Arc<dyn HeaderAccessor>,
    config: HttpConfig,
}

impl ApiFactory {
    /// Parse and normalize the configured base URL.
    ///
    /// A trailing slash is enforced so `Url::join` resolves relative
    /// paths against the full base path instead of replacing its last
    /// segment.
    pub fn new(headers: Arc<dyn HeaderAccessor>, config: HttpConfig) -> Result<Self, ApiError> {
        let mut base_url = Url::parse(&config.base_url).map_err(|source| ApiError::BaseUrl {
            url: config.base_url.clone(),
            source,
        })?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            base_url,
            headers,
            config,
        })
    }

    /// Assemble a client: configured pool and timeouts, header injection,
    /// and logging per the configured policy. No network I/O happens here.
    pub fn create(&self) -> Result<ApiClient, ApiError> {
        let client = build_client(&self.config.pool_config(), &self.config.timeout_policy())?;
        let stack = HttpStack::new(client, Arc::clone(&self.headers), self.config.log_policy);
        Ok(ApiClient {
            stack,
            base_url: self.base_url.clone(),
        })
    }
}

/// The typed proxy: one method per endpoint, JSON in and out, all
/// failures surfaced as [`ApiError`].
pub struct ApiClient {
    stack: HttpStack,
    base_url: Url,
}

impl ApiClient {
    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url.join(path).map_err(|source| ApiError::Endpoint {
            path: path.to_string(),
            source,
        })
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        let request = self
            .stack
            .request(Method::POST, url)
            .json(body)
            .build()
            .map_err(|source| ApiError::RequestBuild { source })?;
        self.send(request).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.endpoint(path)?;
        let request = self
            .stack
            .request(Method::GET, url)
            .build()
            .map_err(|source| ApiError::RequestBuild { source })?;
        self.send(request).await
    }

    async fn send<T: DeserializeOwned>(&self, request: reqwest::Request) -> Result<T, ApiError> {
        let response = self.stack.execute(request).await?;
        let status = response.status();
        let body = response.text().await.map_err(ApiError::Transport)?;

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|source| ApiError::Decode { source })
    }
}

#[async_trait]
impl UserApi for ApiClient {
    async fn register(
        &self,
        request: RegistrationRequest,
    ) -> Result<RegistrationResponse, ApiError> {
        self.post_json("users", &request).await
    }

    async fn login(&self, request: LoginRequest) -> Result<LoginResponse, ApiError> {
        self.post_json("sessions", &request).await
    }
}

#[async_trait]
impl QuoteApi for ApiClient {
    async fn quotes(&self) -> Result<Vec<Quote>, ApiError> {
        self.get_json("quotes").await
    }
}
