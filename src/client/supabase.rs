//! Supabase Management API client implementation

use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use log::debug;
use reqwest::{Client as HttpClient, Method, RequestBuilder};

use super::SecretsApi;
use super::models::{ApiResponse, Secret};
use crate::config::DEFAULT_API_HOST;
use crate::error::{ApiError, Result};

/// Management API budget: 120 requests per minute
const RATE_LIMIT_PER_MINUTE: u32 = 120;

/// Per-request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Supabase Management API client
pub struct SupabaseClient {
    http: HttpClient,
    base_url: String,
    access_token: String,
    rate_limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
}

impl SupabaseClient {
    /// Create a client against the production API host.
    #[cfg(test)]
    pub fn new(access_token: impl Into<String>) -> Result<Self> {
        Self::with_host(access_token, None)
    }

    /// Create a client with an optional custom API host.
    ///
    /// The host is the scheme and authority only (e.g. `http://localhost:8080`);
    /// the `/v1` prefix is added per request.
    pub fn with_host(access_token: impl Into<String>, api_host: Option<String>) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("supabase-secrets/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let base_url = api_host
            .unwrap_or_else(|| DEFAULT_API_HOST.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            http,
            base_url,
            access_token: access_token.into(),
            rate_limiter: Arc::new(RateLimiter::direct(Quota::per_minute(
                NonZeroU32::new(RATE_LIMIT_PER_MINUTE).unwrap_or(NonZeroU32::MIN),
            ))),
        })
    }

    fn secrets_path(project_ref: &str) -> String {
        format!("/v1/projects/{}/secrets", project_ref)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.http.request(method, url).bearer_auth(&self.access_token)
    }

    /// Send a request and collect status and body without interpreting them.
    async fn send(
        &self,
        method: &Method,
        path: &str,
        request: RequestBuilder,
    ) -> Result<ApiResponse> {
        self.rate_limiter.until_ready().await;

        debug!("{} {}", method, path);
        let response = request.send().await.map_err(ApiError::from)?;

        let status = response.status();
        let body = response.bytes().await.map_err(ApiError::from)?;
        debug!("{} {} -> {} ({} bytes)", method, path, status, body.len());

        Ok(ApiResponse::new(status.as_u16(), body.to_vec()))
    }
}

#[async_trait]
impl SecretsApi for SupabaseClient {
    async fn list_secrets(&self, project_ref: &str) -> Result<ApiResponse> {
        let path = Self::secrets_path(project_ref);
        let request = self.request(Method::GET, &path);
        self.send(&Method::GET, &path, request).await
    }

    async fn create_secrets(&self, project_ref: &str, secrets: &[Secret]) -> Result<ApiResponse> {
        let path = Self::secrets_path(project_ref);
        let request = self.request(Method::POST, &path).json(secrets);
        self.send(&Method::POST, &path, request).await
    }

    async fn delete_secrets(&self, project_ref: &str, names: &[String]) -> Result<ApiResponse> {
        let path = Self::secrets_path(project_ref);
        let request = self.request(Method::DELETE, &path).json(names);
        self.send(&Method::DELETE, &path, request).await
    }
}
