//! Mock Supabase API client for testing
//!
//! Provides a mock implementation of [`SecretsApi`] for unit testing
//! without making real API calls.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

use super::api::SecretsApi;
use super::models::{ApiResponse, Secret};
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// Configure expected responses via builder methods, then use in tests.
///
/// # Example
/// ```ignore
/// let mock = MockSecretsClient::new()
///     .with_delete_response(ApiResponse::new(404, "secret not found"))
///     .await;
///
/// let resp = mock.delete_secrets("abc123", &names).await?;
/// assert_eq!(resp.status, 404);
/// ```
pub struct MockSecretsClient {
    /// Response returned from list_secrets
    list_response: Arc<Mutex<ApiResponse>>,
    /// Response returned from create_secrets
    create_response: Arc<Mutex<ApiResponse>>,
    /// Response returned from delete_secrets
    delete_response: Arc<Mutex<ApiResponse>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Artificial latency before each call completes
    delay: Arc<Mutex<Option<Duration>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
    /// Captured requests for test assertions
    captured_requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl Default for MockSecretsClient {
    fn default() -> Self {
        Self {
            list_response: Arc::new(Mutex::new(ApiResponse::new(200, "[]"))),
            create_response: Arc::new(Mutex::new(ApiResponse::new(201, ""))),
            delete_response: Arc::new(Mutex::new(ApiResponse::new(200, ""))),
            error: Arc::new(Mutex::new(None)),
            delay: Arc::new(Mutex::new(None)),
            call_count: Arc::new(Mutex::new(CallCounts::default())),
            captured_requests: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub list_secrets: usize,
    pub create_secrets: usize,
    pub delete_secrets: usize,
}

impl CallCounts {
    /// Get total number of API calls made.
    pub fn total(&self) -> usize {
        self.list_secrets + self.create_secrets + self.delete_secrets
    }
}

/// A captured API request for test assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedRequest {
    /// The API method called (e.g., "delete_secrets")
    pub method: String,
    /// Project reference the call was addressed to
    pub project_ref: String,
    /// Secret names sent (delete) or carried in the payload (create)
    pub names: Vec<String>,
    /// Secret payload for create calls
    pub secrets: Vec<Secret>,
}

impl MockSecretsClient {
    /// Create a new mock client with success responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the response returned from list_secrets.
    pub async fn with_list_response(self, response: ApiResponse) -> Self {
        *self.list_response.lock().await = response;
        self
    }

    /// Configure the response returned from create_secrets.
    pub async fn with_create_response(self, response: ApiResponse) -> Self {
        *self.create_response.lock().await = response;
        self
    }

    /// Configure the response returned from delete_secrets.
    pub async fn with_delete_response(self, response: ApiResponse) -> Self {
        *self.delete_response.lock().await = response;
        self
    }

    /// Configure an error to return on the next API call.
    /// The error is consumed after one use.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    /// Make every call wait this long before answering.
    pub async fn with_delay(self, delay: Duration) -> Self {
        *self.delay.lock().await = Some(delay);
        self
    }

    /// Get the call counts for verification in tests.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Get all captured requests for test assertions.
    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.captured_requests.lock().await.clone()
    }

    /// Simulate latency, then consume a pending error if there is one.
    async fn check_error(&self) -> Result<()> {
        let delay = *self.delay.lock().await;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let mut error = self.error.lock().await;
        if let Some(e) = error.take() {
            return Err(e.into());
        }

        Ok(())
    }

    async fn capture_request(
        &self,
        method: &str,
        project_ref: &str,
        names: Vec<String>,
        secrets: Vec<Secret>,
    ) {
        let mut requests = self.captured_requests.lock().await;
        requests.push(CapturedRequest {
            method: method.to_string(),
            project_ref: project_ref.to_string(),
            names,
            secrets,
        });
    }
}

#[async_trait]
impl SecretsApi for MockSecretsClient {
    async fn list_secrets(&self, project_ref: &str) -> Result<ApiResponse> {
        self.capture_request("list_secrets", project_ref, Vec::new(), Vec::new())
            .await;
        self.call_count.lock().await.list_secrets += 1;
        self.check_error().await?;

        Ok(self.list_response.lock().await.clone())
    }

    async fn create_secrets(&self, project_ref: &str, secrets: &[Secret]) -> Result<ApiResponse> {
        let names = secrets.iter().map(|s| s.name.clone()).collect();
        self.capture_request("create_secrets", project_ref, names, secrets.to_vec())
            .await;
        self.call_count.lock().await.create_secrets += 1;
        self.check_error().await?;

        Ok(self.create_response.lock().await.clone())
    }

    async fn delete_secrets(&self, project_ref: &str, names: &[String]) -> Result<ApiResponse> {
        self.capture_request("delete_secrets", project_ref, names.to_vec(), Vec::new())
            .await;
        self.call_count.lock().await.delete_secrets += 1;
        self.check_error().await?;

        Ok(self.delete_response.lock().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[tokio::test]
    async fn test_mock_client_default_success() {
        let mock = MockSecretsClient::new();

        let resp = mock.delete_secrets("abc123", &[]).await.unwrap();
        assert_eq!(resp.status, 200);

        let resp = mock.list_secrets("abc123").await.unwrap();
        assert_eq!(resp.text(), "[]");
    }

    #[tokio::test]
    async fn test_mock_client_with_error() {
        let mock = MockSecretsClient::new()
            .with_error(ApiError::Network("connection refused".to_string()))
            .await;

        let result = mock.delete_secrets("abc123", &[]).await;
        assert!(matches!(result, Err(Error::Api(ApiError::Network(_)))));

        // Error is consumed after one use
        assert!(mock.delete_secrets("abc123", &[]).await.is_ok());
    }

    #[tokio::test]
    async fn test_mock_client_tracks_calls() {
        let mock = MockSecretsClient::new();
        let names = vec!["API_KEY".to_string()];

        mock.delete_secrets("abc123", &names).await.unwrap();
        mock.create_secrets("abc123", &[Secret::new("B", "2")])
            .await
            .unwrap();

        let counts = mock.call_counts().await;
        assert_eq!(counts.delete_secrets, 1);
        assert_eq!(counts.create_secrets, 1);
        assert_eq!(counts.total(), 2);

        let requests = mock.captured_requests().await;
        assert_eq!(requests[0].method, "delete_secrets");
        assert_eq!(requests[0].project_ref, "abc123");
        assert_eq!(requests[0].names, names);
        assert_eq!(requests[1].secrets, vec![Secret::new("B", "2")]);
    }
}
