//! Secrets API trait

use async_trait::async_trait;

use crate::client::models::{ApiResponse, Secret};
use crate::error::Result;

/// Project secret operations for the Supabase Management API
///
/// Implementations hand back the raw status and body for every HTTP response
/// the server produces. An `Err` is reserved for transport failures
/// (timeouts, refused connections), so callers decide for themselves which
/// statuses count as success.
#[async_trait]
pub trait SecretsApi: Send + Sync {
    /// List all secrets of a project.
    ///
    /// `GET /v1/projects/{ref}/secrets`
    async fn list_secrets(&self, project_ref: &str) -> Result<ApiResponse>;

    /// Create or update secrets in bulk.
    ///
    /// `POST /v1/projects/{ref}/secrets` with a `[{name, value}]` body.
    async fn create_secrets(&self, project_ref: &str, secrets: &[Secret]) -> Result<ApiResponse>;

    /// Delete secrets by name.
    ///
    /// `DELETE /v1/projects/{ref}/secrets` with a `["NAME", ...]` body. The
    /// list is forwarded as given, empty or not.
    async fn delete_secrets(&self, project_ref: &str, names: &[String]) -> Result<ApiResponse>;
}
