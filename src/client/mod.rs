//! Supabase Management API client

use std::future::Future;

use tokio_util::sync::CancellationToken;

pub mod api;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod supabase;

pub use api::SecretsApi;
#[cfg(test)]
pub use mock::MockSecretsClient;
pub use supabase::SupabaseClient;

use crate::error::{ApiError, Result};

/// Drive an API call to completion unless `ctx` is cancelled first.
///
/// A token that is already cancelled short-circuits before the call is polled,
/// so no request goes out. Cancellation during the call drops the in-flight
/// request future.
pub async fn cancellable<T, F>(ctx: &CancellationToken, call: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    if ctx.is_cancelled() {
        return Err(ApiError::Cancelled.into());
    }

    tokio::select! {
        biased;
        _ = ctx.cancelled() => Err(ApiError::Cancelled.into()),
        result = call => result,
    }
}
