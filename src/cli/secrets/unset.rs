//! `supabase secrets unset` command

use std::io::Write;

use tokio_util::sync::CancellationToken;

use super::finished;
use crate::client::{SecretsApi, cancellable};
use crate::error::{ApiError, Result};
use crate::fs::Fs;

const COMMAND: &str = "supabase secrets unset";

/// Delete `names` from the project's secrets.
///
/// Exactly one delete request is sent, carrying the names as given. A 200
/// answer prints the confirmation line to `out`; any other status fails with
/// the response body embedded in the error. Transport failures, including
/// cancellation through `ctx`, are returned as the client produced them.
pub async fn run(
    ctx: &CancellationToken,
    api: &dyn SecretsApi,
    _fsys: &dyn Fs,
    project_ref: &str,
    names: &[String],
    out: &mut dyn Write,
) -> Result<()> {
    let resp = cancellable(ctx, api.delete_secrets(project_ref, names)).await?;

    if resp.status != 200 {
        return Err(ApiError::unexpected_status("unsetting", resp.text()).into());
    }

    finished(out, COMMAND)
}
