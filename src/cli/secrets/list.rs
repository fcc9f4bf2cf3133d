//! `supabase secrets list` command

use std::io::Write;

use tokio_util::sync::CancellationToken;

use crate::cli::OutputFormat;
use crate::client::models::Secret;
use crate::client::{SecretsApi, cancellable};
use crate::error::{ApiError, Result};
use crate::fs::Fs;
use crate::models::SecretDisplay;
use crate::output::Formattable;

const NO_SECRETS: &str = "No secrets found.";

/// Print the project's secrets as NAME / DIGEST rows, sorted by name.
pub async fn run(
    ctx: &CancellationToken,
    api: &dyn SecretsApi,
    _fsys: &dyn Fs,
    project_ref: &str,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    let resp = cancellable(ctx, api.list_secrets(project_ref)).await?;

    if resp.status != 200 {
        return Err(ApiError::unexpected_status("retrieving", resp.text()).into());
    }

    let mut secrets: Vec<Secret> = resp.json()?;
    secrets.sort_by(|a, b| a.name.cmp(&b.name));

    let display: Vec<SecretDisplay> = secrets.iter().map(SecretDisplay::from).collect();
    if display.is_empty() && format != OutputFormat::Json {
        writeln!(out, "{}", NO_SECRETS)?;
        return Ok(());
    }
    writeln!(out, "{}", display.format(format)?)?;

    Ok(())
}
