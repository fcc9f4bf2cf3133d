//! `supabase secrets set` command

use std::io::Write;
use std::path::Path;

use colored::Colorize;
use tokio_util::sync::CancellationToken;

use super::{env_file, finished};
use crate::client::models::Secret;
use crate::client::{SecretsApi, cancellable};
use crate::error::{ApiError, Error, Result};
use crate::fs::Fs;

const COMMAND: &str = "supabase secrets set";

/// Names under this prefix are managed by the platform.
const RESERVED_PREFIX: &str = "SUPABASE_";

/// Create or update secrets from an optional env file plus `NAME=VALUE` args.
///
/// Args are applied after the env file, so they win on duplicate names.
/// Success is a 201 from the API.
pub async fn run(
    ctx: &CancellationToken,
    api: &dyn SecretsApi,
    fsys: &dyn Fs,
    project_ref: &str,
    env_file: Option<&Path>,
    pairs: &[String],
    out: &mut dyn Write,
) -> Result<()> {
    let secrets = collect_secrets(fsys, env_file, pairs)?;

    let resp = cancellable(ctx, api.create_secrets(project_ref, &secrets)).await?;

    if resp.status != 201 {
        return Err(ApiError::unexpected_status("setting", resp.text()).into());
    }

    finished(out, COMMAND)
}

fn collect_secrets(
    fsys: &dyn Fs,
    env_file: Option<&Path>,
    pairs: &[String],
) -> Result<Vec<Secret>> {
    let mut entries: Vec<(String, String)> = Vec::new();

    if let Some(path) = env_file {
        let contents = fsys.read_to_string(path).map_err(|e| {
            Error::InvalidInput(format!(
                "Failed to read env file {}: {}",
                path.display(),
                e
            ))
        })?;
        entries.extend(env_file::parse(&contents));
    }

    for pair in pairs {
        let (name, value) = pair.split_once('=').ok_or_else(|| {
            Error::InvalidInput(format!(
                "Invalid secret pair: {}. Must be NAME=VALUE.",
                pair
            ))
        })?;
        if !env_file::is_valid_name(name) {
            return Err(Error::InvalidInput(format!(
                "Invalid secret name: {:?}. Names may only contain letters, digits and underscores.",
                name
            )));
        }
        entries.push((name.to_string(), value.to_string()));
    }

    let mut secrets: Vec<Secret> = Vec::with_capacity(entries.len());
    for (name, value) in entries {
        if name.starts_with(RESERVED_PREFIX) {
            eprintln!(
                "{} Env name cannot start with {}, skipping: {}",
                "⚠".yellow(),
                RESERVED_PREFIX,
                name
            );
            continue;
        }

        match secrets.iter().position(|s| s.name == name) {
            Some(idx) => secrets[idx].value = value,
            None => secrets.push(Secret::new(name, value)),
        }
    }

    if secrets.is_empty() {
        return Err(Error::InvalidInput(
            "No arguments found. Use --env-file to read from a .env file.".to_string(),
        ));
    }

    Ok(secrets)
}
