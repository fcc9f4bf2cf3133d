//! Command execution context
//!
//! Provides a unified context for command execution, eliminating boilerplate
//! for config loading, token resolution, and client initialization.

use std::sync::Arc;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::client::{SecretsApi, SupabaseClient};
use crate::config::Config;
use crate::error::Result;
use crate::fs::{Fs, OsFs};

/// Context for command execution containing config, client, and runtime options.
///
/// Commands borrow the client and filesystem as trait objects, so tests can
/// build the same operations around a mock client and an in-memory filesystem.
pub struct CommandContext {
    /// Loaded configuration with flag/env overrides applied
    pub config: Config,
    /// Authenticated Management API client
    pub client: Arc<dyn SecretsApi>,
    /// Filesystem handle
    pub fsys: Arc<dyn Fs>,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context with full initialization.
    ///
    /// This handles:
    /// - Loading config from path (or default location)
    /// - Applying access token and API host overrides
    /// - Validating that an access token is present
    /// - Creating the API client
    ///
    /// # Errors
    /// Returns error if config cannot be loaded or no access token is available.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_at(opts.config_ref())?
            .with_overrides(opts.access_token_ref(), opts.api_host_ref());

        let token = config.require_access_token()?;
        let client = SupabaseClient::with_host(token, Some(config.api_host().to_string()))?;

        Ok(Self {
            client: Arc::new(client),
            fsys: Arc::new(OsFs),
            format: opts.format,
            config,
        })
    }
}
