//! CLI command definitions and handlers

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod args;
pub mod context;
pub mod secrets;

pub use args::{GlobalOptions, OutputFormat, ProjectRefArgs};
pub use context::CommandContext;

/// Supabase CLI - manage project secrets
#[derive(Parser, Debug)]
#[command(name = "supabase")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "SUPABASE_FORMAT",
        default_value = "table",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: OutputFormat,

    /// Personal access token for the Management API
    #[arg(
        long,
        global = true,
        env = "SUPABASE_ACCESS_TOKEN",
        hide_env = true,
        hide_env_values = true
    )]
    pub access_token: Option<String>,

    /// Override the Management API host
    #[arg(long, global = true, env = "SUPABASE_API_HOST", hide_env = true)]
    pub api_host: Option<String>,

    /// Override config file location
    #[arg(long, global = true, env = "SUPABASE_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "SUPABASE_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage Supabase project secrets
    #[command(subcommand)]
    Secrets(SecretsCommands),

    /// Display version information
    Version,
}

/// Secret management subcommands
#[derive(Subcommand, Debug)]
pub enum SecretsCommands {
    /// List all secrets of a project
    List {
        #[command(flatten)]
        project: ProjectRefArgs,
    },

    /// Set secrets on a project
    #[command(after_help = "EXAMPLES:\n  \
        supabase secrets set --project-ref abc123 API_KEY=sk-123 DB_PASS=hunter2\n  \
        supabase secrets set --project-ref abc123 --env-file .env")]
    Set {
        #[command(flatten)]
        project: ProjectRefArgs,

        /// Read secrets from a .env file
        #[arg(long)]
        env_file: Option<PathBuf>,

        /// Secrets to set, as NAME=VALUE
        #[arg(value_name = "NAME=VALUE")]
        pairs: Vec<String>,
    },

    /// Unset secrets on a project
    Unset {
        #[command(flatten)]
        project: ProjectRefArgs,

        /// Names of the secrets to unset
        #[arg(value_name = "NAME", required = true)]
        names: Vec<String>,
    },
}
