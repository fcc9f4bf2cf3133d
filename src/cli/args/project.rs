//! Project selection argument

use clap::Args;

/// Target project for a secrets command
#[derive(Debug, Clone, Args)]
pub struct ProjectRefArgs {
    /// Project ref of the Supabase project
    #[arg(long, env = "SUPABASE_PROJECT_REF", hide_env = true)]
    pub project_ref: String,
}
