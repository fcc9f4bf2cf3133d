//! Supabase CLI - manage project secrets from the command line

use clap::Parser;
use tokio_util::sync::CancellationToken;

mod cli;
mod client;
mod config;
mod error;
mod fs;
mod models;
mod output;

use cli::{Cli, CommandContext, Commands, GlobalOptions, SecretsCommands};
use error::{Error, Result};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let ctx = CancellationToken::new();
    let on_interrupt = ctx.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            log::debug!("Interrupt received, cancelling");
            on_interrupt.cancel();
        }
    });

    if let Err(err) = run(cli, &ctx).await {
        if let Error::Api(api_err) = &err {
            if api_err.is_transport() {
                log::debug!("Transport failure: {:?}", api_err);
            }
        }
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

/// Logs go to stderr; `RUST_LOG` overrides the level picked here.
fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

async fn run(cli: Cli, ctx: &CancellationToken) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Version => {
            println!("supabase-secrets version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Secrets(cmd) => {
            let cmd_ctx = CommandContext::new(&opts)?;
            log::debug!("Using API host {}", cmd_ctx.config.api_host());
            let api = cmd_ctx.client.as_ref();
            let fsys = cmd_ctx.fsys.as_ref();
            let mut stdout = std::io::stdout().lock();

            match cmd {
                SecretsCommands::List { project } => {
                    cli::secrets::list::run(
                        ctx,
                        api,
                        fsys,
                        &project.project_ref,
                        cmd_ctx.format,
                        &mut stdout,
                    )
                    .await
                }
                SecretsCommands::Set {
                    project,
                    env_file,
                    pairs,
                } => {
                    cli::secrets::set::run(
                        ctx,
                        api,
                        fsys,
                        &project.project_ref,
                        env_file.as_deref(),
                        &pairs,
                        &mut stdout,
                    )
                    .await
                }
                SecretsCommands::Unset { project, names } => {
                    cli::secrets::unset::run(
                        ctx,
                        api,
                        fsys,
                        &project.project_ref,
                        &names,
                        &mut stdout,
                    )
                    .await
                }
            }
        }
    }
}
