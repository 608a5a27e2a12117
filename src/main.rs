//! debrief - Negotiation coaching feedback for voice-agent conversations
//!
//! Entry point for the debrief CLI application.

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use debrief::cli::{commands, Cli, Commands};
use debrief::config::Settings;

#[tokio::main]
async fn main() -> ExitCode {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match execute(cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            println!("✗ {:#}", err);
            ExitCode::FAILURE
        }
    }
}

async fn execute(command: Commands) -> Result<()> {
    match command {
        Commands::Completions { shell } => {
            commands::write_completions(shell, &mut std::io::stdout())?;
        }
        command => {
            // Load configuration only for runtime commands.
            let settings = Settings::load()?;

            match command {
                Commands::Run {
                    conversation_id,
                    output,
                    model,
                } => {
                    commands::run_pipeline(&settings, conversation_id, output, model).await?;
                }
                Commands::Fetch {
                    conversation_id,
                    json,
                } => {
                    commands::fetch_conversation(&settings, conversation_id, json).await?;
                }
                Commands::Prompt { conversation_id } => {
                    commands::show_prompt(&settings, conversation_id).await?;
                }
                Commands::Config(config_cmd) => {
                    commands::config_command(&settings, config_cmd)?;
                }
                Commands::Completions { .. } => unreachable!(),
            }
        }
    }

    Ok(())
}
