//! CLI command implementations

use anyhow::{Context, Result};
use clap::CommandFactory;
use clap_complete::Shell;
use std::io::Write;
use std::path::PathBuf;

use crate::cli::args::{Cli, ConfigCommand};
use crate::config::Settings;
use crate::conversation::{format_transcript, ElevenLabsClient};
use crate::llm::{build_feedback_prompt, build_provider};
use crate::pipeline::{fetch_stage, require_transcript, Pipeline};
use crate::DebriefError;

/// Run the full feedback pipeline for one conversation
pub async fn run_pipeline(
    settings: &Settings,
    conversation_id: Option<String>,
    output: Option<PathBuf>,
    model: Option<String>,
) -> Result<()> {
    let conversation_id = settings.conversation_id(conversation_id.as_deref())?;

    let mut settings = settings.clone();
    if let Some(model) = model {
        settings.llm.model = model;
    }
    let output = output.unwrap_or_else(|| settings.output.path.clone());

    let source = ElevenLabsClient::from_settings(&settings)?;
    let provider =
        build_provider(&settings).map_err(|e| DebriefError::Generation(format!("{e:#}")))?;

    let outcome = Pipeline::new(Box::new(source), provider, output)
        .run(&conversation_id)
        .await?;

    tracing::debug!(
        conversation_id = %outcome.conversation_id,
        messages = outcome.message_count,
        saved = outcome.saved_to.is_some(),
        "Pipeline finished"
    );

    Ok(())
}

/// Fetch a conversation and print its transcript (or the raw record)
pub async fn fetch_conversation(
    settings: &Settings,
    conversation_id: Option<String>,
    json: bool,
) -> Result<()> {
    let conversation_id = settings.conversation_id(conversation_id.as_deref())?;
    let source = ElevenLabsClient::from_settings(settings)?;

    let record = fetch_stage(&source, &conversation_id).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(());
    }

    println!();
    if record.transcript.is_empty() {
        println!("(No transcript available)");
    } else {
        println!("{}", format_transcript(&record.transcript));
    }

    Ok(())
}

/// Print the feedback prompt that would be sent for a conversation
pub async fn show_prompt(settings: &Settings, conversation_id: Option<String>) -> Result<()> {
    let conversation_id = settings.conversation_id(conversation_id.as_deref())?;
    let source = ElevenLabsClient::from_settings(settings)?;

    let record = fetch_stage(&source, &conversation_id).await?;
    let messages = require_transcript(&record, &conversation_id)?;

    println!();
    println!("{}", build_feedback_prompt(&format_transcript(messages)));

    Ok(())
}

/// Handle config subcommands
pub fn config_command(settings: &Settings, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let mut shown = settings.clone();
            shown.conversation.api_key = mask_secret(&shown.conversation.api_key);
            shown.llm.api_key = mask_secret(&shown.llm.api_key);
            let toml = toml::to_string_pretty(&shown)?;
            println!("{}", toml);
        }
        ConfigCommand::Path => {
            let path = Settings::config_path()?;
            println!("{}", path.display());
        }
        ConfigCommand::Init { force } => {
            let path = Settings::config_path()?;
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            Settings::write_default(&path)?;
            println!("Configuration initialized at: {}", path.display());
        }
    }

    Ok(())
}

/// Write the completion script for `shell`.
pub fn write_completions(shell: Shell, out: &mut dyn Write) -> Result<()> {
    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, bin_name, out);
    out.flush().context("Failed to write completion script")
}

// Helper functions

fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    match chars.len() {
        0 => String::new(),
        n if n <= 8 => "*".repeat(n),
        n => {
            let tail: String = chars[n - 4..].iter().collect();
            format!("{}{}", "*".repeat(n - 4), tail)
        }
    }
}
