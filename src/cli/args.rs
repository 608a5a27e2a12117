//! CLI argument definitions using clap

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// debrief - Negotiation coaching feedback for voice-agent conversations
#[derive(Parser, Debug)]
#[command(name = "debrief")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch a conversation, generate feedback, and save the report
    Run {
        /// ElevenLabs conversation ID (defaults to conversation.default_id)
        conversation_id: Option<String>,

        /// Report file path (defaults to output.path)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Gemini model to use (defaults to llm.model)
        #[arg(short, long)]
        model: Option<String>,
    },

    /// Fetch a conversation and print its transcript
    Fetch {
        /// ElevenLabs conversation ID (defaults to conversation.default_id)
        conversation_id: Option<String>,

        /// Print the full conversation record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the feedback prompt for a conversation without calling the model
    Prompt {
        /// ElevenLabs conversation ID (defaults to conversation.default_id)
        conversation_id: Option<String>,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration (API keys masked)
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
