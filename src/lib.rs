//! debrief - Negotiation coaching feedback for voice-agent conversations
//!
//! Fetches a conversation transcript from ElevenLabs, asks Gemini for
//! structured feedback, and saves the result as a plain text report.

pub mod cli;
pub mod config;
pub mod conversation;
pub mod llm;
pub mod pipeline;
pub mod report;

use thiserror::Error;

/// Main error type for debrief
#[derive(Error, Debug)]
pub enum DebriefError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Error fetching conversation {id}: {reason}")]
    Fetch { id: String, reason: String },

    #[error("Error fetching conversation {id}: HTTP {status}")]
    FetchStatus { id: String, status: u16 },

    #[error("No transcript found in conversation {0}")]
    EmptyTranscript(String),

    #[error("Error generating feedback: {0}")]
    Generation(String),
}

pub type Result<T> = std::result::Result<T, DebriefError>;
