//! Feedback pipeline orchestration
//!
//! fetch -> format -> generate -> save, strictly forward. The first three
//! stages are fatal on error; a failed save is reported and the run still
//! succeeds because the feedback has already been printed.

use std::path::{Path, PathBuf};

use crate::conversation::{format_transcript, ConversationRecord, ConversationSource, Message};
use crate::llm::{FeedbackRequest, LlmProvider};
use crate::report::{write_report, BANNER_WIDTH};
use crate::{DebriefError, Result};

/// What a completed run produced.
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    pub conversation_id: String,
    pub message_count: usize,
    pub transcript_chars: usize,
    pub feedback: String,
    /// `None` when the report file could not be written
    pub saved_to: Option<PathBuf>,
}

/// Single-conversation feedback pipeline.
pub struct Pipeline {
    source: Box<dyn ConversationSource>,
    provider: Box<dyn LlmProvider>,
    output_path: PathBuf,
}

impl Pipeline {
    pub fn new(
        source: Box<dyn ConversationSource>,
        provider: Box<dyn LlmProvider>,
        output_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            source,
            provider,
            output_path: output_path.into(),
        }
    }

    /// Run every stage once for `conversation_id`.
    pub async fn run(&self, conversation_id: &str) -> Result<PipelineOutcome> {
        println!("🚀 Starting feedback pipeline...");
        println!("Conversation ID: {}", conversation_id);
        println!("{}", "-".repeat(50));

        let record = fetch_stage(&*self.source, conversation_id).await?;
        let messages = require_transcript(&record, conversation_id)?;

        let transcript = format_transcript(messages);
        let transcript_chars = transcript.chars().count();
        println!("✓ Formatted transcript ({} characters)", transcript_chars);

        let feedback = self.generate_stage(&transcript).await?;

        println!();
        println!("{}", "=".repeat(BANNER_WIDTH));
        println!("GENERATED FEEDBACK:");
        println!("{}", "=".repeat(BANNER_WIDTH));
        println!("{}", feedback);

        let saved_to = save_stage(&self.output_path, &feedback);

        println!();
        println!("🎉 Pipeline completed successfully!");

        Ok(PipelineOutcome {
            conversation_id: conversation_id.to_string(),
            message_count: messages.len(),
            transcript_chars,
            feedback,
            saved_to,
        })
    }

    async fn generate_stage(&self, transcript: &str) -> Result<String> {
        println!("Analyzing transcript with {}...", self.provider.name());

        let feedback = self
            .provider
            .generate_feedback(FeedbackRequest { transcript })
            .await
            .map_err(|e| DebriefError::Generation(format!("{e:#}")))?;

        println!("✓ Successfully generated feedback");
        Ok(feedback)
    }
}

/// Fetch a conversation and report its status and size.
pub async fn fetch_stage(
    source: &dyn ConversationSource,
    conversation_id: &str,
) -> Result<ConversationRecord> {
    println!("Fetching conversation transcript...");

    let record = source.fetch_conversation(conversation_id).await?;

    println!("✓ Successfully fetched conversation data");
    println!("  Status: {}", record.status);
    println!("  Transcript messages: {}", record.transcript.len());
    tracing::info!(
        conversation_id,
        status = %record.status,
        messages = record.transcript.len(),
        "Conversation fetched"
    );

    Ok(record)
}

/// The record's messages, or an error if there are none to analyse.
pub fn require_transcript<'a>(
    record: &'a ConversationRecord,
    conversation_id: &str,
) -> Result<&'a [Message]> {
    if record.transcript.is_empty() {
        return Err(DebriefError::EmptyTranscript(conversation_id.to_string()));
    }
    Ok(record.transcript.as_slice())
}

fn save_stage(path: &Path, feedback: &str) -> Option<PathBuf> {
    match write_report(path, feedback) {
        Ok(()) => {
            println!("✓ Feedback saved to {}", path.display());
            Some(path.to_path_buf())
        }
        Err(e) => {
            tracing::warn!("Failed to write {}: {}", path.display(), e);
            println!("✗ Error saving feedback: {}", e);
            None
        }
    }
}
