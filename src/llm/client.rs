use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::llm::gemini::GeminiClient;
use crate::llm::prompts::build_feedback_prompt;

/// Generative-text backends, as named by `llm.provider`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    #[default]
    Gemini,
}

/// A formatted transcript waiting for feedback.
pub struct FeedbackRequest<'a> {
    pub transcript: &'a str,
}

impl FeedbackRequest<'_> {
    /// The coaching prompt with this transcript filled in.
    pub fn prompt(&self) -> String {
        build_feedback_prompt(self.transcript)
    }
}

#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Backend name shown in progress output.
    fn name(&self) -> &'static str;

    async fn generate_feedback(&self, request: FeedbackRequest<'_>) -> Result<String>;
}

/// Construct the configured provider. Fails fast on a missing key.
pub fn build_provider(settings: &Settings) -> Result<Box<dyn LlmProvider>> {
    let provider: Box<dyn LlmProvider> = match settings.llm.provider {
        ProviderKind::Gemini => Box::new(GeminiClient::from_settings(settings)?),
    };
    tracing::debug!("Using {} for feedback generation", provider.name());
    Ok(provider)
}
