//! LLM module for debrief
//!
//! Generates negotiation feedback from a transcript using the Gemini API.

mod client;
mod gemini;
pub mod prompts;

pub use client::{build_provider, FeedbackRequest, LlmProvider, ProviderKind};
pub use gemini::GeminiClient;
pub use prompts::{build_feedback_prompt, PromptTemplate, FEEDBACK_TEMPLATE};
