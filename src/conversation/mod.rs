//! Conversation module for debrief
//!
//! Fetches ElevenLabs conversation records and renders their transcripts.

pub mod client;
pub mod format;
pub mod models;

pub use client::{ConversationSource, ElevenLabsClient};
pub use format::{format_transcript, role_label};
pub use models::{ConversationRecord, Message};
