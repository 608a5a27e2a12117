//! Conversation records as returned by the ElevenLabs conversation API

use serde::{Deserialize, Deserializer, Serialize};

/// A stored voice-agent conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,

    /// Processing status reported by the service (e.g. "done")
    #[serde(default = "default_status")]
    pub status: String,

    /// Turns in the order they were spoken
    #[serde(default, deserialize_with = "null_as_empty")]
    pub transcript: Vec<Message>,
}

/// A single turn of the conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// `user`, `assistant`, or any other speaker label (ElevenLabs uses `agent`)
    #[serde(default = "default_role")]
    pub role: String,

    /// Spoken text in the `{role, content}` shape
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Spoken text as ElevenLabs sends it; `null` for tool-call turns
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_in_call_secs: Option<f64>,
}

impl Message {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: Some(content.into()),
            message: None,
            time_in_call_secs: None,
        }
    }

    /// Message text: `content` first, then `message`, else empty.
    pub fn text(&self) -> &str {
        self.content
            .as_deref()
            .or(self.message.as_deref())
            .unwrap_or("")
    }
}

fn default_status() -> String {
    "unknown".to_string()
}

fn default_role() -> String {
    "unknown".to_string()
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Message>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Message>>::deserialize(deserializer)?.unwrap_or_default())
}
