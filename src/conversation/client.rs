use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Url};

use crate::config::Settings;
use crate::conversation::models::ConversationRecord;
use crate::{DebriefError, Result};

/// Anything that can look up a conversation by id.
#[async_trait]
pub trait ConversationSource: Send + Sync {
    async fn fetch_conversation(&self, conversation_id: &str) -> Result<ConversationRecord>;
}

/// Client for the ElevenLabs Conversational AI conversation lookup endpoint.
pub struct ElevenLabsClient {
    http: Client,
    api_key: String,
    endpoint: Url,
}

impl ElevenLabsClient {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let api_key = settings.conversation.api_key.trim().to_string();
        if api_key.is_empty() {
            return Err(DebriefError::Config(
                "ElevenLabs API key is missing. Set conversation.api_key in config or \
                 DEBRIEF_ELEVENLABS_API_KEY."
                    .to_string(),
            ));
        }

        let raw_endpoint = settings.conversation.endpoint.trim();
        if raw_endpoint.is_empty() {
            return Err(DebriefError::Config(
                "conversation.endpoint must not be empty".to_string(),
            ));
        }
        let endpoint = Url::parse(raw_endpoint).map_err(|e| {
            DebriefError::Config(format!("Invalid conversation.endpoint '{raw_endpoint}': {e}"))
        })?;
        if endpoint.cannot_be_a_base() {
            return Err(DebriefError::Config(format!(
                "conversation.endpoint '{raw_endpoint}' is not an http(s) base URL"
            )));
        }

        let http = Client::builder().build().map_err(|e| {
            DebriefError::Config(format!("Failed to build ElevenLabs HTTP client: {e}"))
        })?;

        Ok(Self {
            http,
            api_key,
            endpoint,
        })
    }

    /// Lookup URL with the id as one percent-encoded path segment.
    fn request_url(&self, conversation_id: &str) -> Url {
        let mut url = self.endpoint.clone();
        // from_settings rejects cannot-be-a-base endpoints
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["v1", "convai", "conversations", conversation_id]);
        }
        url
    }
}

#[async_trait]
impl ConversationSource for ElevenLabsClient {
    async fn fetch_conversation(&self, conversation_id: &str) -> Result<ConversationRecord> {
        let conversation_id = conversation_id.trim();
        if conversation_id.is_empty() {
            return Err(DebriefError::Config(
                "Conversation id must not be empty".to_string(),
            ));
        }

        let url = self.request_url(conversation_id);
        tracing::debug!("GET {}", url);

        let fetch_error = |reason: String| DebriefError::Fetch {
            id: conversation_id.to_string(),
            reason,
        };

        let response = self
            .http
            .get(url)
            .header("xi-api-key", &self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| fetch_error(e.to_string()))?;

        let status = response.status();
        tracing::debug!("Conversation lookup returned {}", status);

        if !status.is_success() {
            return Err(DebriefError::FetchStatus {
                id: conversation_id.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| fetch_error(format!("failed to read response body: {e}")))?;

        serde_json::from_str(&body)
            .map_err(|e| fetch_error(format!("malformed conversation payload: {e}")))
    }
}
