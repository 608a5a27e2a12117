//! Application settings management

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::llm::ProviderKind;

/// Main application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// ElevenLabs conversation API settings
    #[serde(default)]
    pub conversation: ConversationSettings,

    /// LLM settings
    #[serde(default)]
    pub llm: LlmSettings,

    /// Report output settings
    #[serde(default)]
    pub output: OutputSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationSettings {
    /// ElevenLabs API key, sent as the `xi-api-key` header
    #[serde(default)]
    pub api_key: String,

    /// API base URL (scheme and host, no path)
    #[serde(default = "default_conversation_endpoint")]
    pub endpoint: String,

    /// Conversation analysed when none is given on the command line
    #[serde(default)]
    pub default_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmSettings {
    /// LLM provider (gemini)
    #[serde(default)]
    pub provider: ProviderKind,

    /// API key (for cloud providers)
    #[serde(default)]
    pub api_key: String,

    /// Model name
    #[serde(default = "default_llm_model")]
    pub model: String,

    /// API endpoint (empty = provider default)
    #[serde(default)]
    pub endpoint: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSettings {
    /// File the feedback report is written to
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
}

// Default value functions

fn default_conversation_endpoint() -> String {
    "https://api.elevenlabs.io".to_string()
}

fn default_llm_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_output_path() -> PathBuf {
    PathBuf::from(crate::report::DEFAULT_REPORT_FILE)
}

impl Default for ConversationSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            endpoint: default_conversation_endpoint(),
            default_id: String::new(),
        }
    }
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            provider: ProviderKind::default(),
            api_key: String::new(),
            model: default_llm_model(),
            endpoint: String::new(),
        }
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            path: default_output_path(),
        }
    }
}

impl Settings {
    /// Load settings from the configuration file
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            tracing::info!("No config file found, using defaults");
            let mut settings = Self::default();
            settings.apply_env_overrides();
            return Ok(settings);
        }

        let content = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let mut settings = Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

        settings.apply_env_overrides();

        Ok(settings)
    }

    /// Parse settings from TOML text, normalizing secrets.
    pub fn from_toml(content: &str) -> Result<Self> {
        let mut settings: Settings = toml::from_str(content)?;
        settings.conversation.api_key = normalize_api_key(&settings.conversation.api_key);
        settings.llm.api_key = normalize_api_key(&settings.llm.api_key);
        Ok(settings)
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if self.conversation.api_key.is_empty() {
            if let Some(key) = first_env(&["DEBRIEF_ELEVENLABS_API_KEY", "ELEVENLABS_API_KEY"]) {
                self.conversation.api_key = normalize_api_key(&key);
            }
        }

        if self.llm.api_key.is_empty() {
            if let Some(key) = first_env(&["DEBRIEF_GEMINI_API_KEY", "GEMINI_API_KEY"]) {
                self.llm.api_key = normalize_api_key(&key);
            }
        }

        if self.conversation.default_id.trim().is_empty() {
            if let Some(id) = first_env(&["DEBRIEF_CONVERSATION_ID"]) {
                self.conversation.default_id = id.trim().to_string();
            }
        }
    }

    /// Get the path to the configuration file
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("com", "debrief", "debrief")
            .context("Could not determine config directory")?;

        let config_dir = dirs.config_dir();
        Ok(config_dir.join("config.toml"))
    }

    /// Write default configuration to a file
    pub fn write_default(path: &PathBuf) -> Result<()> {
        let settings = Self::default();
        let content = toml::to_string_pretty(&settings)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Resolve the conversation to analyse: the explicit id wins over the configured default.
    pub fn conversation_id(&self, explicit: Option<&str>) -> crate::Result<String> {
        let id = explicit
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .or_else(|| Some(self.conversation.default_id.trim()).filter(|id| !id.is_empty()));

        match id {
            Some(id) => Ok(id.to_string()),
            None => Err(crate::DebriefError::Config(
                "No conversation id given. Pass one on the command line or set \
                 conversation.default_id / DEBRIEF_CONVERSATION_ID."
                    .to_string(),
            )),
        }
    }
}

fn first_env(names: &[&str]) -> Option<String> {
    names
        .iter()
        .filter_map(|name| std::env::var(name).ok())
        .find(|value| !value.trim().is_empty())
}

/// Trim whitespace and strip surrounding quotes from a pasted API key.
pub fn normalize_api_key(raw: &str) -> String {
    fn is_quote_char(c: char) -> bool {
        matches!(c, '"' | '\'' | '“' | '”' | '‘' | '’')
    }

    raw.trim()
        .trim_start_matches(is_quote_char)
        .trim_end_matches(is_quote_char)
        .trim()
        .to_string()
}
