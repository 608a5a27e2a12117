//! Configuration module for debrief
//!
//! Handles loading API keys and defaults from a TOML file and the environment.

mod settings;

pub use settings::{normalize_api_key, Settings};
