//! Configuration types for the roast service

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Which handler variant this deployment runs.
///
/// The two variants are mutually exclusive per process: `Classic` serves the
/// `/text` endpoint plus plain vision roasts, `Soundboard` treats every body
/// as an image and pairs the roast with a sound effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoastMode {
    Classic,
    Soundboard,
}

impl RoastMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classic" => Some(RoastMode::Classic),
            "soundboard" => Some(RoastMode::Soundboard),
            _ => None,
        }
    }
}

/// Main service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoastConfig {
    /// Gemini API credential. Requests fail with a configuration error
    /// while this is unset; the process itself still starts.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Gemini model identifier
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of the generation API
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Base URL of the static bucket serving sound files
    #[serde(default = "default_sound_base")]
    pub sound_base_url: String,

    /// Deployment variant
    #[serde(default = "default_mode")]
    pub mode: RoastMode,
}

impl Default for RoastConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            api_base: default_api_base(),
            sound_base_url: default_sound_base(),
            mode: default_mode(),
        }
    }
}

impl RoastConfig {
    /// Load configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let mode = match std::env::var("ROAST_MODE") {
            Ok(raw) => match RoastMode::parse(&raw) {
                Some(parsed) => parsed,
                None => {
                    warn!("Invalid ROAST_MODE='{}', falling back to classic", raw);
                    default_mode()
                }
            },
            Err(_) => default_mode(),
        };

        Self {
            api_key: non_empty_env("GEMINI_API_KEY"),
            model: non_empty_env("ROAST_MODEL").unwrap_or_else(default_model),
            api_base: non_empty_env("ROAST_API_BASE").unwrap_or_else(default_api_base),
            sound_base_url: non_empty_env("ROAST_SOUND_BASE_URL").unwrap_or_else(default_sound_base),
            mode,
        }
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    let value = std::env::var(key).ok()?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_api_base() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_sound_base() -> String {
    "https://pub-roast-sounds.r2.dev".to_string()
}

fn default_mode() -> RoastMode {
    RoastMode::Classic
}
