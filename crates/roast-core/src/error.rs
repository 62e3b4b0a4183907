//! Core error types

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("GEMINI_API_KEY not configured. Please set it as a secret.")]
    MissingApiKey,

    /// Non-success status from the generation API, with the raw body text.
    #[error("Gemini API error: status {status}: {details}")]
    Upstream { status: u16, details: String },

    #[error("Gemini API request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
