//! Minimal client for the Gemini `generateContent` endpoint.

use base64::{engine::general_purpose, Engine as _};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// MIME type reported for uploaded image bytes.
const IMAGE_MIME_TYPE: &str = "image/jpeg";

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    role: &'static str,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Debug, Serialize)]
struct InlineData {
    mime_type: &'static str,
    data: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

/// Client for one configured model behind one API base.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_base: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_base: String, model: String, api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base,
            model,
            api_key,
        }
    }

    /// Generate from a text-only prompt.
    pub async fn generate_text(&self, prompt: &str) -> Result<Option<String>> {
        self.generate(vec![Part::Text {
            text: prompt.to_string(),
        }])
        .await
    }

    /// Generate from a prompt plus inline image bytes.
    pub async fn generate_vision(&self, prompt: &str, image: &[u8]) -> Result<Option<String>> {
        let data = general_purpose::STANDARD.encode(image);
        self.generate(vec![
            Part::Text {
                text: prompt.to_string(),
            },
            Part::InlineData {
                inline_data: InlineData {
                    mime_type: IMAGE_MIME_TYPE,
                    data,
                },
            },
        ])
        .await
    }

    /// Single POST to the generation endpoint. Returns `Ok(None)` when the
    /// call succeeds but the response carries no usable text, so the caller
    /// can substitute a fallback. Never retried.
    async fn generate(&self, parts: Vec<Part>) -> Result<Option<String>> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.api_base.trim_end_matches('/'),
            self.model
        );
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts,
            }],
        };

        debug!("Calling Gemini model {}", self.model);
        let response = self
            .http
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let details = response.text().await.unwrap_or_default();
            return Err(Error::Upstream {
                status: status.as_u16(),
                details,
            });
        }

        let body: GenerateContentResponse = response.json().await?;
        Ok(extract_text(body))
    }
}

/// First candidate, first text part. Blank text counts as absent.
fn extract_text(response: GenerateContentResponse) -> Option<String> {
    response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().next())
        .and_then(|part| part.text)
        .filter(|text| !text.trim().is_empty())
}
