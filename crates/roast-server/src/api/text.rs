//! Text roast endpoint.

use axum::{
    body::Bytes,
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, warn};

use roast_core::{prompt, Error};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct TextRoastRequest {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TextRoastResponse {
    pub roast_text: String,
    /// Always null on this endpoint; kept for response-shape parity with the
    /// image endpoint.
    pub sound_effect: Option<String>,
    pub description: String,
}

pub async fn roast_text(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let client = state.client()?;

    // An empty body reads as an empty object; malformed JSON is a processing
    // error like any other.
    let request: TextRoastRequest = if body.is_empty() {
        TextRoastRequest::default()
    } else {
        serde_json::from_slice(&body).map_err(roast_core::Error::from)?
    };

    let description = match request.text {
        Some(text) if !text.trim().is_empty() => text,
        _ => prompt::DEFAULT_DESCRIPTION.to_string(),
    };
    info!("Text roast request: {:?}", description);

    let roast_prompt = prompt::text_roast_prompt(&description);
    let roast_text = match client.generate_text(&roast_prompt).await {
        Ok(Some(text)) => text,
        Ok(None) => prompt::fallback_roast(&description),
        Err(Error::Upstream { status, details }) => {
            // Degrade to a diagnostic 200 so the caller sees what went wrong
            // upstream instead of a hard failure.
            warn!("Gemini API error (status {}): {}", status, details);
            return Ok(Json(json!({
                "error": "Gemini API error",
                "status": status,
                "details": details,
                "note": "Check your API key or quota. Also ensure model name and API version are correct.",
            }))
            .into_response());
        }
        Err(err) => return Err(err.into()),
    };

    Ok(Json(TextRoastResponse {
        roast_text,
        sound_effect: None,
        description,
    })
    .into_response())
}
