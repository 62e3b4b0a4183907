//! Sound-selecting roast endpoint (soundboard variant).

use axum::{body::Bytes, Json};
use serde::Serialize;
use tracing::{error, info};

use roast_core::{audio_url, prompt, split_sound_marker, Error, DEFAULT_SOUND};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SoundRoastResponse {
    pub roast_text: String,
    /// Absolute URL of the matched sound effect on the static asset host.
    pub audio_file: String,
}

pub async fn roast_sound(
    state: AppState,
    body: Bytes,
) -> Result<Json<SoundRoastResponse>, ApiError> {
    let client = state.client()?;

    if body.is_empty() {
        return Err(ApiError::bad_request("No image data provided"));
    }
    info!("Sound roast request: {} bytes", body.len());

    let roast_prompt = prompt::sound_roast_prompt(&state.catalog);
    let (roast_text, filename) = match client.generate_vision(&roast_prompt, &body).await {
        Ok(Some(raw)) => {
            let parsed = split_sound_marker(&raw);
            let filename = state
                .catalog
                .resolve(parsed.sound_name.as_deref())
                .to_string();
            (parsed.roast_text, filename)
        }
        Ok(None) => (
            prompt::VISION_FALLBACK_ROAST.to_string(),
            DEFAULT_SOUND.to_string(),
        ),
        Err(Error::Upstream { status, details }) => {
            error!("Gemini Vision API error (status {}): {}", status, details);
            return Err(ApiError::internal_with_details(
                "Failed to generate roast",
                format!("Gemini Vision API failed: {status} - {details}"),
            ));
        }
        Err(err) => return Err(err.into()),
    };

    Ok(Json(SoundRoastResponse {
        roast_text,
        audio_file: audio_url(&state.config.sound_base_url, &filename),
    }))
}
