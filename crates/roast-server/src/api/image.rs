//! Vision roast endpoint (classic variant).

use axum::{body::Bytes, Json};
use serde::Serialize;
use tracing::{error, info};

use roast_core::{prompt, Error};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ImageRoastResponse {
    pub roast_text: String,
    pub sound_effect: Option<String>,
    pub description: &'static str,
}

pub async fn roast_image(
    state: AppState,
    body: Bytes,
) -> Result<Json<ImageRoastResponse>, ApiError> {
    let client = state.client()?;

    if body.is_empty() {
        return Err(ApiError::bad_request("No image data provided"));
    }
    info!("Image roast request: {} bytes", body.len());

    let roast_text = match client.generate_vision(prompt::vision_roast_prompt(), &body).await {
        Ok(Some(text)) => text,
        Ok(None) => prompt::VISION_FALLBACK_ROAST.to_string(),
        Err(Error::Upstream { status, details }) => {
            error!("Gemini Vision API error (status {}): {}", status, details);
            return Err(ApiError::internal_with_details(
                "Failed to generate roast",
                format!("Gemini Vision API failed: {status} - {details}"),
            ));
        }
        Err(err) => return Err(err.into()),
    };

    Ok(Json(ImageRoastResponse {
        roast_text,
        sound_effect: None,
        description: prompt::VISION_DESCRIPTION,
    }))
}
