//! API routes and handlers

mod image;
mod sound;
mod text;

#[cfg(test)]
mod tests;

use axum::{
    body::Bytes,
    extract::State,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use roast_core::RoastMode;

use crate::state::AppState;

/// Create the main API router for the configured deployment variant.
///
/// Both variants share one request shape: OPTIONS answers 204, POST is the
/// only accepted method, and every path that is not an explicit route treats
/// the body as raw image bytes.
pub fn create_router(state: AppState) -> Router {
    let routes = match state.config.mode {
        RoastMode::Classic => Router::new()
            .route(
                "/text",
                post(text::roast_text)
                    .options(preflight)
                    .fallback(method_not_allowed),
            )
            .fallback(classic_dispatch),
        RoastMode::Soundboard => Router::new().fallback(soundboard_dispatch),
    };

    routes
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}

async fn method_not_allowed() -> Response {
    (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed").into_response()
}

/// Classic variant: any path other than `/text` takes raw image bytes.
async fn classic_dispatch(
    State(state): State<AppState>,
    method: Method,
    body: Bytes,
) -> Response {
    match method {
        Method::OPTIONS => preflight().await.into_response(),
        Method::POST => image::roast_image(state, body).await.into_response(),
        _ => method_not_allowed().await,
    }
}

/// Soundboard variant: every path takes raw image bytes.
async fn soundboard_dispatch(
    State(state): State<AppState>,
    method: Method,
    body: Bytes,
) -> Response {
    match method {
        Method::OPTIONS => preflight().await.into_response(),
        Method::POST => sound::roast_sound(state, body).await.into_response(),
        _ => method_not_allowed().await,
    }
}
