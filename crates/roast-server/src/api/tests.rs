//! Router-level tests driving the real `Router`, with a local stand-in for
//! the generation endpoint where upstream behavior matters.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Json, Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use roast_core::{RoastConfig, RoastMode, SoundCatalog, DEFAULT_SOUND};

use crate::api::create_router;
use crate::state::AppState;

fn test_config(api_base: &str, mode: RoastMode) -> RoastConfig {
    RoastConfig {
        api_key: Some("test-key".to_string()),
        api_base: api_base.to_string(),
        sound_base_url: "https://sounds.test".to_string(),
        mode,
        ..RoastConfig::default()
    }
}

fn app(config: RoastConfig) -> Router {
    create_router(AppState::new(config, SoundCatalog::bundled()))
}

/// Serve `body` with `status` for every request, returning a usable API base.
async fn spawn_upstream(status: StatusCode, body: Value) -> String {
    let mock = Router::new().fallback(move || async move { (status, Json(body)) });
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock upstream");
    let addr = listener.local_addr().expect("mock upstream addr");
    tokio::spawn(async move {
        axum::serve(listener, mock).await.expect("serve mock upstream");
    });
    format!("http://{addr}/v1beta")
}

fn gemini_text_response(text: &str) -> Value {
    json!({
        "candidates": [{ "content": { "parts": [{ "text": text }] } }]
    })
}

async fn send(app: Router, method: Method, uri: &str, body: Body) -> (StatusCode, axum::http::HeaderMap, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(body)
                .expect("build request"),
        )
        .await
        .expect("infallible");

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.expect("read body").to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::String(
            String::from_utf8_lossy(&bytes).into_owned(),
        ))
    };
    (status, headers, value)
}

#[tokio::test]
async fn options_is_204_with_cors_everywhere() {
    for uri in ["/text", "/", "/anything/else"] {
        let (status, headers, body) = send(
            app(test_config("http://127.0.0.1:9/v1beta", RoastMode::Classic)),
            Method::OPTIONS,
            uri,
            Body::empty(),
        )
        .await;
        assert_eq!(status, StatusCode::NO_CONTENT, "uri {uri}");
        assert_eq!(headers.get("access-control-allow-origin").unwrap(), "*");
        assert_eq!(body, Value::Null);
    }
}

#[tokio::test]
async fn non_post_is_405_plain_text() {
    let (status, headers, body) = send(
        app(test_config("http://127.0.0.1:9/v1beta", RoastMode::Classic)),
        Method::GET,
        "/",
        Body::empty(),
    )
    .await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(headers.get("access-control-allow-origin").unwrap(), "*");
    assert_eq!(body, Value::String("Method not allowed".to_string()));

    let (status, _, _) = send(
        app(test_config("http://127.0.0.1:9/v1beta", RoastMode::Classic)),
        Method::GET,
        "/text",
        Body::empty(),
    )
    .await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn missing_api_key_is_500_on_every_roast_path() {
    let config = RoastConfig {
        api_key: None,
        mode: RoastMode::Classic,
        ..RoastConfig::default()
    };

    let (status, headers, body) = send(
        app(config.clone()),
        Method::POST,
        "/text",
        Body::from(r#"{"text":"my hat"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(headers.get("access-control-allow-origin").unwrap(), "*");
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("GEMINI_API_KEY not configured"));

    let (status, _, body) = send(
        app(config),
        Method::POST,
        "/",
        Body::from(vec![0xffu8, 0xd8, 0xff]),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("GEMINI_API_KEY not configured"));

    let soundboard = RoastConfig {
        api_key: None,
        mode: RoastMode::Soundboard,
        ..RoastConfig::default()
    };
    let (status, _, _) = send(
        app(soundboard),
        Method::POST,
        "/",
        Body::from(vec![0xffu8, 0xd8, 0xff]),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn empty_image_body_is_400() {
    for mode in [RoastMode::Classic, RoastMode::Soundboard] {
        let (status, headers, body) = send(
            app(test_config("http://127.0.0.1:9/v1beta", mode)),
            Method::POST,
            "/",
            Body::empty(),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(headers.get("access-control-allow-origin").unwrap(), "*");
        assert_eq!(body["error"], "No image data provided");
    }
}

#[tokio::test]
async fn text_success_passes_model_roast_through() {
    let base = spawn_upstream(
        StatusCode::OK,
        gemini_text_response("You call that a hat? Bold."),
    )
    .await;
    let (status, _, body) = send(
        app(test_config(&base, RoastMode::Classic)),
        Method::POST,
        "/text",
        Body::from(r#"{"text":"my hat"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["roast_text"], "You call that a hat? Bold.");
    assert_eq!(body["sound_effect"], Value::Null);
    assert_eq!(body["description"], "my hat");
}

#[tokio::test]
async fn text_upstream_error_degrades_to_200_with_diagnostics() {
    let base = spawn_upstream(
        StatusCode::TOO_MANY_REQUESTS,
        json!({ "error": { "message": "quota exceeded" } }),
    )
    .await;
    let (status, headers, body) = send(
        app(test_config(&base, RoastMode::Classic)),
        Method::POST,
        "/text",
        Body::from(r#"{"text":"my hat"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers.get("access-control-allow-origin").unwrap(), "*");
    assert_eq!(body["error"], "Gemini API error");
    assert_eq!(body["status"], 429);
    assert!(body["details"].as_str().unwrap().contains("quota exceeded"));
}

#[tokio::test]
async fn text_without_usable_candidates_falls_back_with_default_description() {
    let base = spawn_upstream(StatusCode::OK, json!({})).await;
    let (status, _, body) = send(
        app(test_config(&base, RoastMode::Classic)),
        Method::POST,
        "/text",
        Body::from(r#"{"text":""}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["description"], "something random");
    assert!(body["roast_text"]
        .as_str()
        .unwrap()
        .contains("something random"));
}

#[tokio::test]
async fn image_success_classic() {
    let base = spawn_upstream(
        StatusCode::OK,
        gemini_text_response("That lighting deserves better."),
    )
    .await;
    let (status, _, body) = send(
        app(test_config(&base, RoastMode::Classic)),
        Method::POST,
        "/",
        Body::from(vec![0xffu8, 0xd8, 0xff, 0x00]),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["roast_text"], "That lighting deserves better.");
    assert_eq!(body["sound_effect"], Value::Null);
    assert_eq!(body["description"], "Image analyzed by Gemini Vision");
}

#[tokio::test]
async fn image_upstream_error_is_500() {
    let base = spawn_upstream(
        StatusCode::BAD_REQUEST,
        json!({ "error": { "message": "invalid image" } }),
    )
    .await;
    let (status, _, body) = send(
        app(test_config(&base, RoastMode::Classic)),
        Method::POST,
        "/",
        Body::from(vec![0xffu8, 0xd8, 0xff, 0x00]),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to generate roast");
    assert!(body["details"].as_str().unwrap().contains("400"));
}

#[tokio::test]
async fn soundboard_resolves_known_sound() {
    let base = spawn_upstream(
        StatusCode::OK,
        gemini_text_response("Great fit.\nSound: Airhorn.mp3"),
    )
    .await;
    let (status, _, body) = send(
        app(test_config(&base, RoastMode::Soundboard)),
        Method::POST,
        "/",
        Body::from(vec![0xffu8, 0xd8, 0xff, 0x00]),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["roast_text"], "Great fit.");
    assert_eq!(body["audio_file"], "https://sounds.test/Airhorn.mp3");
}

#[tokio::test]
async fn soundboard_unknown_sound_falls_back_to_default() {
    let base = spawn_upstream(
        StatusCode::OK,
        gemini_text_response("Nice.\nSound: Unknown.mp3"),
    )
    .await;
    let (_, _, body) = send(
        app(test_config(&base, RoastMode::Soundboard)),
        Method::POST,
        "/",
        Body::from(vec![0xffu8, 0xd8, 0xff, 0x00]),
    )
    .await;
    assert_eq!(body["roast_text"], "Nice.");
    assert_eq!(
        body["audio_file"],
        format!("https://sounds.test/{DEFAULT_SOUND}")
    );
}

#[tokio::test]
async fn soundboard_without_marker_uses_whole_text_and_default_sound() {
    let base = spawn_upstream(
        StatusCode::OK,
        gemini_text_response("Just a roast, no sound."),
    )
    .await;
    let (_, _, body) = send(
        app(test_config(&base, RoastMode::Soundboard)),
        Method::POST,
        "/",
        Body::from(vec![0xffu8, 0xd8, 0xff, 0x00]),
    )
    .await;
    assert_eq!(body["roast_text"], "Just a roast, no sound.");
    assert_eq!(
        body["audio_file"],
        format!("https://sounds.test/{DEFAULT_SOUND}")
    );
}

#[tokio::test]
async fn soundboard_empty_candidates_uses_fixed_fallback() {
    let base = spawn_upstream(StatusCode::OK, json!({})).await;
    let (status, _, body) = send(
        app(test_config(&base, RoastMode::Soundboard)),
        Method::POST,
        "/",
        Body::from(vec![0xffu8, 0xd8, 0xff, 0x00]),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["roast_text"], "Looking good... I guess?");
    assert_eq!(
        body["audio_file"],
        format!("https://sounds.test/{DEFAULT_SOUND}")
    );
}
