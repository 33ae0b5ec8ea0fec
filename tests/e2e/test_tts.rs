use crate::helpers;

use helpers::{audio_url_pattern, get_bytes, post_json, test_app, FAKE_MP3};
use hyper::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

#[tokio::test]
async fn it_should_synthesize_and_detect_english() {
    let app = test_app();

    let (status, body) = post_json(
        &app.router,
        "/tts",
        &json!({
            "texts": [ { "text": "Hello world", "lang": null, "speed": 1.0 } ]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["detected_language"], "en");

    let audio_url = results[0]["audio_url"].as_str().unwrap();
    assert!(
        audio_url_pattern().is_match(audio_url),
        "unexpected audio url {audio_url}"
    );

    // The referenced file must exist under the audio root.
    let on_disk = app.audio_root.parent().unwrap().join(audio_url);
    assert_eq!(std::fs::read(on_disk).unwrap(), FAKE_MP3);
}

#[tokio::test]
async fn it_should_keep_explicit_language_codes() {
    let app = test_app();

    let (status, body) = post_json(
        &app.router,
        "/tts",
        &json!({
            "texts": [ { "text": "Xin chào", "lang": "vi" } ]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["results"][0]["detected_language"], "vi");
}

#[tokio::test]
async fn it_should_coerce_unsupported_languages_to_english() {
    let app = test_app();

    let (status, body) = post_json(
        &app.router,
        "/tts",
        &json!({
            "texts": [ { "text": "whatever", "lang": "xx" } ]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["results"][0]["detected_language"], "en");
}

#[tokio::test]
async fn it_should_isolate_detection_failures_per_item() {
    let app = test_app();

    let (status, body) = post_json(
        &app.router,
        "/tts",
        &json!({
            "texts": [
                { "text": "The quick brown fox jumps over the lazy dog." },
                { "text": "1234567890" },
                { "text": "Hello again", "lang": "en" }
            ]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 3);

    assert!(results[0]["audio_url"].is_string());
    assert_eq!(results[1]["error"], "language could not be detected");
    assert!(results[1].get("audio_url").is_none());
    assert!(results[2]["audio_url"].is_string());
}

#[tokio::test]
async fn it_should_reject_empty_text() {
    let app = test_app();

    let (status, body) = post_json(
        &app.router,
        "/tts",
        &json!({
            "texts": [ { "text": "" } ]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("Text cannot be empty"));
}

#[tokio::test]
async fn it_should_reject_malformed_bodies() {
    let app = test_app();

    let (status, _) = post_json(&app.router, "/tts", &json!({ "nope": true })).await;
    assert!(status.is_client_error(), "got {status}");
}

#[tokio::test]
async fn it_should_serve_generated_audio_files() {
    let app = test_app();

    let (_, body) = post_json(
        &app.router,
        "/tts",
        &json!({
            "texts": [ { "text": "Hello world", "lang": "en" } ]
        }),
    )
    .await;

    let audio_url = body["results"][0]["audio_url"].as_str().unwrap();
    // The public URL already carries the audio/ prefix the route is
    // mounted under.
    let (status, bytes) = get_bytes(&app.router, &format!("/{audio_url}")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(bytes, FAKE_MP3);
}
