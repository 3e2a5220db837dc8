use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, Flash, Phase, Touch, Trace, Wave};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn get_request(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

// --- system37: chronobiological phase ---

#[tokio::test]
async fn phase_filter_returns_named_phase() {
    let resp = app().oneshot(get_request("/api/system37")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let phase: Phase = body_json(resp).await;
    assert!(
        ["morning", "afternoon", "evening", "neutral"].contains(&phase.filter.as_str()),
        "unexpected phase {}",
        phase.filter
    );
}

// --- system38: handwriting trace ---

#[tokio::test]
async fn handwriting_trace_builds_path_for_first_two_chars() {
    let resp = app()
        .oneshot(json_request("POST", "/api/system38", r#"{"characters":"ae"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let trace: Trace = body_json(resp).await;
    assert_eq!(trace.path, mock_server::trace_path("ae"));
    assert_eq!(trace.duration_ms, 400);
    assert!((trace.opacity - 0.028).abs() < 1e-9);
}

#[tokio::test]
async fn handwriting_trace_malformed_json_returns_422() {
    let resp = app()
        .oneshot(json_request("POST", "/api/system38", r#"{"chars":"ae"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// --- system39: confidence flash ---

#[tokio::test]
async fn confidence_flash_correct_is_green_check() {
    let resp = app()
        .oneshot(json_request("POST", "/api/system39", r#"{"correct":true}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let flash: Flash = body_json(resp).await;
    assert_eq!(flash.symbol, "✓");
    assert_eq!(flash.color, "#4caf50");
    assert_eq!(flash.duration_ms, 11);
}

#[tokio::test]
async fn confidence_flash_incorrect_is_blue_arrow() {
    let resp = app()
        .oneshot(json_request("POST", "/api/system39", r#"{"correct":false}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let flash: Flash = body_json(resp).await;
    assert_eq!(flash.symbol, "→");
    assert_eq!(flash.color, "#2196f3");
}

#[tokio::test]
async fn confidence_flash_malformed_json_returns_422() {
    let resp = app()
        .oneshot(json_request("POST", "/api/system39", r#"{"correct":"yes"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// --- system40: delta wave ---

#[tokio::test]
async fn delta_wave_returns_consolidation_parameters() {
    let resp = app().oneshot(get_request("/api/system40")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let wave: Wave = body_json(resp).await;
    assert!((wave.pulse_hz - 2.0).abs() < 1e-9);
    assert_eq!(wave.max_pulses, 8);
    assert!((wave.resonance_hz - 7.83).abs() < 1e-9);
}

// --- system41: phantom touch ---

#[tokio::test]
async fn phantom_touch_returns_shadow_parameters() {
    let resp = app().oneshot(get_request("/api/system41")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let touch: Touch = body_json(resp).await;
    assert_eq!(touch.base_shadow, "2px 2px 3px");
    assert!((touch.scale_min - 0.5).abs() < 1e-9);
    assert!((touch.scale_max - 2.0).abs() < 1e-9);
}

// --- unknown routes ---

#[tokio::test]
async fn unknown_system_is_not_found() {
    let resp = app().oneshot(get_request("/api/system36")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
