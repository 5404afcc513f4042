//! Integration tests for the API endpoints.
//!
//! Tests drive the Axum `Router` directly via `tower::ServiceExt` without
//! starting a TCP server.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use protolab_api::router::build_router;
use protolab_api::state::AppState;
use protolab_core::FrameControl;
use protolab_db::MemoryResultStore;
use protolab_quiz::Quiz;
use protolab_sim::PointerCommand;
use protolab_types::FrameSnapshot;
use serde_json::{Value, json};
use tokio::sync::mpsc;
use tower::ServiceExt;

fn make_state() -> AppState {
    AppState::new(Arc::new(MemoryResultStore::new()), Arc::new(Quiz::standard().unwrap()))
}

fn app() -> Router {
    build_router(Arc::new(make_state()))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
    let json = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap() };
    (status, json)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: &Value, client: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("POST").uri(uri).header("content-type", "application/json");
    if let Some(ip) = client {
        builder = builder.header("x-forwarded-for", ip);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

#[tokio::test]
async fn submit_then_duplicate_is_not_new() {
    let app = app();
    let body = json!({ "agent": "Clippy", "sequence": "WTSAD" });

    let (status, first) = send(&app, post_json("/api/personality-results", &body, Some("203.0.113.7"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["success"], true);
    assert_eq!(first["isNewResult"], true);
    assert_eq!(first["message"], "Result recorded");

    let (status, second) = send(&app, post_json("/api/personality-results", &body, Some("203.0.113.7, 10.0.0.1"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(second["isNewResult"], false);
    assert_eq!(second["message"], "Result already recorded for this IP");

    let (_, board) = send(&app, get("/api/personality-results")).await;
    assert_eq!(board["totalResults"], 1);
}

#[tokio::test]
async fn invalid_sequence_is_rejected() {
    let app = app();
    let body = json!({ "agent": "Clippy", "sequence": "XXXXX" });

    let (status, json) = send(&app, post_json("/api/personality-results", &body, None)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);
    assert_eq!(json["status"], 400);
    assert!(json["error"].as_str().unwrap().contains("XXXXX"));
}

#[tokio::test]
async fn malformed_body_is_rejected() {
    let app = app();
    let request = Request::builder()
        .method("POST")
        .uri("/api/personality-results")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let (status, json) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn leaderboard_ranks_agents_by_count() {
    let app = app();
    let submissions = [("10.0.0.1", "Clippy"), ("10.0.0.2", "Bonzi"), ("10.0.0.3", "Bonzi")];
    for (ip, agent) in submissions {
        let body = json!({ "agent": agent, "sequence": "WTSAD" });
        send(&app, post_json("/api/personality-results", &body, Some(ip))).await;
    }

    let (status, json) = send(&app, get("/api/personality-results")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["totalResults"], 3);
    assert_eq!(json["leaderboard"][0]["agent"], "Bonzi");
    assert_eq!(json["leaderboard"][0]["count"], 2);
    assert_eq!(json["leaderboard"][1]["agent"], "Clippy");
}

#[tokio::test]
async fn clear_removes_one_agent() {
    let app = app();
    for (ip, agent) in [("10.0.0.1", "Clippy"), ("10.0.0.2", "Clippy"), ("10.0.0.3", "Bonzi")] {
        let body = json!({ "agent": agent, "sequence": "WTSAD" });
        send(&app, post_json("/api/personality-results", &body, Some(ip))).await;
    }

    let (status, json) =
        send(&app, post_json("/api/personality-results/clear", &json!({ "agent": "Clippy" }), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["removedCount"], 2);
    assert_eq!(json["totalResults"], 1);

    let (_, again) = send(&app, post_json("/api/personality-results/clear", &json!({ "agent": "Clippy" }), None)).await;
    assert_eq!(again["removedCount"], 0);
    assert_eq!(again["message"], "No Clippy data found to clear");
}

// ---------------------------------------------------------------------------
// Profiles
// ---------------------------------------------------------------------------

#[tokio::test]
async fn profile_lookup() {
    let app = app();

    let (status, json) = send(&app, get("/api/profiles/WTSAD")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["code"], "WTSAD");
    assert!(json["profile"]["name"].is_string());
    assert!(json["iconPath"].as_str().unwrap().ends_with(".png"));
    assert_eq!(json["choices"].as_array().unwrap().len(), 5);

    let (status, json) = send(&app, get("/api/profiles/nope")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn every_profile_is_listed() {
    let (status, json) = send(&app(), get("/api/profiles")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 32);
    assert_eq!(json["profiles"].as_array().unwrap().len(), 32);
}

// ---------------------------------------------------------------------------
// Simulation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn simulation_endpoints_without_a_simulator() {
    let app = app();

    let (status, json) = send(&app, get("/api/sim/frame")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["frame"], 0);
    assert_eq!(json["agents"].as_array().unwrap().len(), 0);

    let command = json!({ "type": "move", "x": 1.0, "y": 2.0 });
    let (status, json) = send(&app, post_json("/api/sim/pointer", &command, None)).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["status"], 503);

    let (status, _) = send(&app, get("/api/sim/status")).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn pointer_commands_are_queued() {
    let (tx, mut rx) = mpsc::channel(4);
    let state = make_state().with_simulation(Arc::new(FrameControl::new(16, 0)), tx);
    let app = build_router(Arc::new(state));

    let command = json!({ "type": "press", "x": 120.0, "y": 80.0 });
    let (status, json) = send(&app, post_json("/api/sim/pointer", &command, None)).await;

    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(json["success"], true);
    let queued = rx.try_recv().unwrap();
    assert!(matches!(queued, PointerCommand::Press { .. }));
}

#[tokio::test]
async fn latest_frame_is_served() {
    let (tx, _rx) = mpsc::channel(4);
    let state = Arc::new(make_state().with_simulation(Arc::new(FrameControl::new(16, 0)), tx));
    let app = build_router(Arc::clone(&state));

    let (_, empty) = send(&app, get("/api/sim/frame")).await;
    assert_eq!(empty["frame"], 0);

    state.publish_frame(&FrameSnapshot { frame: 42, width: 800.0, height: 600.0, agents: Vec::new() });
    let (status, json) = send(&app, get("/api/sim/frame")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["frame"], 42);
}

#[tokio::test]
async fn frame_loop_control() {
    let (tx, _rx) = mpsc::channel(4);
    let control = Arc::new(FrameControl::new(16, 0));
    let app = build_router(Arc::new(make_state().with_simulation(Arc::clone(&control), tx)));

    let (status, _) = send(&app, post_json("/api/sim/pause", &Value::Null, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(control.is_paused());

    let (_, json) = send(&app, get("/api/sim/status")).await;
    assert_eq!(json["paused"], true);
    assert_eq!(json["interval_ms"], 16);

    let (status, json) = send(&app, post_json("/api/sim/speed", &json!({ "interval_ms": 40 }), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["previous_interval_ms"], 16);
    assert_eq!(control.interval_ms(), 40);

    let (status, _) = send(&app, post_json("/api/sim/speed", &json!({ "interval_ms": 0 }), None)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    send(&app, post_json("/api/sim/resume", &Value::Null, None)).await;
    assert!(!control.is_paused());
}
