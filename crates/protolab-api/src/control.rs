//! Frame loop control endpoints.
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/api/sim/status` | Current loop status |
//! | `POST` | `/api/sim/pause` | Pause after the current frame |
//! | `POST` | `/api/sim/resume` | Resume a paused loop |
//! | `POST` | `/api/sim/speed` | Set the frame interval (ms) |

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::IntoResponse;
use protolab_core::FrameLoopStatus;
use protolab_core::control::MIN_INTERVAL_MS;
use serde::Deserialize;

use crate::error::ApiError;
use crate::state::{AppState, SimHandle};

/// Request body for `POST /api/sim/speed`.
#[derive(Debug, Deserialize)]
pub struct SetSpeedRequest {
    /// New frame interval in milliseconds.
    pub interval_ms: u64,
}

fn sim(state: &AppState) -> Result<&SimHandle, ApiError> {
    state.sim.as_ref().ok_or_else(|| ApiError::Unavailable("simulator is not running".to_owned()))
}

/// `GET /api/sim/status`
pub async fn status(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, ApiError> {
    let sim = sim(&state)?;
    let frame = state.latest_frame.read().await.as_ref().map_or(0, |f| f.frame);
    Ok(Json(FrameLoopStatus::capture(&sim.control, frame)))
}

/// `POST /api/sim/pause`
pub async fn pause(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, ApiError> {
    sim(&state)?.control.pause();
    tracing::info!("frame loop pause requested");
    Ok(Json(serde_json::json!({ "success": true, "message": "Simulation paused" })))
}

/// `POST /api/sim/resume`
pub async fn resume(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, ApiError> {
    sim(&state)?.control.resume();
    tracing::info!("frame loop resumed");
    Ok(Json(serde_json::json!({ "success": true, "message": "Simulation resumed" })))
}

/// Change the frame interval; takes effect before the next sleep.
///
/// # Route
///
/// `POST /api/sim/speed`
pub async fn set_speed(
    State(state): State<Arc<AppState>>,
    body: Result<Json<SetSpeedRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = body.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let sim = sim(&state)?;

    let previous = sim
        .control
        .set_interval_ms(request.interval_ms)
        .ok_or_else(|| ApiError::BadRequest(format!("interval_ms must be at least {MIN_INTERVAL_MS}")))?;

    tracing::info!(previous, interval_ms = request.interval_ms, "frame interval changed");
    Ok(Json(serde_json::json!({
        "success": true,
        "message": format!("Frame interval changed from {previous}ms to {}ms", request.interval_ms),
        "previous_interval_ms": previous,
        "interval_ms": request.interval_ms,
    })))
}
