//! Axum router construction.
//!
//! Assembles all routes (REST + `WebSocket`) into a single [`Router`]
//! with CORS enabled so the browser front-end can call it from any origin.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use crate::{control, handlers, ws};

/// Build the complete router.
///
/// - `GET|POST /api/personality-results` -- leaderboard / record a result
/// - `POST /api/personality-results/clear` -- remove one agent's results
/// - `GET /api/profiles`, `GET /api/profiles/{code}` -- profile lookup
/// - `GET /api/sim/frame`, `POST /api/sim/pointer` -- live simulation
/// - `GET /api/sim/status`, `POST /api/sim/{pause,resume,speed}` -- loop control
/// - `GET /ws/frames` -- `WebSocket` frame stream
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);

    Router::new()
        // Results
        .route("/api/personality-results", get(handlers::leaderboard).post(handlers::submit_result))
        .route("/api/personality-results/clear", post(handlers::clear_agent))
        // Profiles
        .route("/api/profiles", get(handlers::list_profiles))
        .route("/api/profiles/{code}", get(handlers::get_profile))
        // Simulation
        .route("/api/sim/frame", get(handlers::latest_frame))
        .route("/api/sim/pointer", post(handlers::pointer))
        .route("/api/sim/status", get(control::status))
        .route("/api/sim/pause", post(control::pause))
        .route("/api/sim/resume", post(control::resume))
        .route("/api/sim/speed", post(control::set_speed))
        // WebSocket
        .route("/ws/frames", get(ws::ws_frames))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
