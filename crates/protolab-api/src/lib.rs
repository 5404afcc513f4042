//! HTTP API for Protolab.
//!
//! This crate provides an Axum server that exposes:
//!
//! - **Result endpoints** for recording quiz results (once per client) and
//!   reading the agent leaderboard
//! - **Profile endpoints** resolving result codes to agent profiles
//! - **Simulation endpoints** for the latest frame, pointer input and
//!   frame loop control (pause, resume, speed, status)
//! - **`WebSocket` endpoint** (`/ws/frames`) streaming every frame via
//!   [`tokio::sync::broadcast`]
//!
//! # Architecture
//!
//! The simulator lives on the engine's frame loop task. The API never
//! touches it directly: pointer commands go through a bounded channel
//! and frames come back through the broadcast channel and the
//! latest-frame slot in [`AppState`].

pub mod control;
pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod startup;
pub mod state;
pub mod ws;

pub use error::ApiError;
pub use router::build_router;
pub use server::{ServerError, bind, serve, start_server};
pub use startup::spawn_api;
pub use state::{AppState, SimHandle};
