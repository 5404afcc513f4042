//! Protolab engine binary.
//!
//! Wires together the result store, the quiz definition, the roaming-agent
//! frame loop and the HTTP API, then runs until `Ctrl-C`.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `protolab-config.yaml` (or `PROTOLAB_CONFIG`)
//! 2. Initialize structured logging (tracing)
//! 3. Open the result store
//! 4. Build the quiz (custom question bank or the stock one)
//! 5. Create the simulator and spawn the frame loop
//! 6. Start the API server
//! 7. Wait for `Ctrl-C`, then stop the frame loop and drain the server

mod error;
mod store;
mod surface;

use std::path::PathBuf;
use std::sync::Arc;

use protolab_api::AppState;
use protolab_core::config::{DEFAULT_CONFIG_PATH, FrameLoopConfig, LoggingConfig, QuizConfig};
use protolab_core::{AppConfig, FrameControl, FrameLoopHandle, LogFormat, spawn_frame_loop};
use protolab_quiz::{ProfileTable, QuestionBank, Quiz, QuizError};
use protolab_sim::{SimConfig, Simulator, Viewport};
use tokio::sync::watch;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use crate::error::EngineError;
use crate::surface::BroadcastSurface;

/// Pending pointer commands the frame loop will buffer.
const POINTER_QUEUE: usize = 64;

/// Application entry point.
///
/// # Errors
///
/// Returns an error if any initialization step fails.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration.
    let config_path =
        std::env::var("PROTOLAB_CONFIG").map_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);
    let config = AppConfig::load_or_default(&config_path).map_err(EngineError::from)?;
    config.validate().map_err(EngineError::from)?;

    // 2. Initialize structured logging.
    init_tracing(&config.logging);
    info!(
        path = %config_path.display(),
        found = config_path.exists(),
        backend = ?config.storage.backend,
        port = config.server.port,
        agents = config.simulation.agent_count,
        "protolab-engine starting"
    );

    // 3. Open the result store.
    let results = store::open_store(&config.storage).await.map_err(EngineError::from)?;

    // 4. Build the quiz.
    let quiz = Arc::new(build_quiz(&config.quiz).map_err(EngineError::from)?);
    info!(questions = quiz.bank().len(), profiles = quiz.profiles().len(), "Quiz loaded");

    // 5. Create the simulator and spawn the frame loop.
    let state = AppState::new(results, quiz);
    let (state, mut frame_loop) = if config.frame_loop.enabled {
        let viewport = Viewport::new(config.viewport.width, config.viewport.height);
        let handle = start_frame_loop(&state, config.simulation.clone(), viewport, &config.frame_loop)?;
        let state = state.with_simulation(Arc::clone(handle.control()), handle.inputs());
        (state, Some(handle))
    } else {
        info!("Frame loop disabled");
        (state, None)
    };
    let state = Arc::new(state);

    // 6. Start the API server.
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let api = protolab_api::spawn_api(&config.server, Arc::clone(&state), wait_for_shutdown(shutdown_rx))
        .await
        .map_err(EngineError::from)?;
    info!(host = %config.server.host, port = config.server.port, "API server started");

    // 7. Run until Ctrl-C.
    shutdown_signal().await;
    info!("Shutdown signal received");

    if let Some(handle) = frame_loop.as_mut() {
        handle.shutdown().await.map_err(EngineError::from)?;
    }

    shutdown_tx.send_replace(true);
    if let Err(e) = api.await {
        warn!(error = %e, "API server task failed");
    }

    info!("protolab-engine shutdown complete");
    Ok(())
}

/// Install the global subscriber. `RUST_LOG` wins over `logging.level`.
fn init_tracing(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));
    match config.format {
        LogFormat::Json => tracing_subscriber::fmt().with_env_filter(filter).json().init(),
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).with_target(true).init(),
    }
}

/// The configured question bank paired with the stock profiles.
fn build_quiz(config: &QuizConfig) -> Result<Quiz, QuizError> {
    match &config.questions_file {
        Some(path) => {
            info!(path = %path.display(), "Loading question bank");
            Quiz::new(QuestionBank::from_file(path)?, ProfileTable::standard())
        }
        None => Quiz::standard(),
    }
}

/// Build the simulator and run it on its own task, publishing into `state`.
fn start_frame_loop(
    state: &AppState,
    sim_config: SimConfig,
    viewport: Viewport,
    loop_config: &FrameLoopConfig,
) -> Result<FrameLoopHandle, EngineError> {
    let simulator = Simulator::new(sim_config, viewport)?;
    let control = Arc::new(FrameControl::new(loop_config.interval_ms, loop_config.max_frames));
    // Clones share the broadcast channel and latest-frame slot.
    let surface = BroadcastSurface::new(Arc::new(state.clone()));

    info!(
        width = viewport.width,
        height = viewport.height,
        interval_ms = control.interval_ms(),
        max_frames = control.max_frames(),
        "Frame loop spawned"
    );
    Ok(spawn_frame_loop(simulator, control, surface, POINTER_QUEUE))
}

async fn wait_for_shutdown(mut rx: watch::Receiver<bool>) {
    if rx.wait_for(|stop| *stop).await.is_err() {
        debug!("Shutdown sender dropped");
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl-C, shutting down");
    }
}
