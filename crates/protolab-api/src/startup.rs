//! Server startup helper for embedding in the engine.
//!
//! [`spawn_api`] binds eagerly, so a busy port is reported to the caller,
//! then serves on a background task that runs alongside the frame loop.

use std::future::Future;
use std::sync::Arc;

use protolab_core::config::ServerConfig;
use tokio::task::JoinHandle;

use crate::server::{self, ServerError};
use crate::state::AppState;

/// Bind `config` and serve on a background task until `shutdown` resolves.
///
/// The returned handle completes once the server has drained.
///
/// # Errors
///
/// Returns [`ServerError::Bind`] if the address cannot be bound.
pub async fn spawn_api(
    config: &ServerConfig,
    state: Arc<AppState>,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<JoinHandle<()>, ServerError> {
    let listener = server::bind(config).await?;

    let handle = tokio::spawn(async move {
        if let Err(e) = server::serve(listener, state, shutdown).await {
            tracing::error!(error = %e, "API server exited with error");
        }
    });

    tracing::info!(host = %config.host, port = config.port, "API server spawned on background task");
    Ok(handle)
}
