//! Render surface that feeds the API.
//!
//! Each frame is stored as the latest snapshot and broadcast to every
//! connected `WebSocket` client.

use std::sync::Arc;

use protolab_api::AppState;
use protolab_core::RenderSurface;
use protolab_types::FrameSnapshot;
use tracing::trace;

/// Bridges the frame loop to the API state.
pub struct BroadcastSurface {
    state: Arc<AppState>,
}

impl BroadcastSurface {
    /// A surface publishing into `state`.
    pub const fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }
}

impl RenderSurface for BroadcastSurface {
    fn draw(&mut self, frame: &FrameSnapshot) {
        let receivers = self.state.publish_frame(frame);
        trace!(frame = frame.frame, receivers, "Frame broadcast sent");
    }
}
