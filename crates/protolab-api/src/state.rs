//! Shared application state for the API server.
//!
//! [`AppState`] holds the result store, the quiz definition, and, when a
//! simulator is running, the frame broadcast channel plus the handles
//! needed to steer the frame loop.

use std::sync::Arc;

use protolab_core::FrameControl;
use protolab_db::ResultStore;
use protolab_quiz::Quiz;
use protolab_sim::PointerCommand;
use protolab_types::FrameSnapshot;
use tokio::sync::{RwLock, broadcast, mpsc};

/// Capacity of the broadcast channel for frames.
///
/// If a subscriber falls behind by more than this many messages it will
/// receive a [`broadcast::error::RecvError::Lagged`] and skip to the
/// newest message.
const BROADCAST_CAPACITY: usize = 256;

/// Handles into a running frame loop.
#[derive(Clone)]
pub struct SimHandle {
    /// Pause, stop and frame-rate controls.
    pub control: Arc<FrameControl>,
    /// Pointer commands applied before the next frame.
    pub inputs: mpsc::Sender<PointerCommand>,
}

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`] and injected via Axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    /// Broadcast sender for frames.
    pub tx: broadcast::Sender<FrameSnapshot>,
    /// The most recent frame (updated each frame).
    pub latest_frame: Arc<RwLock<Option<FrameSnapshot>>>,
    /// Quiz result persistence.
    pub store: Arc<dyn ResultStore>,
    /// Questions and profiles.
    pub quiz: Arc<Quiz>,
    /// The running simulator, if any.
    pub sim: Option<SimHandle>,
}

impl AppState {
    /// Create a state with no simulator attached.
    pub fn new(store: Arc<dyn ResultStore>, quiz: Arc<Quiz>) -> Self {
        let (tx, _) = broadcast::channel(BROADCAST_CAPACITY);
        Self { tx, latest_frame: Arc::new(RwLock::new(None)), store, quiz, sim: None }
    }

    /// Attach a running frame loop.
    #[must_use]
    pub fn with_simulation(mut self, control: Arc<FrameControl>, inputs: mpsc::Sender<PointerCommand>) -> Self {
        self.sim = Some(SimHandle { control, inputs });
        self
    }

    /// Subscribe to the frame broadcast channel.
    pub fn subscribe(&self) -> broadcast::Receiver<FrameSnapshot> {
        self.tx.subscribe()
    }

    /// Record `frame` as the latest and push it to all connected clients.
    ///
    /// Never blocks: if a reader holds the latest-frame lock the stored
    /// copy is skipped and the next frame catches up. Returns the number
    /// of `WebSocket` receivers (0 is not an error).
    pub fn publish_frame(&self, frame: &FrameSnapshot) -> usize {
        if let Ok(mut latest) = self.latest_frame.try_write() {
            *latest = Some(frame.clone());
        }
        // send returns Err only when there are zero receivers.
        self.tx.send(frame.clone()).unwrap_or(0)
    }
}
