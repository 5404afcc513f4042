//! Frame loop runner with pause, stop and pointer input.
//!
//! [`run_frame_loop`] owns the simulator for its whole life. Between
//! frames it drains queued [`PointerCommand`]s, so input is never applied
//! while a frame is being computed and no lock guards agent state:
//!
//! - **Bounded run**: stop after `max_frames`
//! - **Pause/resume**: the loop parks until resumed
//! - **Variable frame rate**: interval adjustable at runtime
//! - **Clean stop**: `request_stop` or dropping the [`FrameLoopHandle`]
//!   wakes a sleeping loop, and no frame starts afterwards

use std::sync::Arc;
use std::time::Duration;

use protolab_sim::{PointerCommand, Simulator};
use protolab_types::FrameSnapshot;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, info};

use crate::control::{FrameControl, FrameEndReason};

/// Errors from a spawned frame loop.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// The loop task panicked or was aborted.
    #[error("frame loop task failed: {source}")]
    Join {
        /// The underlying join error.
        #[from]
        source: tokio::task::JoinError,
    },

    /// The handle was already joined.
    #[error("frame loop already joined")]
    AlreadyJoined,
}

/// Result of a frame loop run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameLoopResult {
    /// Why the loop ended.
    pub end_reason: FrameEndReason,
    /// Number of frames produced.
    pub frames: u64,
}

/// Consumer of per-frame agent transforms.
///
/// Called once per frame on the loop task; implementations must not block.
pub trait RenderSurface: Send {
    /// Present one frame.
    fn draw(&mut self, frame: &FrameSnapshot);
}

/// A surface that discards every frame.
pub struct NullSurface;

impl RenderSurface for NullSurface {
    fn draw(&mut self, _frame: &FrameSnapshot) {}
}

/// Run the frame loop until the frame limit or a stop request.
///
/// The simulator clock is milliseconds since the loop started.
pub async fn run_frame_loop(
    sim: &mut Simulator,
    control: &FrameControl,
    inputs: &mut mpsc::Receiver<PointerCommand>,
    surface: &mut dyn RenderSurface,
) -> FrameLoopResult {
    let started = Instant::now();
    let mut frames: u64 = 0;

    info!(
        interval_ms = control.interval_ms(),
        max_frames = control.max_frames(),
        agents = sim.agents().len(),
        "Frame loop starting"
    );

    loop {
        // --- Check pause ---
        if control.is_paused() {
            info!("Frame loop paused, waiting for resume...");
            control.wait_if_paused().await;
            info!("Frame loop resumed");
        }

        // --- Check stop request (before frame) ---
        if control.is_stop_requested() {
            info!(frames, "Frame loop stop requested");
            return FrameLoopResult { end_reason: FrameEndReason::Stopped, frames };
        }

        let now_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        // --- Apply queued input ---
        while let Ok(command) = inputs.try_recv() {
            debug!(?command, "applying pointer command");
            sim.apply(command, now_ms);
        }

        // --- Execute frame ---
        sim.tick(now_ms);
        frames = frames.saturating_add(1);
        surface.draw(&sim.frame());

        // --- Check frame limit (after frame) ---
        if control.frame_limit_reached(frames) {
            info!(frames, "Frame limit reached");
            return FrameLoopResult { end_reason: FrameEndReason::MaxFramesReached, frames };
        }

        // --- Sleep for frame interval, waking early on stop ---
        let interval = Duration::from_millis(control.interval_ms());
        tokio::select! {
            () = tokio::time::sleep(interval) => {}
            () = control.stopped() => {}
        }
    }
}

/// A frame loop running on its own task.
///
/// Dropping the handle requests a stop; the task then exits before its
/// next frame.
pub struct FrameLoopHandle {
    control: Arc<FrameControl>,
    inputs: mpsc::Sender<PointerCommand>,
    task: Option<JoinHandle<FrameLoopResult>>,
}

impl FrameLoopHandle {
    /// The loop's control state.
    pub const fn control(&self) -> &Arc<FrameControl> {
        &self.control
    }

    /// A sender for pointer commands applied before the next frame.
    pub fn inputs(&self) -> mpsc::Sender<PointerCommand> {
        self.inputs.clone()
    }

    /// Request a stop without waiting for it.
    pub fn stop(&self) {
        self.control.request_stop();
    }

    /// Stop the loop and wait for it to finish.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Join`] if the task panicked, or
    /// [`RunnerError::AlreadyJoined`] on a second call.
    pub async fn shutdown(&mut self) -> Result<FrameLoopResult, RunnerError> {
        self.control.request_stop();
        let task = self.task.take().ok_or(RunnerError::AlreadyJoined)?;
        Ok(task.await?)
    }
}

impl Drop for FrameLoopHandle {
    fn drop(&mut self) {
        self.control.request_stop();
    }
}

/// Spawn [`run_frame_loop`] on the current runtime.
///
/// `queue` bounds the pointer command channel.
pub fn spawn_frame_loop(
    mut sim: Simulator,
    control: Arc<FrameControl>,
    mut surface: impl RenderSurface + 'static,
    queue: usize,
) -> FrameLoopHandle {
    let (tx, mut rx) = mpsc::channel(queue.max(1));
    let loop_control = Arc::clone(&control);
    let task = tokio::spawn(async move {
        let result = run_frame_loop(&mut sim, &loop_control, &mut rx, &mut surface).await;
        log_frame_loop_end(&result);
        result
    });
    FrameLoopHandle { control, inputs: tx, task: Some(task) }
}

/// Log how a frame loop ended.
fn log_frame_loop_end(result: &FrameLoopResult) {
    info!(reason = ?result.end_reason, frames = result.frames, "Frame loop ended");
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicU64, Ordering};

    use protolab_sim::{SimConfig, Viewport};

    use super::*;

    fn simulator() -> Simulator {
        let config = SimConfig { agent_count: 4, seed: Some(3), ..SimConfig::default() };
        Simulator::new(config, Viewport::new(900.0, 700.0)).unwrap()
    }

    /// Counts frames and keeps the last one.
    #[derive(Clone, Default)]
    struct RecordingSurface {
        count: Arc<AtomicU64>,
        last: Arc<Mutex<Option<FrameSnapshot>>>,
    }

    impl RenderSurface for RecordingSurface {
        fn draw(&mut self, frame: &FrameSnapshot) {
            self.count.fetch_add(1, Ordering::SeqCst);
            *self.last.lock().unwrap() = Some(frame.clone());
        }
    }

    #[tokio::test(start_paused = true)]
    async fn bounded_by_max_frames() {
        let mut sim = simulator();
        let control = FrameControl::new(16, 5);
        let (_tx, mut rx) = mpsc::channel(8);
        let mut surface = RecordingSurface::default();

        let result = run_frame_loop(&mut sim, &control, &mut rx, &mut surface).await;

        assert_eq!(result, FrameLoopResult { end_reason: FrameEndReason::MaxFramesReached, frames: 5 });
        assert_eq!(surface.count.load(Ordering::SeqCst), 5);
        assert_eq!(sim.frame_count(), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn stop_before_start_runs_no_frames() {
        let mut sim = simulator();
        let control = FrameControl::new(16, 0);
        control.request_stop();
        let (_tx, mut rx) = mpsc::channel(8);

        let result = run_frame_loop(&mut sim, &control, &mut rx, &mut NullSurface).await;

        assert_eq!(result.end_reason, FrameEndReason::Stopped);
        assert_eq!(result.frames, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn queued_commands_apply_before_the_frame() {
        let mut sim = simulator();
        let control = FrameControl::new(16, 1);
        let (tx, mut rx) = mpsc::channel(8);
        tx.send(PointerCommand::Resize { width: 640.0, height: 480.0 }).await.unwrap();
        let mut surface = RecordingSurface::default();

        run_frame_loop(&mut sim, &control, &mut rx, &mut surface).await;

        let frame = surface.last.lock().unwrap().clone().unwrap();
        assert!((frame.width - 640.0).abs() < f64::EPSILON);
        assert!((frame.height - 480.0).abs() < f64::EPSILON);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_handle_stops_the_loop() {
        let surface = RecordingSurface::default();
        let count = Arc::clone(&surface.count);
        let handle = spawn_frame_loop(simulator(), Arc::new(FrameControl::new(16, 0)), surface, 8);

        tokio::time::sleep(Duration::from_millis(200)).await;
        let control = Arc::clone(handle.control());
        drop(handle);
        assert!(control.is_stop_requested());
        let at_drop = count.load(Ordering::SeqCst);
        assert!(at_drop > 0);

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(count.load(Ordering::SeqCst), at_drop);
    }

    #[tokio::test(start_paused = true)]
    async fn shutdown_reports_stopped() {
        let mut handle = spawn_frame_loop(simulator(), Arc::new(FrameControl::new(16, 0)), NullSurface, 8);
        tokio::time::sleep(Duration::from_millis(100)).await;

        let result = handle.shutdown().await.unwrap();
        assert_eq!(result.end_reason, FrameEndReason::Stopped);
        assert!(result.frames > 0);
        assert!(matches!(handle.shutdown().await, Err(RunnerError::AlreadyJoined)));
    }

    #[tokio::test(start_paused = true)]
    async fn paused_loop_produces_no_frames_until_resumed() {
        let control = Arc::new(FrameControl::new(16, 0));
        control.pause();
        let surface = RecordingSurface::default();
        let count = Arc::clone(&surface.count);
        let _handle = spawn_frame_loop(simulator(), Arc::clone(&control), surface, 8);

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);

        control.resume();
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(count.load(Ordering::SeqCst) > 0);
    }
}
