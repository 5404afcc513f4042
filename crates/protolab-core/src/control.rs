//! Shared control state for a running frame loop.
//!
//! The frame loop task and its owners (the engine, API handlers, the
//! spawn handle) share one [`FrameControl`] behind an [`Arc`]. All mutable
//! fields are atomics, so the loop never takes a lock to read them.
//!
//! [`Arc`]: std::sync::Arc

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use serde::Serialize;
use tokio::sync::Notify;

/// Shortest accepted frame interval.
pub const MIN_INTERVAL_MS: u64 = 1;

/// Why a frame loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameEndReason {
    /// Reached the configured `max_frames` limit.
    MaxFramesReached,
    /// A stop was requested, directly or by dropping the handle.
    Stopped,
}

/// Pause, stop and speed controls for one frame loop.
#[derive(Debug)]
pub struct FrameControl {
    /// Whether the loop is currently paused.
    paused: AtomicBool,

    /// Wakes a paused loop on resume or stop.
    resume_notify: Notify,

    /// Whether a stop has been requested.
    stop_requested: AtomicBool,

    /// Wakes a sleeping loop on stop.
    stop_notify: Notify,

    /// Current frame interval in milliseconds (runtime-adjustable).
    interval_ms: AtomicU64,

    /// Maximum number of frames (0 = unlimited).
    max_frames: u64,
}

impl FrameControl {
    /// Controls for a loop running every `interval_ms` (at least 1) for at
    /// most `max_frames` frames (0 = unlimited).
    pub fn new(interval_ms: u64, max_frames: u64) -> Self {
        Self {
            paused: AtomicBool::new(false),
            resume_notify: Notify::new(),
            stop_requested: AtomicBool::new(false),
            stop_notify: Notify::new(),
            interval_ms: AtomicU64::new(interval_ms.max(MIN_INTERVAL_MS)),
            max_frames,
        }
    }

    // -----------------------------------------------------------------------
    // Pause / Resume
    // -----------------------------------------------------------------------

    /// Check whether the loop is paused.
    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::Acquire)
    }

    /// Pause the loop after the current frame.
    pub fn pause(&self) {
        self.paused.store(true, Ordering::Release);
    }

    /// Resume the loop and wake it.
    pub fn resume(&self) {
        self.paused.store(false, Ordering::Release);
        self.resume_notify.notify_waiters();
    }

    /// Wait until the loop is no longer paused or a stop is requested.
    pub async fn wait_if_paused(&self) {
        loop {
            let resumed = self.resume_notify.notified();
            if !self.is_paused() || self.is_stop_requested() {
                return;
            }
            resumed.await;
        }
    }

    // -----------------------------------------------------------------------
    // Stop
    // -----------------------------------------------------------------------

    /// Request a clean stop. No frame starts after the loop observes it.
    pub fn request_stop(&self) {
        self.stop_requested.store(true, Ordering::Release);
        self.stop_notify.notify_waiters();
        self.resume_notify.notify_waiters();
    }

    /// Check whether a stop has been requested.
    pub fn is_stop_requested(&self) -> bool {
        self.stop_requested.load(Ordering::Acquire)
    }

    /// Resolve once a stop has been requested.
    pub async fn stopped(&self) {
        let notified = self.stop_notify.notified();
        if self.is_stop_requested() {
            return;
        }
        notified.await;
    }

    // -----------------------------------------------------------------------
    // Frame rate
    // -----------------------------------------------------------------------

    /// Current frame interval in milliseconds.
    pub fn interval_ms(&self) -> u64 {
        self.interval_ms.load(Ordering::Acquire)
    }

    /// Set the frame interval. Returns the previous interval, or `None` if
    /// `ms` is below [`MIN_INTERVAL_MS`].
    pub fn set_interval_ms(&self, ms: u64) -> Option<u64> {
        if ms < MIN_INTERVAL_MS {
            return None;
        }
        Some(self.interval_ms.swap(ms, Ordering::AcqRel))
    }

    /// Configured frame limit (0 = unlimited).
    pub const fn max_frames(&self) -> u64 {
        self.max_frames
    }

    /// Whether `frames` has reached a non-zero limit.
    pub const fn frame_limit_reached(&self, frames: u64) -> bool {
        self.max_frames > 0 && frames >= self.max_frames
    }
}

/// JSON-serializable status of the frame loop.
#[derive(Debug, Clone, Serialize)]
pub struct FrameLoopStatus {
    /// Frame counter of the latest snapshot.
    pub frame: u64,
    /// Whether the loop is paused.
    pub paused: bool,
    /// Whether a stop has been requested.
    pub stop_requested: bool,
    /// Current frame interval in milliseconds.
    pub interval_ms: u64,
    /// Configured frame limit (0 = unlimited).
    pub max_frames: u64,
}

impl FrameLoopStatus {
    /// Status of `control` as of `frame`.
    pub fn capture(control: &FrameControl, frame: u64) -> Self {
        Self {
            frame,
            paused: control.is_paused(),
            stop_requested: control.is_stop_requested(),
            interval_ms: control.interval_ms(),
            max_frames: control.max_frames(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use super::*;

    #[test]
    fn initial_state_is_running() {
        let control = FrameControl::new(16, 0);
        assert!(!control.is_paused());
        assert!(!control.is_stop_requested());
        assert!(!control.frame_limit_reached(u64::MAX));
    }

    #[test]
    fn pause_and_resume() {
        let control = FrameControl::new(16, 0);
        control.pause();
        assert!(control.is_paused());
        control.resume();
        assert!(!control.is_paused());
    }

    #[test]
    fn interval_is_clamped_and_adjustable() {
        let control = FrameControl::new(0, 0);
        assert_eq!(control.interval_ms(), 1);
        assert_eq!(control.set_interval_ms(33), Some(1));
        assert_eq!(control.interval_ms(), 33);
        assert_eq!(control.set_interval_ms(0), None);
        assert_eq!(control.interval_ms(), 33);
    }

    #[test]
    fn frame_limit() {
        let control = FrameControl::new(16, 10);
        assert!(!control.frame_limit_reached(9));
        assert!(control.frame_limit_reached(10));
    }

    #[tokio::test(start_paused = true)]
    async fn stop_wakes_a_paused_waiter() {
        let control = Arc::new(FrameControl::new(16, 0));
        control.pause();
        let waiter = {
            let control = Arc::clone(&control);
            tokio::spawn(async move { control.wait_if_paused().await })
        };
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(!waiter.is_finished());

        control.request_stop();
        tokio::time::timeout(Duration::from_secs(1), waiter).await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn stopped_resolves_after_request() {
        let control = FrameControl::new(16, 0);
        control.request_stop();
        control.stopped().await;
    }
}
