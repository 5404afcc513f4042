//! Configuration and frame-loop orchestration for Protolab.
//!
//! - [`config`] -- YAML configuration with environment overrides
//! - [`control`] -- Pause, stop and frame-rate controls shared with the API
//! - [`runner`] -- The cancellable frame loop driving the simulator

pub mod config;
pub mod control;
pub mod runner;

pub use config::{AppConfig, ConfigError, LogFormat, StorageBackend};
pub use control::{FrameControl, FrameEndReason, FrameLoopStatus};
pub use runner::{FrameLoopHandle, FrameLoopResult, NullSurface, RenderSurface, RunnerError, run_frame_loop, spawn_frame_loop};
