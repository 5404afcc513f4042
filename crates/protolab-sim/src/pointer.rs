//! Pointer input: drag, toss and forced release.

use protolab_types::AgentId;
use serde::{Deserialize, Serialize};

use crate::vec2::Vec2;

/// Why a drag ended without a normal release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReleaseReason {
    /// The window lost focus.
    WindowBlur,
    /// The document became hidden.
    DocumentHidden,
    /// The pointer left the rendering surface.
    PointerLeft,
    /// A new press started while the previous drag was still active.
    Superseded,
}

/// A pointer event delivered to the simulator between frames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PointerCommand {
    /// Press at a surface point; grabs the topmost agent under it.
    Press {
        /// Pointer x.
        x: f64,
        /// Pointer y.
        y: f64,
    },
    /// Pointer moved.
    Move {
        /// Pointer x.
        x: f64,
        /// Pointer y.
        y: f64,
    },
    /// Pointer released; tosses the dragged agent.
    Release {
        /// Pointer x.
        x: f64,
        /// Pointer y.
        y: f64,
    },
    /// Pointer entered or left an agent.
    Hover {
        /// Target agent.
        agent: AgentId,
        /// Entered (`true`) or left (`false`).
        hovered: bool,
    },
    /// Abort any drag without a toss.
    ForceRelease {
        /// What caused the abort.
        reason: ReleaseReason,
    },
    /// The rendering surface changed size.
    Resize {
        /// New width.
        width: f64,
        /// New height.
        height: f64,
    },
}

/// The drag in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    /// Agent being dragged.
    pub agent: AgentId,
    /// Where the press happened.
    pub press_point: Vec2,
    /// When the press happened.
    pub press_ms: u64,
}

/// Toss tuning, copied out of the simulator config.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TossParams {
    /// Drag speed to toss speed multiplier.
    pub multiplier: f64,
    /// Toss speed cap.
    pub max_speed: f64,
    /// Minimum effective drag duration.
    pub min_drag_ms: u64,
}

/// Velocity imparted when a drag from `start` ends at `end`.
///
/// Speed is `distance / duration * multiplier`, capped at `max_speed`, with
/// the duration floored at `min_drag_ms`. A zero-length drag yields zero.
pub fn toss_velocity(start: Vec2, end: Vec2, duration_ms: u64, params: TossParams) -> Vec2 {
    let duration = duration_ms.max(params.min_drag_ms).max(1) as f64;
    let delta = end - start;
    let distance = delta.length();
    if !distance.is_finite() {
        return Vec2::ZERO;
    }
    let magnitude = (distance / duration * params.multiplier).min(params.max_speed);
    Vec2::from_angle(delta.angle()) * magnitude
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const PARAMS: TossParams = TossParams { multiplier: 2.0, max_speed: 3.0, min_drag_ms: 16 };

    #[test]
    fn toss_scales_with_drag_speed() {
        let v = toss_velocity(Vec2::ZERO, Vec2::new(100.0, 0.0), 200, PARAMS);
        assert!((v.x - 1.0).abs() < 1e-9);
        assert!(v.y.abs() < 1e-9);
    }

    #[test]
    fn toss_is_capped() {
        let v = toss_velocity(Vec2::ZERO, Vec2::new(0.0, 500.0), 10, PARAMS);
        assert!((v.length() - 3.0).abs() < 1e-9);
        assert!(v.y > 0.0);
    }

    #[test]
    fn short_drag_uses_minimum_duration() {
        // 8 units in 0 ms behaves like 8 units in 16 ms.
        let v = toss_velocity(Vec2::ZERO, Vec2::new(-8.0, 0.0), 0, PARAMS);
        assert!((v.x + 1.0).abs() < 1e-9);
    }

    #[test]
    fn zero_length_drag_has_no_velocity() {
        let p = Vec2::new(42.0, 42.0);
        assert_eq!(toss_velocity(p, p, 100, PARAMS).length(), 0.0);
    }

    #[test]
    fn commands_are_tagged_json() {
        let cmd: PointerCommand = serde_json::from_str(r#"{"type":"press","x":1.0,"y":2.0}"#).unwrap();
        assert_eq!(cmd, PointerCommand::Press { x: 1.0, y: 2.0 });
        let cmd: PointerCommand =
            serde_json::from_str(r#"{"type":"force_release","reason":"document_hidden"}"#).unwrap();
        assert_eq!(cmd, PointerCommand::ForceRelease { reason: ReleaseReason::DocumentHidden });
    }
}
