//! Roaming agent state and its pop-in animation.
//!
//! An agent is hidden until its stagger delay elapses, then scales in along
//! a short overshoot curve (0.8 up to 1.1, settling at 1.0) while its
//! opacity jumps to 1.

use protolab_types::AgentId;

use crate::vec2::Vec2;

/// Scale of an agent that has not appeared yet.
pub const HIDDEN_SCALE: f64 = 0.8;

/// Extra scale applied while hovered or dragged.
pub const HOVER_SCALE: f64 = 1.05;

/// One animated icon.
#[derive(Debug, Clone, PartialEq)]
pub struct Agent {
    /// Stable identity (spawn index).
    pub id: AgentId,
    /// Icon file name.
    pub icon: String,
    /// Center position.
    pub position: Vec2,
    /// Units per tick.
    pub velocity: Vec2,
    /// Collision radius.
    pub radius: f64,
    /// Decorative rotation in degrees.
    pub rotation: f64,
    /// Set once the stagger delay has elapsed.
    pub has_appeared: bool,
    /// Delay after simulation start before the agent appears.
    pub appear_delay_ms: u64,
    /// Time the agent appeared, if it has.
    pub appear_start_ms: Option<u64>,
    /// Pop-in progress in `[0, 1]`.
    pub appear_progress: f64,
    /// Pointer is over the agent.
    pub is_hovered: bool,
    /// Agent follows the pointer.
    pub is_dragging: bool,
    /// Agent does not integrate its velocity.
    pub is_stationary: bool,
}

impl Agent {
    /// Moves this tick: appeared and not held by the pointer.
    pub const fn is_free(&self) -> bool {
        self.has_appeared && !self.is_dragging && !self.is_stationary
    }

    /// Flip to appeared once `elapsed_ms` reaches the stagger delay.
    ///
    /// Returns `true` on the tick the agent appears.
    pub fn try_appear(&mut self, elapsed_ms: u64, now_ms: u64) -> bool {
        if self.has_appeared || elapsed_ms < self.appear_delay_ms {
            return false;
        }
        self.has_appeared = true;
        self.appear_start_ms = Some(now_ms);
        true
    }

    /// Advance pop-in progress. Progress never decreases.
    pub fn update_appearance(&mut self, now_ms: u64, duration_ms: u64) {
        let Some(start) = self.appear_start_ms.filter(|_| self.has_appeared) else {
            return;
        };
        let elapsed = now_ms.saturating_sub(start) as f64;
        let progress = (elapsed / duration_ms.max(1) as f64).min(1.0);
        self.appear_progress = self.appear_progress.max(progress);
    }

    /// Pop-in scale without the hover boost.
    pub fn pop_in_scale(&self) -> f64 {
        if !self.has_appeared {
            return HIDDEN_SCALE;
        }
        let p = self.appear_progress;
        if p >= 1.0 {
            1.0
        } else if p <= 0.5 {
            (p * 2.0).mul_add(0.3, HIDDEN_SCALE)
        } else {
            ((p - 0.5) * 2.0).mul_add(-0.1, 1.1)
        }
    }

    /// Final render scale, including the hover/drag boost.
    pub fn render_scale(&self) -> f64 {
        let boost = if self.is_hovered || self.is_dragging { HOVER_SCALE } else { 1.0 };
        self.pop_in_scale() * boost
    }

    /// Render opacity: hidden agents are fully transparent.
    pub const fn opacity(&self) -> f64 {
        if self.has_appeared { 1.0 } else { 0.0 }
    }
}
