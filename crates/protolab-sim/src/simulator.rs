//! The discrete-time simulation loop body.
//!
//! [`Simulator`] owns every agent. Each call to [`Simulator::tick`] runs one
//! frame: staggered appearance, rotation, pop-in progress, movement, wall
//! and exclusion-zone bounces, then agent-agent contact with a few
//! relaxation passes so no pair stays overlapped. Pointer input is applied
//! between ticks by the same owner, so no locking is involved.

use protolab_types::{AgentFrame, AgentId, FrameSnapshot};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, trace, warn};

use crate::agent::Agent;
use crate::collision::{
    SEPARATION_PASSES, relax_pairs, resolve_pairs, resolve_walls, resolve_zone,
};
use crate::config::{MAX_AGENTS, SimConfig};
use crate::error::SimError;
use crate::geometry::{Rect, Viewport};
use crate::pointer::{DragState, PointerCommand, ReleaseReason, TossParams, toss_velocity};
use crate::vec2::Vec2;

/// Roaming-agent simulation state.
#[derive(Debug)]
pub struct Simulator {
    config: SimConfig,
    viewport: Viewport,
    zones: Vec<Rect>,
    agents: Vec<Agent>,
    drag: Option<DragState>,
    rng: SmallRng,
    frame: u64,
    epoch_ms: Option<u64>,
}

impl Simulator {
    /// Create a simulator for a viewport of the given size.
    ///
    /// The population is seeded immediately if the viewport is usable,
    /// otherwise on the first resize to a usable one.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidConfig`] if the configuration fails validation.
    pub fn new(config: SimConfig, viewport: Viewport) -> Result<Self, SimError> {
        config.validate()?;
        if config.agent_count > MAX_AGENTS {
            warn!(
                requested = config.agent_count,
                max = MAX_AGENTS,
                "agent count above limit, capping"
            );
        }
        let rng = config.seed.map_or_else(SmallRng::from_os_rng, SmallRng::seed_from_u64);
        let mut sim = Self {
            zones: resolve_zones(&config, viewport),
            config,
            viewport,
            agents: Vec::new(),
            drag: None,
            rng,
            frame: 0,
            epoch_ms: None,
        };
        if sim.is_usable() {
            sim.seed_population();
        } else {
            debug!(width = viewport.width, height = viewport.height, "viewport unusable, deferring spawn");
        }
        Ok(sim)
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// Active configuration.
    pub const fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Current viewport.
    pub const fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Exclusion zones resolved against the current viewport.
    pub fn zones(&self) -> &[Rect] {
        &self.zones
    }

    /// All agents in draw order.
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    /// Look up one agent.
    pub fn agent(&self, id: AgentId) -> Option<&Agent> {
        self.agents.iter().find(|a| a.id == id)
    }

    /// The agent currently being dragged.
    pub fn dragged(&self) -> Option<AgentId> {
        self.drag.map(|d| d.agent)
    }

    /// Number of ticks run so far.
    pub const fn frame_count(&self) -> u64 {
        self.frame
    }

    /// Whether the viewport can hold agents at all.
    pub fn is_usable(&self) -> bool {
        self.viewport.is_usable(self.config.icon_size)
    }

    // -----------------------------------------------------------------------
    // Viewport
    // -----------------------------------------------------------------------

    /// Change the viewport size and re-resolve relative exclusion zones.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.viewport = Viewport::new(width, height);
        self.zones = resolve_zones(&self.config, self.viewport);
        debug!(width, height, usable = self.is_usable(), "viewport resized");
        if self.agents.is_empty() && self.is_usable() {
            self.seed_population();
        }
    }

    fn seed_population(&mut self) {
        let count = self.config.effective_agent_count();
        let count_u64 = u64::try_from(count).unwrap_or(u64::MAX);
        let speed = self.config.speed;
        let mut agents: Vec<Agent> = Vec::with_capacity(count);

        for index in 0..count {
            let position = spawn_position(
                &mut self.rng,
                &self.config,
                self.viewport,
                &self.zones,
                &agents,
                index,
            );
            let velocity = Vec2::new(
                self.rng.random_range(-speed..=speed),
                self.rng.random_range(-speed..=speed),
            );
            let icon = index
                .checked_rem(self.config.icons.len())
                .and_then(|i| self.config.icons.get(i))
                .cloned()
                .unwrap_or_default();
            let delay = self
                .config
                .appear_ramp_ms
                .saturating_mul(u64::try_from(index).unwrap_or(u64::MAX))
                .checked_div(count_u64)
                .unwrap_or(0);

            agents.push(Agent {
                id: AgentId(u32::try_from(index).unwrap_or(u32::MAX)),
                icon,
                position,
                velocity,
                radius: self.config.collision_radius(),
                rotation: self.rng.random_range(0.0..360.0),
                has_appeared: false,
                appear_delay_ms: delay,
                appear_start_ms: None,
                appear_progress: 0.0,
                is_hovered: false,
                is_dragging: false,
                is_stationary: false,
            });
        }

        self.agents = agents;
        self.epoch_ms = None;
        info!(
            agents = count,
            width = self.viewport.width,
            height = self.viewport.height,
            "agent population seeded"
        );
    }

    // -----------------------------------------------------------------------
    // Tick
    // -----------------------------------------------------------------------

    /// Advance one frame at wall-clock time `now_ms`.
    ///
    /// The first tick after seeding starts the appearance clock. Ticks on an
    /// unusable viewport only advance the frame counter.
    pub fn tick(&mut self, now_ms: u64) {
        self.frame = self.frame.saturating_add(1);
        if !self.is_usable() || self.agents.is_empty() {
            return;
        }

        let epoch = *self.epoch_ms.get_or_insert(now_ms);
        let elapsed = now_ms.saturating_sub(epoch);
        let visual_radius = self.config.visual_radius();
        let speed = self.config.speed;

        for agent in &mut self.agents {
            if agent.try_appear(elapsed, now_ms) {
                trace!(agent = %agent.id, now_ms, "agent appeared");
            }
            if agent.has_appeared && !agent.is_dragging {
                agent.rotation += self.config.rotation_step_deg;
            }
            agent.update_appearance(now_ms, self.config.appear_duration_ms);

            if !agent.is_free() {
                continue;
            }
            agent.position += agent.velocity;
            resolve_walls(agent, self.viewport, visual_radius);
            for zone in &self.zones {
                resolve_zone(agent, zone, speed);
            }
        }

        let contacts = resolve_pairs(&mut self.agents, speed, &mut self.rng);
        self.clamp_to_walls();
        if contacts > 0 {
            for _ in 0..SEPARATION_PASSES {
                let moved = relax_pairs(&mut self.agents);
                self.clamp_to_walls();
                if !moved {
                    break;
                }
            }
        }
    }

    fn clamp_to_walls(&mut self) {
        let visual_radius = self.config.visual_radius();
        for agent in self.agents.iter_mut().filter(|a| a.has_appeared && !a.is_dragging) {
            resolve_walls(agent, self.viewport, visual_radius);
        }
    }

    // -----------------------------------------------------------------------
    // Pointer
    // -----------------------------------------------------------------------

    /// Press at `point`, grabbing the topmost appeared agent under it.
    pub fn press_at(&mut self, point: Vec2, now_ms: u64) -> Option<AgentId> {
        if !self.is_usable() {
            return None;
        }
        let visual_radius = self.config.visual_radius();
        let hit = self
            .agents
            .iter()
            .rev()
            .find(|a| a.has_appeared && a.position.distance(point) <= visual_radius)
            .map(|a| a.id)?;
        self.press(hit, point, now_ms).then_some(hit)
    }

    /// Start dragging `id`. A drag already in progress on another agent is
    /// force-released first.
    ///
    /// Returns `false` if the agent does not exist or has not appeared.
    pub fn press(&mut self, id: AgentId, point: Vec2, now_ms: u64) -> bool {
        if !self.agent(id).is_some_and(|a| a.has_appeared) {
            return false;
        }
        if self.drag.is_some_and(|d| d.agent != id) {
            self.force_release(ReleaseReason::Superseded);
        }
        let Some(agent) = self.agents.iter_mut().find(|a| a.id == id) else {
            return false;
        };
        agent.is_dragging = true;
        agent.is_stationary = true;
        self.drag = Some(DragState { agent: id, press_point: point, press_ms: now_ms });
        debug!(agent = %id, x = point.x, y = point.y, "drag started");
        true
    }

    /// Move the dragged agent to `point`. No-op without a drag.
    pub fn pointer_move(&mut self, point: Vec2) {
        let Some(drag) = self.drag else {
            return;
        };
        if let Some(agent) = self.agents.iter_mut().find(|a| a.id == drag.agent) {
            agent.position = point;
        }
    }

    /// End the drag at `point` and toss the agent.
    ///
    /// Returns the toss velocity, or `None` if nothing was being dragged.
    pub fn release(&mut self, point: Vec2, now_ms: u64) -> Option<Vec2> {
        let drag = self.drag.take()?;
        let params = TossParams {
            multiplier: self.config.toss_multiplier,
            max_speed: self.config.toss_max_speed,
            min_drag_ms: self.config.min_drag_ms,
        };
        let duration = now_ms.saturating_sub(drag.press_ms);
        let toss = toss_velocity(drag.press_point, point, duration, params);

        let agent = self.agents.iter_mut().find(|a| a.id == drag.agent)?;
        agent.position = point;
        agent.velocity = toss;
        agent.is_dragging = false;
        agent.is_stationary = false;
        agent.is_hovered = false;
        debug!(agent = %drag.agent, vx = toss.x, vy = toss.y, duration, "agent tossed");
        Some(toss)
    }

    /// Abort the drag without a toss; the agent is left at rest.
    ///
    /// Returns the released agent, if any.
    pub fn force_release(&mut self, reason: ReleaseReason) -> Option<AgentId> {
        let drag = self.drag.take()?;
        if let Some(agent) = self.agents.iter_mut().find(|a| a.id == drag.agent) {
            agent.velocity = Vec2::ZERO;
            agent.is_dragging = false;
            agent.is_stationary = false;
            agent.is_hovered = false;
        }
        debug!(agent = %drag.agent, ?reason, "drag force-released");
        Some(drag.agent)
    }

    /// Set the hover flag on one agent. Returns `false` for an unknown id.
    pub fn set_hovered(&mut self, id: AgentId, hovered: bool) -> bool {
        self.agents
            .iter_mut()
            .find(|a| a.id == id)
            .map(|a| a.is_hovered = hovered)
            .is_some()
    }

    /// Dispatch one queued pointer command.
    pub fn apply(&mut self, command: PointerCommand, now_ms: u64) {
        match command {
            PointerCommand::Press { x, y } => {
                self.press_at(Vec2::new(x, y), now_ms);
            }
            PointerCommand::Move { x, y } => self.pointer_move(Vec2::new(x, y)),
            PointerCommand::Release { x, y } => {
                self.release(Vec2::new(x, y), now_ms);
            }
            PointerCommand::Hover { agent, hovered } => {
                self.set_hovered(agent, hovered);
            }
            PointerCommand::ForceRelease { reason } => {
                self.force_release(reason);
            }
            PointerCommand::Resize { width, height } => self.resize(width, height),
        }
    }

    // -----------------------------------------------------------------------
    // Output
    // -----------------------------------------------------------------------

    /// Per-agent render transforms for the current state.
    pub fn frame(&self) -> FrameSnapshot {
        let agents = if self.is_usable() {
            self.agents
                .iter()
                .map(|a| AgentFrame {
                    id: a.id,
                    icon: a.icon.clone(),
                    x: a.position.x,
                    y: a.position.y,
                    rotation: a.rotation,
                    scale: a.render_scale(),
                    opacity: a.opacity(),
                    hovered: a.is_hovered,
                    dragging: a.is_dragging,
                })
                .collect()
        } else {
            Vec::new()
        };
        FrameSnapshot {
            frame: self.frame,
            width: self.viewport.width,
            height: self.viewport.height,
            agents,
        }
    }
}

fn resolve_zones(config: &SimConfig, viewport: Viewport) -> Vec<Rect> {
    config.exclusion_zones.iter().map(|z| z.resolve(viewport)).collect()
}

/// Pick a spawn position, retrying to avoid zones and already placed agents.
///
/// On exhaustion the agent goes to a band along the top (even index) or
/// bottom (odd index) edge at a random x.
fn spawn_position(
    rng: &mut SmallRng,
    config: &SimConfig,
    viewport: Viewport,
    zones: &[Rect],
    placed: &[Agent],
    index: usize,
) -> Vec2 {
    let r = config.visual_radius();
    let collision = config.collision_radius();
    let max_x = viewport.width - r;
    let max_y = viewport.height - r;

    if !config.avoid_zones_on_spawn {
        return Vec2::new(rng.random_range(r..=max_x), rng.random_range(r..=max_y));
    }

    for _ in 0..config.placement_attempts {
        let candidate = Vec2::new(rng.random_range(r..=max_x), rng.random_range(r..=max_y));
        let in_zone = zones.iter().any(|z| z.intersects_circle(candidate, collision));
        let on_agent = placed
            .iter()
            .any(|a| a.position.distance(candidate) < a.radius + collision);
        if !in_zone && !on_agent {
            return candidate;
        }
    }

    let y = if index % 2 == 0 { r } else { max_y };
    trace!(index, y, "placement attempts exhausted, using edge band");
    Vec2::new(rng.random_range(r..=max_x), y)
}
