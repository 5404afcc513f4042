//! Simulator configuration.
//!
//! Every field has a default reproducing the landing-page animation, so an
//! empty `simulation:` section in the YAML config yields the stock behavior.

use serde::{Deserialize, Serialize};

use crate::error::SimError;
use crate::geometry::ExclusionZone;

/// Hard upper bound on the number of simulated agents.
pub const MAX_AGENTS: usize = 32;

/// Tunables for [`Simulator`](crate::Simulator).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Number of agents to spawn (capped at [`MAX_AGENTS`]).
    #[serde(default = "default_agent_count")]
    pub agent_count: usize,

    /// Rendered icon edge length. The visual radius is half of this.
    #[serde(default = "default_icon_size")]
    pub icon_size: f64,

    /// Collision radius as a fraction of `icon_size`. Must lie in (0, 0.5].
    #[serde(default = "default_collision_radius_ratio")]
    pub collision_radius_ratio: f64,

    /// Cruise speed in units per tick.
    #[serde(default = "default_speed")]
    pub speed: f64,

    /// Degrees of rotation added each tick.
    #[serde(default = "default_rotation_step_deg")]
    pub rotation_step_deg: f64,

    /// Length of the pop-in animation.
    #[serde(default = "default_appear_duration_ms")]
    pub appear_duration_ms: u64,

    /// Window over which agent appearances are spread.
    #[serde(default = "default_appear_ramp_ms")]
    pub appear_ramp_ms: u64,

    /// Multiplier from drag speed to toss speed.
    #[serde(default = "default_toss_multiplier")]
    pub toss_multiplier: f64,

    /// Upper bound on toss speed.
    #[serde(default = "default_toss_max_speed")]
    pub toss_max_speed: f64,

    /// Drags shorter than this are treated as lasting this long.
    #[serde(default = "default_min_drag_ms")]
    pub min_drag_ms: u64,

    /// Placement retries before falling back to the safe band.
    #[serde(default = "default_placement_attempts")]
    pub placement_attempts: u32,

    /// Retry spawn positions that land in an exclusion zone or on another agent.
    #[serde(default = "default_true")]
    pub avoid_zones_on_spawn: bool,

    /// Rectangles agents bounce away from.
    #[serde(default = "default_exclusion_zones")]
    pub exclusion_zones: Vec<ExclusionZone>,

    /// Icon file names, assigned to agents round-robin.
    #[serde(default = "default_icons")]
    pub icons: Vec<String>,

    /// Fixed RNG seed. `None` seeds from the OS.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            agent_count: default_agent_count(),
            icon_size: default_icon_size(),
            collision_radius_ratio: default_collision_radius_ratio(),
            speed: default_speed(),
            rotation_step_deg: default_rotation_step_deg(),
            appear_duration_ms: default_appear_duration_ms(),
            appear_ramp_ms: default_appear_ramp_ms(),
            toss_multiplier: default_toss_multiplier(),
            toss_max_speed: default_toss_max_speed(),
            min_drag_ms: default_min_drag_ms(),
            placement_attempts: default_placement_attempts(),
            avoid_zones_on_spawn: true,
            exclusion_zones: default_exclusion_zones(),
            icons: default_icons(),
            seed: None,
        }
    }
}

impl SimConfig {
    /// Half the icon size.
    pub fn visual_radius(&self) -> f64 {
        self.icon_size / 2.0
    }

    /// Radius used for agent-agent and agent-zone contact.
    pub fn collision_radius(&self) -> f64 {
        self.icon_size * self.collision_radius_ratio
    }

    /// Agent count after applying [`MAX_AGENTS`].
    pub fn effective_agent_count(&self) -> usize {
        self.agent_count.min(MAX_AGENTS)
    }

    /// Check that every value is usable.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidConfig`] naming the first offending field.
    pub fn validate(&self) -> Result<(), SimError> {
        positive("icon_size", self.icon_size)?;
        positive("speed", self.speed)?;
        positive("toss_multiplier", self.toss_multiplier)?;
        positive("toss_max_speed", self.toss_max_speed)?;
        if !self.rotation_step_deg.is_finite() {
            return Err(invalid("rotation_step_deg", "must be finite"));
        }
        if !(self.collision_radius_ratio.is_finite()
            && self.collision_radius_ratio > 0.0
            && self.collision_radius_ratio <= 0.5)
        {
            return Err(invalid("collision_radius_ratio", "must lie in (0, 0.5]"));
        }
        if self.appear_duration_ms == 0 {
            return Err(invalid("appear_duration_ms", "must be greater than zero"));
        }
        if self.min_drag_ms == 0 {
            return Err(invalid("min_drag_ms", "must be greater than zero"));
        }
        if self.icons.is_empty() {
            return Err(invalid("icons", "at least one icon is required"));
        }
        for zone in &self.exclusion_zones {
            let finite = [zone.x, zone.y, zone.width, zone.height].iter().all(|v| v.is_finite());
            if !finite || zone.width < 0.0 || zone.height < 0.0 {
                return Err(invalid("exclusion_zones", "zones need finite, non-negative sizes"));
            }
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), SimError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, "must be finite and positive"))
    }
}

fn invalid(field: &'static str, reason: &str) -> SimError {
    SimError::InvalidConfig { field, reason: reason.to_owned() }
}

const fn default_agent_count() -> usize {
    MAX_AGENTS
}

const fn default_icon_size() -> f64 {
    120.0
}

const fn default_collision_radius_ratio() -> f64 {
    0.42
}

const fn default_speed() -> f64 {
    0.2
}

const fn default_rotation_step_deg() -> f64 {
    0.3
}

const fn default_appear_duration_ms() -> u64 {
    600
}

const fn default_appear_ramp_ms() -> u64 {
    10_000
}

const fn default_toss_multiplier() -> f64 {
    2.0
}

const fn default_toss_max_speed() -> f64 {
    3.0
}

const fn default_min_drag_ms() -> u64 {
    16
}

const fn default_placement_attempts() -> u32 {
    50
}

const fn default_true() -> bool {
    true
}

/// Title, description and button boxes of the landing overlay.
fn default_exclusion_zones() -> Vec<ExclusionZone> {
    vec![
        ExclusionZone::centered(-400.0, -100.0, 800.0, 80.0),
        ExclusionZone::centered(-350.0, -10.0, 700.0, 60.0),
        ExclusionZone::centered(-120.0, 60.0, 240.0, 60.0),
    ]
}

fn default_icons() -> Vec<String> {
    [
        "apple.png",
        "banana.png",
        "bell.png",
        "book-wiki.png",
        "book.png",
        "brackets.png",
        "cactus.png",
        "clippy.png",
        "cloud-flower.png",
        "coffee.png",
        "command.png",
        "double-copy.png",
        "formula.png",
        "gear.png",
        "greek-god.png",
        "heart.png",
        "infinity-glasses.png",
        "lightbulb.png",
        "math.png",
        "music.png",
        "notetaker.png",
        "phone.png",
        "repeat-cycle.png",
        "research.png",
        "root.png",
        "saucy.png",
        "scribble.png",
        "single-arrow.png",
        "single-eye.png",
        "single-loop.png",
        "spiky.png",
        "time-schedule.png",
        "umbrella.png",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}
