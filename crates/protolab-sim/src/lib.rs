//! Roaming-agent particle simulator.
//!
//! Circular icons drift across a viewport, bounce off its walls and off
//! rectangular exclusion zones, redirect on contact with each other, and
//! can be dragged and tossed with the pointer. The simulator never draws:
//! [`Simulator::frame`] hands per-agent transforms to a rendering surface.
//!
//! # Modules
//!
//! - [`vec2`] -- 2D vector math
//! - [`geometry`] -- Viewport, rectangles and exclusion zones
//! - [`agent`] -- Agent state and the pop-in curve
//! - [`collision`] -- Wall, zone and pair responses
//! - [`pointer`] -- Pointer commands and toss velocity
//! - [`config`] -- Simulator tunables
//! - [`simulator`] -- The per-tick update and pointer handling

pub mod agent;
pub mod collision;
pub mod config;
pub mod error;
pub mod geometry;
pub mod pointer;
pub mod simulator;
pub mod vec2;

pub use agent::Agent;
pub use config::{MAX_AGENTS, SimConfig};
pub use error::SimError;
pub use geometry::{ExclusionZone, Rect, Viewport, ZoneAnchor};
pub use pointer::{PointerCommand, ReleaseReason};
pub use simulator::Simulator;
pub use vec2::Vec2;
