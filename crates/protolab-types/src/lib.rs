//! Shared type definitions for the Protolab prototypes.
//!
//! Types defined here are used by the simulator, the quiz engine, the result
//! store and the API, and flow to `TypeScript` via `ts-rs` for the browser
//! surface.
//!
//! # Modules
//!
//! - [`ids`] -- Identifier wrappers (result, session, agent)
//! - [`enums`] -- Personality dimensions and answer letters
//! - [`code`] -- Five-letter result codes
//! - [`structs`] -- Result records, leaderboard and frame snapshots

pub mod code;
pub mod enums;
pub mod ids;
pub mod structs;

pub use code::{CODE_COUNT, Choice, CodeParseError, ResultCode};
pub use enums::{Dimension, Letter};
pub use ids::{AgentId, ResultId, SessionId};
pub use structs::{AgentFrame, FrameSnapshot, Leaderboard, LeaderboardEntry, ResultRecord};
