//! Records and snapshots shared between the simulator, quiz, store and API.
//!
//! Result records keep the JSON field names of the original results file
//! (`ip`, `agent`, `sequence`, epoch-millisecond `timestamp`) so existing
//! data loads unchanged.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::code::ResultCode;
use crate::ids::{AgentId, ResultId};

// ---------------------------------------------------------------------------
// Quiz results
// ---------------------------------------------------------------------------

/// One stored quiz result. At most one record exists per identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ResultRecord {
    /// Record identifier. Older files without ids get a fresh one on load.
    #[serde(default = "ResultId::new")]
    pub id: ResultId,
    /// Caller identity used for deduplication (client address or session id).
    #[serde(rename = "ip")]
    #[serde(alias = "sessionId")]
    pub identity: String,
    /// Display name of the resolved agent profile.
    pub agent: String,
    /// The five-letter result code.
    #[ts(type = "string")]
    pub sequence: ResultCode,
    /// When the result was recorded.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    #[ts(type = "number")]
    pub timestamp: DateTime<Utc>,
}

impl ResultRecord {
    /// Create a record stamped with the current time.
    pub fn new(identity: impl Into<String>, agent: impl Into<String>, sequence: ResultCode) -> Self {
        Self {
            id: ResultId::new(),
            identity: identity.into(),
            agent: agent.into(),
            sequence,
            timestamp: Utc::now(),
        }
    }
}

/// How many stored results resolved to one agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct LeaderboardEntry {
    /// Agent display name.
    pub agent: String,
    /// Number of results for this agent.
    pub count: u32,
}

/// Agents ranked by result count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct Leaderboard {
    /// Entries sorted by descending count.
    pub entries: Vec<LeaderboardEntry>,
    /// Total number of stored results.
    pub total_results: u32,
}

// ---------------------------------------------------------------------------
// Simulation frames
// ---------------------------------------------------------------------------

/// Render transform for one agent in one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct AgentFrame {
    /// Agent identity.
    pub id: AgentId,
    /// Icon file name for the rendering surface.
    pub icon: String,
    /// Center x in viewport coordinates.
    pub x: f64,
    /// Center y in viewport coordinates.
    pub y: f64,
    /// Rotation in degrees.
    pub rotation: f64,
    /// Render scale, including pop-in and the hover boost.
    pub scale: f64,
    /// 0 before the agent has appeared, 1 after.
    pub opacity: f64,
    /// Pointer is over the agent.
    pub hovered: bool,
    /// Agent is being dragged.
    pub dragging: bool,
}

/// Everything a rendering surface needs to draw one frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct FrameSnapshot {
    /// Frame counter since the simulator started.
    #[ts(type = "number")]
    pub frame: u64,
    /// Viewport width.
    pub width: f64,
    /// Viewport height.
    pub height: f64,
    /// Visible agents in draw order (last is on top).
    pub agents: Vec<AgentFrame>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn record_reads_legacy_file_layout() {
        let json = r#"{"ip":"10.0.0.1","agent":"Clippy","sequence":"WTSAD","timestamp":1700000000000}"#;
        let record: ResultRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.identity, "10.0.0.1");
        assert_eq!(record.sequence.to_string(), "WTSAD");
        assert_eq!(record.timestamp.timestamp_millis(), 1_700_000_000_000);
    }

    #[test]
    fn record_accepts_session_id_alias() {
        let json = r#"{"sessionId":"abc","agent":"Finder","sequence":"LIUCY","timestamp":0}"#;
        let record: ResultRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.identity, "abc");
    }

    #[test]
    fn record_binding_uses_wire_names() {
        let decl = ResultRecord::decl();
        assert!(decl.contains("ip: string"), "{decl}");
        assert!(!decl.contains("identity"), "{decl}");
    }

    #[test]
    fn leaderboard_uses_camel_case() {
        let board = Leaderboard {
            entries: vec![LeaderboardEntry { agent: "Clippy".into(), count: 2 }],
            total_results: 2,
        };
        let value = serde_json::to_value(&board).unwrap();
        assert_eq!(value["totalResults"], 2);
        assert_eq!(value["entries"][0]["agent"], "Clippy");
    }
}
