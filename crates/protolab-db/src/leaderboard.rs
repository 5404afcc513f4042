//! Leaderboard computed from the full record list.

use protolab_types::{Leaderboard, LeaderboardEntry, ResultRecord};

/// Count records per agent, sorted by descending count.
///
/// Agents with equal counts keep the order in which they first appear in
/// `records`.
pub fn build_leaderboard(records: &[ResultRecord]) -> Leaderboard {
    let mut entries: Vec<LeaderboardEntry> = Vec::new();
    for record in records {
        match entries.iter_mut().find(|e| e.agent == record.agent) {
            Some(entry) => entry.count = entry.count.saturating_add(1),
            None => entries.push(LeaderboardEntry { agent: record.agent.clone(), count: 1 }),
        }
    }
    entries.sort_by(|a, b| b.count.cmp(&a.count));

    Leaderboard { entries, total_results: u32::try_from(records.len()).unwrap_or(u32::MAX) }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn records(agents: &[&str]) -> Vec<ResultRecord> {
        agents
            .iter()
            .enumerate()
            .map(|(i, agent)| ResultRecord::new(format!("10.0.0.{i}"), *agent, "WTSAD".parse().unwrap()))
            .collect()
    }

    #[test]
    fn counts_and_sorts_descending() {
        let board = build_leaderboard(&records(&["Globe", "Clippy", "Clippy", "Camera", "Clippy", "Globe"]));
        let ranked: Vec<(&str, u32)> = board.entries.iter().map(|e| (e.agent.as_str(), e.count)).collect();
        assert_eq!(ranked, [("Clippy", 3), ("Globe", 2), ("Camera", 1)]);
        assert_eq!(board.total_results, 6);
    }

    #[test]
    fn ties_keep_first_appearance() {
        let board = build_leaderboard(&records(&["Camera", "Globe", "Globe", "Camera", "Clippy"]));
        let ranked: Vec<&str> = board.entries.iter().map(|e| e.agent.as_str()).collect();
        assert_eq!(ranked, ["Camera", "Globe", "Clippy"]);
    }

    #[test]
    fn empty_store_gives_empty_board() {
        let board = build_leaderboard(&[]);
        assert!(board.entries.is_empty());
        assert_eq!(board.total_results, 0);
    }
}
