//! Integration tests for the `Dragonfly` result store.
//!
//! These tests require a live Dragonfly (or Redis) instance. Run with:
//!
//! ```bash
//! docker run -d -p 6379:6379 docker.dragonflydb.io/dragonflydb/dragonfly
//! cargo test -p protolab-db -- --ignored
//! ```
//!
//! All tests are marked `#[ignore]` so they are skipped during normal
//! `cargo test` runs.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]

use protolab_db::{DragonflyPool, KvResultStore, ResultStore, build_leaderboard};
use protolab_types::ResultRecord;

/// Dragonfly connection URL for the local Docker instance.
const DRAGONFLY_URL: &str = "redis://localhost:6379";

async fn fresh_store(name: &str) -> KvResultStore {
    let pool = DragonflyPool::connect(DRAGONFLY_URL)
        .await
        .expect("Failed to connect to Dragonfly -- is Docker running?");
    let key = format!("protolab-test:{name}:{}", uuid::Uuid::now_v7());
    KvResultStore::new(pool, key)
}

fn record(identity: &str, agent: &str) -> ResultRecord {
    ResultRecord::new(identity, agent, "WTSAD".parse().unwrap())
}

#[tokio::test]
#[ignore = "requires live Dragonfly instance"]
async fn dragonfly_append_is_idempotent_per_identity() {
    let store = fresh_store("dedupe").await;

    assert!(store.append_if_new(record("1.1.1.1", "Clippy")).await.unwrap().accepted);
    assert!(!store.append_if_new(record("1.1.1.1", "Globe")).await.unwrap().accepted);

    let records = store.list_all().await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].agent, "Clippy");
}

#[tokio::test]
#[ignore = "requires live Dragonfly instance"]
async fn dragonfly_list_and_remove_agent() {
    let store = fresh_store("remove").await;
    store.append_if_new(record("a", "Clippy")).await.unwrap();
    store.append_if_new(record("b", "Globe")).await.unwrap();
    store.append_if_new(record("c", "Clippy")).await.unwrap();

    let board = build_leaderboard(&store.list_all().await.unwrap());
    assert_eq!(board.entries[0].agent, "Clippy");
    assert_eq!(board.total_results, 3);

    assert_eq!(store.remove_agent("Clippy").await.unwrap(), 2);
    assert_eq!(store.list_all().await.unwrap().len(), 1);
}
