//! In-process result store for tests and ephemeral runs.

use futures::future::BoxFuture;
use protolab_types::ResultRecord;
use tokio::sync::Mutex;

use crate::error::DbError;
use crate::store::{AppendOutcome, ResultStore, sort_chronologically};

/// Keeps records in a vector behind an async mutex.
#[derive(Debug, Default)]
pub struct MemoryResultStore {
    records: Mutex<Vec<ResultRecord>>,
}

impl MemoryResultStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store seeded with `records`.
    pub fn with_records(records: Vec<ResultRecord>) -> Self {
        Self { records: Mutex::new(records) }
    }
}

impl ResultStore for MemoryResultStore {
    fn append_if_new(&self, record: ResultRecord) -> BoxFuture<'_, Result<AppendOutcome, DbError>> {
        Box::pin(async move {
            let mut records = self.records.lock().await;
            if records.iter().any(|r| r.identity == record.identity) {
                return Ok(AppendOutcome { accepted: false });
            }
            records.push(record);
            Ok(AppendOutcome { accepted: true })
        })
    }

    fn list_all(&self) -> BoxFuture<'_, Result<Vec<ResultRecord>, DbError>> {
        Box::pin(async move {
            let mut records = self.records.lock().await.clone();
            sort_chronologically(&mut records);
            Ok(records)
        })
    }

    fn remove_agent<'a>(&'a self, agent: &'a str) -> BoxFuture<'a, Result<usize, DbError>> {
        Box::pin(async move {
            let mut records = self.records.lock().await;
            let before = records.len();
            records.retain(|r| r.agent != agent);
            Ok(before.saturating_sub(records.len()))
        })
    }
}
