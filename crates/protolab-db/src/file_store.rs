//! Result store backed by a pretty-printed JSON array on disk.
//!
//! Every operation is a full read-modify-write under one async mutex. A
//! missing, unreadable or corrupt file reads as an empty list; the next
//! successful append overwrites it.

use std::io::ErrorKind;
use std::path::PathBuf;

use futures::future::BoxFuture;
use protolab_types::ResultRecord;
use tokio::sync::Mutex;

use crate::error::DbError;
use crate::store::{AppendOutcome, ResultStore, sort_chronologically};

/// JSON-file result store.
#[derive(Debug)]
pub struct FileResultStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileResultStore {
    /// A store writing to `path`. Nothing touches the disk until first use.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), lock: Mutex::new(()) }
    }

    async fn read_records(&self) -> Vec<ResultRecord> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "results file unreadable, treating as empty");
                return Vec::new();
            }
        };
        serde_json::from_str(&contents).unwrap_or_else(|e| {
            tracing::warn!(path = %self.path.display(), error = %e, "results file corrupt, treating as empty");
            Vec::new()
        })
    }

    async fn write_records(&self, records: &[ResultRecord]) -> Result<(), DbError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_string_pretty(records)?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }
}

impl ResultStore for FileResultStore {
    fn append_if_new(&self, record: ResultRecord) -> BoxFuture<'_, Result<AppendOutcome, DbError>> {
        Box::pin(async move {
            let _guard = self.lock.lock().await;
            let mut records = self.read_records().await;
            if records.iter().any(|r| r.identity == record.identity) {
                tracing::debug!(identity = %record.identity, "result already recorded");
                return Ok(AppendOutcome { accepted: false });
            }
            records.push(record);
            self.write_records(&records).await?;
            Ok(AppendOutcome { accepted: true })
        })
    }

    fn list_all(&self) -> BoxFuture<'_, Result<Vec<ResultRecord>, DbError>> {
        Box::pin(async move {
            let _guard = self.lock.lock().await;
            let mut records = self.read_records().await;
            sort_chronologically(&mut records);
            Ok(records)
        })
    }

    fn remove_agent<'a>(&'a self, agent: &'a str) -> BoxFuture<'a, Result<usize, DbError>> {
        Box::pin(async move {
            let _guard = self.lock.lock().await;
            let mut records = self.read_records().await;
            let before = records.len();
            records.retain(|r| r.agent != agent);
            let removed = before.saturating_sub(records.len());
            if removed > 0 {
                self.write_records(&records).await?;
            }
            Ok(removed)
        })
    }
}
