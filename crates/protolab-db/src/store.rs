//! The result store interface shared by every backend.

use futures::future::BoxFuture;
use protolab_types::ResultRecord;
use serde::{Deserialize, Serialize};

use crate::error::DbError;

/// Outcome of [`ResultStore::append_if_new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppendOutcome {
    /// `false` when the identity already had a record.
    pub accepted: bool,
}

/// Append-only storage of quiz results, at most one per identity.
///
/// Object safe so the API can hold an `Arc<dyn ResultStore>`.
pub trait ResultStore: Send + Sync {
    /// Store `record` unless a record with the same identity exists.
    fn append_if_new(&self, record: ResultRecord) -> BoxFuture<'_, Result<AppendOutcome, DbError>>;

    /// Every record, ordered by timestamp then insertion.
    fn list_all(&self) -> BoxFuture<'_, Result<Vec<ResultRecord>, DbError>>;

    /// Delete every record whose agent is `agent`. Returns the removed count.
    fn remove_agent<'a>(&'a self, agent: &'a str) -> BoxFuture<'a, Result<usize, DbError>>;
}

/// Sort records by timestamp, keeping insertion order for ties.
pub(crate) fn sort_chronologically(records: &mut [ResultRecord]) {
    records.sort_by_key(|r| r.timestamp);
}
