//! Result store on a `Dragonfly` hash keyed by identity.

use futures::future::BoxFuture;
use protolab_types::ResultRecord;

use crate::dragonfly::DragonflyPool;
use crate::error::DbError;
use crate::store::{AppendOutcome, ResultStore};

/// Default hash key, shared with the original deployment.
pub const DEFAULT_RESULTS_KEY: &str = "personality-results";

/// `Dragonfly`-backed result store. Dedupe is a single atomic `HSETNX`.
#[derive(Clone)]
pub struct KvResultStore {
    pool: DragonflyPool,
    key: String,
}

impl KvResultStore {
    /// Store results in the hash at `key`.
    pub fn new(pool: DragonflyPool, key: impl Into<String>) -> Self {
        Self { pool, key: key.into() }
    }

    /// The hash key in use.
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl ResultStore for KvResultStore {
    fn append_if_new(&self, record: ResultRecord) -> BoxFuture<'_, Result<AppendOutcome, DbError>> {
        Box::pin(async move {
            let accepted = self.pool.hset_json_nx(&self.key, &record.identity, &record).await?;
            Ok(AppendOutcome { accepted })
        })
    }

    fn list_all(&self) -> BoxFuture<'_, Result<Vec<ResultRecord>, DbError>> {
        Box::pin(async move {
            let entries = self.pool.hgetall_json::<ResultRecord>(&self.key).await?;
            let mut records: Vec<ResultRecord> = entries.into_iter().map(|(_, r)| r).collect();
            // Hash order is arbitrary; v7 ids break timestamp ties in creation order.
            records.sort_by(|a, b| a.timestamp.cmp(&b.timestamp).then_with(|| a.id.cmp(&b.id)));
            Ok(records)
        })
    }

    fn remove_agent<'a>(&'a self, agent: &'a str) -> BoxFuture<'a, Result<usize, DbError>> {
        Box::pin(async move {
            let entries = self.pool.hgetall_json::<ResultRecord>(&self.key).await?;
            let fields: Vec<String> =
                entries.into_iter().filter(|(_, r)| r.agent == agent).map(|(field, _)| field).collect();
            let removed = self.pool.hdel(&self.key, fields).await?;
            Ok(usize::try_from(removed).unwrap_or(usize::MAX))
        })
    }
}
