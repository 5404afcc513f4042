//! Quiz result sink that writes straight into a [`ResultStore`].

use std::sync::Arc;

use futures::future::BoxFuture;
use protolab_quiz::{ResultSink, ResultSubmission, SinkError, SubmitOutcome};
use protolab_types::ResultRecord;

use crate::store::ResultStore;

/// Writes completed quiz results for one identity into a store.
#[derive(Clone)]
pub struct StoreResultSink {
    store: Arc<dyn ResultStore>,
    identity: String,
}

impl StoreResultSink {
    /// Record results under `identity`.
    pub fn new(store: Arc<dyn ResultStore>, identity: impl Into<String>) -> Self {
        Self { store, identity: identity.into() }
    }
}

impl ResultSink for StoreResultSink {
    fn submit(&self, submission: ResultSubmission) -> BoxFuture<'static, Result<SubmitOutcome, SinkError>> {
        let store = Arc::clone(&self.store);
        let record = ResultRecord::new(self.identity.clone(), submission.agent, submission.sequence);
        Box::pin(async move {
            let outcome = store.append_if_new(record).await.map_err(|e| SinkError::Write(e.to_string()))?;
            Ok(SubmitOutcome { accepted: outcome.accepted })
        })
    }
}
