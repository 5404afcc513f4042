//! Fire-and-forget delivery of completed quiz results.
//!
//! A session hands its final code to a [`ResultSink`] exactly once, on a
//! spawned task. Failures are logged and never reach the result screen.

use futures::future::BoxFuture;
use protolab_types::ResultCode;
use serde::{Deserialize, Serialize};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// The payload sent when a quiz completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSubmission {
    /// Display name of the resolved profile.
    pub agent: String,
    /// The five-letter result code.
    pub sequence: ResultCode,
}

/// What the sink did with a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitOutcome {
    /// `false` when the identity already had a stored result.
    pub accepted: bool,
}

/// Errors a sink may report. Only ever logged.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// The backing store or remote endpoint refused the write.
    #[error("result write failed: {0}")]
    Write(String),

    /// The remote endpoint could not be reached.
    #[error("result endpoint unreachable: {0}")]
    Unreachable(String),
}

/// Destination for completed results.
pub trait ResultSink: Send + Sync {
    /// Deliver one submission.
    fn submit(&self, submission: ResultSubmission) -> BoxFuture<'static, Result<SubmitOutcome, SinkError>>;
}

/// Send `submission` to `sink` on the current runtime without waiting.
///
/// Returns `None` (after logging) when called outside a Tokio runtime.
pub fn dispatch(sink: &dyn ResultSink, submission: ResultSubmission) -> Option<JoinHandle<()>> {
    let Ok(handle) = Handle::try_current() else {
        tracing::warn!(sequence = %submission.sequence, "no async runtime, result not submitted");
        return None;
    };

    let sequence = submission.sequence;
    let agent = submission.agent.clone();
    let future = sink.submit(submission);
    Some(handle.spawn(async move {
        match future.await {
            Ok(outcome) => {
                tracing::info!(%sequence, agent = %agent, accepted = outcome.accepted, "result submitted");
            }
            Err(e) => {
                tracing::warn!(%sequence, agent = %agent, error = %e, "failed to submit result");
            }
        }
    }))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    /// Records every submission it receives.
    #[derive(Default)]
    pub(crate) struct RecordingSink {
        pub(crate) received: Arc<Mutex<Vec<ResultSubmission>>>,
    }

    impl ResultSink for RecordingSink {
        fn submit(&self, submission: ResultSubmission) -> BoxFuture<'static, Result<SubmitOutcome, SinkError>> {
            let received = Arc::clone(&self.received);
            Box::pin(async move {
                received.lock().unwrap().push(submission);
                Ok(SubmitOutcome { accepted: true })
            })
        }
    }

    struct FailingSink;

    impl ResultSink for FailingSink {
        fn submit(&self, _submission: ResultSubmission) -> BoxFuture<'static, Result<SubmitOutcome, SinkError>> {
            Box::pin(async { Err(SinkError::Unreachable("connection refused".to_owned())) })
        }
    }

    fn submission() -> ResultSubmission {
        ResultSubmission { agent: "Single Arrow".to_owned(), sequence: "WTSAD".parse().unwrap() }
    }

    #[tokio::test]
    async fn dispatch_delivers_on_a_task() {
        let sink = RecordingSink::default();
        let handle = dispatch(&sink, submission()).unwrap();
        handle.await.unwrap();
        assert_eq!(sink.received.lock().unwrap().as_slice(), &[submission()]);
    }

    #[tokio::test]
    async fn failures_are_swallowed() {
        let handle = dispatch(&FailingSink, submission()).unwrap();
        handle.await.unwrap();
    }

    #[test]
    fn outside_a_runtime_nothing_is_spawned() {
        let sink = RecordingSink::default();
        assert!(dispatch(&sink, submission()).is_none());
        assert!(sink.received.lock().unwrap().is_empty());
    }

    #[test]
    fn submission_serializes_code_as_string() {
        let json = serde_json::to_value(submission()).unwrap();
        assert_eq!(json["sequence"], "WTSAD");
        assert_eq!(json["agent"], "Single Arrow");
    }
}
