//! Commit functions and the worker that runs them off the UI thread.

mod worker;

use thiserror::Error;

pub use worker::{COMMIT_THREAD_NAME, PendingCommit};

/// Error raised by a commit function that could not decide either way.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommitError {
    #[error("commit failed: {0}")]
    Failed(String),
    #[error("commit worker stopped before reporting a result")]
    WorkerLost,
}

impl CommitError {
    pub fn failed(err: impl std::fmt::Display) -> Self {
        CommitError::Failed(err.to_string())
    }
}

/// Persists a new field value. `Ok(true)` means stored, `Ok(false)` a handled
/// refusal.
pub trait Committer: Send + Sync + 'static {
    fn commit(&self, value: &str) -> Result<bool, CommitError>;
}

impl<F> Committer for F
where
    F: Fn(&str) -> Result<bool, CommitError> + Send + Sync + 'static,
{
    fn commit(&self, value: &str) -> Result<bool, CommitError> {
        self(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRequest {
    value: String,
}

impl CommitRequest {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn into_value(self) -> String {
        self.value
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    Persisted,
    Declined,
    Rejected(CommitError),
}

impl CommitOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, CommitOutcome::Persisted)
    }
}

impl From<Result<bool, CommitError>> for CommitOutcome {
    fn from(result: Result<bool, CommitError>) -> Self {
        match result {
            Ok(true) => CommitOutcome::Persisted,
            Ok(false) => CommitOutcome::Declined,
            Err(err) => CommitOutcome::Rejected(err),
        }
    }
}
