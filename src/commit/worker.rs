use std::{
    any::Any,
    panic::{self, AssertUnwindSafe},
    sync::{
        Arc,
        mpsc::{self, Receiver, TryRecvError},
    },
    thread,
};

use super::{CommitError, CommitOutcome, CommitRequest, Committer};

/// Name given to commit worker threads.
pub const COMMIT_THREAD_NAME: &str = "inplace-commit";

/// A commit running on its own thread. There is no cancellation: once spawned
/// the commit function runs to completion.
#[derive(Debug)]
pub struct PendingCommit {
    rx: Receiver<CommitOutcome>,
}

impl PendingCommit {
    pub fn spawn(committer: Arc<dyn Committer>, request: CommitRequest) -> Self {
        let (tx, rx) = mpsc::channel();
        let worker_tx = tx.clone();
        let spawned = thread::Builder::new()
            .name(COMMIT_THREAD_NAME.to_string())
            .spawn(move || {
                let value = request.into_value();
                let outcome =
                    match panic::catch_unwind(AssertUnwindSafe(|| committer.commit(&value))) {
                        Ok(result) => CommitOutcome::from(result),
                        Err(payload) => CommitOutcome::Rejected(CommitError::Failed(format!(
                            "commit function panicked: {}",
                            panic_message(payload.as_ref())
                        ))),
                    };
                let _ = worker_tx.send(outcome);
            });
        if let Err(err) = spawned {
            tracing::error!(error = %err, "failed to spawn commit worker");
            let _ = tx.send(CommitOutcome::Rejected(CommitError::failed(err)));
        }
        Self { rx }
    }

    /// Non-blocking check for the outcome.
    pub fn poll(&self) -> Option<CommitOutcome> {
        match self.rx.try_recv() {
            Ok(outcome) => Some(outcome),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                Some(CommitOutcome::Rejected(CommitError::WorkerLost))
            }
        }
    }

    /// Blocks until the commit reports back.
    pub fn wait(self) -> CommitOutcome {
        self.rx
            .recv()
            .unwrap_or(CommitOutcome::Rejected(CommitError::WorkerLost))
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "unknown cause"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn spawn_with(committer: impl Committer, value: &str) -> PendingCommit {
        PendingCommit::spawn(Arc::new(committer), CommitRequest::new(value))
    }

    #[test]
    fn reports_persisted_and_declined() {
        let accept = |_: &str| -> Result<bool, CommitError> { Ok(true) };
        let refuse = |_: &str| -> Result<bool, CommitError> { Ok(false) };
        assert_eq!(spawn_with(accept, "a").wait(), CommitOutcome::Persisted);
        assert_eq!(spawn_with(refuse, "a").wait(), CommitOutcome::Declined);
    }

    #[test]
    fn errors_become_rejections() {
        let broken = |_: &str| -> Result<bool, CommitError> { Err(CommitError::failed("503")) };
        assert_eq!(
            spawn_with(broken, "a").wait(),
            CommitOutcome::Rejected(CommitError::Failed("503".into()))
        );
    }

    #[test]
    fn panics_become_rejections() {
        let exploding = |_: &str| -> Result<bool, CommitError> { panic!("boom") };
        assert_eq!(
            spawn_with(exploding, "a").wait(),
            CommitOutcome::Rejected(CommitError::Failed(
                "commit function panicked: boom".to_string()
            ))
        );
    }

    #[test]
    fn passes_the_value_through() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let recorder = move |value: &str| -> Result<bool, CommitError> {
            sink.lock().map_err(CommitError::failed)?.push(value.to_string());
            Ok(true)
        };
        spawn_with(recorder, "Team B").wait();
        assert_eq!(*seen.lock().unwrap(), vec!["Team B".to_string()]);
    }
}
