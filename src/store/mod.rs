//! A document file acting as the backing store for inline fields.

mod watch;

use std::{
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
    thread,
    time::Duration,
};

use anyhow::{Context, Result};
use serde_json::Value;

use crate::{
    commit::{CommitError, Committer},
    io::{DocumentFormat, read_document, string_pointers, write_document},
};

pub use watch::DocumentWatch;

/// Externally owned values that may change while the UI is running.
pub trait ValueSource {
    /// Returns `(key, current value)` pairs observed since the last poll.
    fn poll_changes(&mut self) -> Vec<(String, String)>;
}

#[derive(Debug, Clone)]
pub struct DocumentStore {
    path: PathBuf,
    format: DocumentFormat,
    read_only: bool,
    latency: Duration,
    write_lock: Arc<Mutex<()>>,
}

impl DocumentStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = DocumentFormat::from_path(path)?;
        let path = path
            .canonicalize()
            .with_context(|| format!("failed to resolve {}", path.display()))?;
        read_document(&path, format)?;
        Ok(Self {
            path,
            format,
            read_only: false,
            latency: Duration::ZERO,
            write_lock: Arc::new(Mutex::new(())),
        })
    }

    /// Commits resolve as handled refusals instead of writing.
    pub fn with_read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    /// Artificial delay before each write.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> DocumentFormat {
        self.format
    }

    pub fn document(&self) -> Result<Value> {
        read_document(&self.path, self.format)
    }

    pub fn string_fields(&self) -> Result<Vec<String>> {
        Ok(string_pointers(&self.document()?))
    }

    pub fn committer(&self, pointer: impl Into<String>) -> PointerCommitter {
        PointerCommitter {
            store: self.clone(),
            pointer: pointer.into(),
        }
    }

    fn write_string(&self, pointer: &str, value: &str) -> Result<bool> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| anyhow::anyhow!("store lock poisoned"))?;
        let mut document = self.document()?;
        let Some(slot) = document.pointer_mut(pointer) else {
            tracing::warn!(pointer, "value no longer present in document");
            return Ok(false);
        };
        if !slot.is_string() {
            tracing::warn!(pointer, "value is no longer a string");
            return Ok(false);
        }
        *slot = Value::String(value.to_string());
        write_document(&self.path, &document, self.format)?;
        Ok(true)
    }
}

/// Reads the string stored at `pointer`.
pub fn string_at(document: &Value, pointer: &str) -> Option<String> {
    document
        .pointer(pointer)
        .and_then(Value::as_str)
        .map(str::to_string)
}

/// Writes one pointer of a [`DocumentStore`].
#[derive(Debug, Clone)]
pub struct PointerCommitter {
    store: DocumentStore,
    pointer: String,
}

impl Committer for PointerCommitter {
    fn commit(&self, value: &str) -> Result<bool, CommitError> {
        if !self.store.latency.is_zero() {
            thread::sleep(self.store.latency);
        }
        if self.store.read_only {
            tracing::info!(pointer = %self.pointer, "store is read-only, refusing commit");
            return Ok(false);
        }
        self.store
            .write_string(&self.pointer, value)
            .map_err(|err| CommitError::Failed(format!("{err:#}")))
    }
}
