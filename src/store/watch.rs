use std::{
    ffi::OsString,
    sync::mpsc::{self, Receiver},
    time::Duration,
};

use anyhow::{Context, Result};
use notify_debouncer_mini::{DebouncedEvent, Debouncer, new_debouncer};

use super::{DocumentStore, ValueSource, string_at};

const DEBOUNCE: Duration = Duration::from_millis(200);

/// Reports the watched values whenever another actor rewrites the document.
pub struct DocumentWatch {
    _debouncer: Debouncer<notify::RecommendedWatcher>,
    rx: Receiver<Result<Vec<DebouncedEvent>, notify::Error>>,
    store: DocumentStore,
    file_name: Option<OsString>,
    pointers: Vec<String>,
}

impl DocumentWatch {
    pub fn new(store: &DocumentStore, pointers: Vec<String>) -> Result<Self> {
        let (tx, rx) = mpsc::channel();
        let mut debouncer = new_debouncer(DEBOUNCE, tx).context("failed to start file watcher")?;
        // Editors often replace files by rename, so watch the directory.
        let dir = store
            .path()
            .parent()
            .context("document has no parent directory")?;
        debouncer
            .watcher()
            .watch(dir, notify::RecursiveMode::NonRecursive)
            .with_context(|| format!("failed to watch {}", dir.display()))?;
        tracing::info!(path = %store.path().display(), "watching document");
        Ok(Self {
            _debouncer: debouncer,
            rx,
            store: store.clone(),
            file_name: store.path().file_name().map(OsString::from),
            pointers,
        })
    }

    fn document_touched(&self) -> bool {
        let mut touched = false;
        while let Ok(result) = self.rx.try_recv() {
            match result {
                Ok(events) => {
                    touched |= events
                        .iter()
                        .any(|event| event.path.file_name() == self.file_name.as_deref());
                }
                Err(err) => tracing::warn!(error = %err, "file watcher error"),
            }
        }
        touched
    }
}

impl ValueSource for DocumentWatch {
    fn poll_changes(&mut self) -> Vec<(String, String)> {
        if !self.document_touched() {
            return Vec::new();
        }
        let document = match self.store.document() {
            Ok(document) => document,
            Err(err) => {
                tracing::warn!(error = %format!("{err:#}"), "skipping unreadable document");
                return Vec::new();
            }
        };
        tracing::debug!("document reloaded");
        self.pointers
            .iter()
            .filter_map(|pointer| {
                string_at(&document, pointer).map(|value| (pointer.clone(), value))
            })
            .collect()
    }
}
