//! The inline editable field: a labelled value that flips between a read-only
//! view and an input, commits through a caller supplied function and reports
//! the outcome with a transient notice.

mod draft;
mod messages;
mod notice;

use std::time::{Duration, Instant};

use crossterm::event::KeyEvent;

use crate::commit::{CommitOutcome, CommitRequest};

pub use draft::DraftBuffer;
pub use messages::Messages;
pub use notice::{DEFAULT_NOTICE_DURATION, Notice, NoticeKind};

const MIN_INPUT_WIDTH: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldMode {
    Viewing,
    Editing,
    Submitting,
}

#[derive(Debug, Clone)]
pub struct InlineField {
    label: String,
    placeholder: String,
    committed: String,
    draft: DraftBuffer,
    mode: FieldMode,
    in_flight: Option<String>,
    notice: Option<Notice>,
    notice_ttl: Duration,
}

impl InlineField {
    pub fn new(
        label: impl Into<String>,
        placeholder: impl Into<String>,
        current: impl Into<String>,
    ) -> Self {
        let committed = current.into();
        Self {
            label: label.into(),
            placeholder: placeholder.into(),
            draft: DraftBuffer::new(committed.clone()),
            committed,
            mode: FieldMode::Viewing,
            in_flight: None,
            notice: None,
            notice_ttl: DEFAULT_NOTICE_DURATION,
        }
    }

    pub fn with_notice_duration(mut self, ttl: Duration) -> Self {
        self.set_notice_duration(ttl);
        self
    }

    pub fn set_notice_duration(&mut self, ttl: Duration) {
        self.notice_ttl = ttl;
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn committed(&self) -> &str {
        &self.committed
    }

    pub fn draft(&self) -> &str {
        self.draft.as_str()
    }

    pub fn draft_buffer(&self) -> &DraftBuffer {
        &self.draft
    }

    pub fn mode(&self) -> FieldMode {
        self.mode
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Value awaiting the commit function, if a submit is in flight.
    pub fn in_flight(&self) -> Option<&str> {
        self.in_flight.as_deref()
    }

    pub fn is_editing(&self) -> bool {
        self.mode == FieldMode::Editing
    }

    pub fn is_interactive(&self) -> bool {
        self.mode != FieldMode::Submitting
    }

    /// Text currently shown in the field.
    pub fn display_value(&self) -> &str {
        self.draft.as_str()
    }

    /// True when the field shows the "no value set" sentinel.
    pub fn shows_placeholder(&self) -> bool {
        self.mode != FieldMode::Editing && self.draft.as_str() == self.placeholder
    }

    pub fn input_width(&self) -> usize {
        self.draft.char_len().max(MIN_INPUT_WIDTH)
    }

    pub fn tooltip(&self, messages: &Messages) -> String {
        messages.tooltip(self.is_editing(), &self.label)
    }

    /// Records the externally authoritative value. The draft follows it only
    /// while the field is being viewed.
    pub fn observe(&mut self, current: &str) {
        if self.committed != current {
            tracing::debug!(label = %self.label, "external value changed");
            self.committed.clear();
            self.committed.push_str(current);
        }
        if self.mode == FieldMode::Viewing && self.draft.as_str() != self.committed {
            self.draft.replace(&self.committed);
        }
    }

    pub fn request_edit(&mut self) -> bool {
        if self.mode != FieldMode::Viewing {
            return false;
        }
        self.mode = FieldMode::Editing;
        if self.committed == self.placeholder {
            self.draft.clear();
        } else {
            self.draft.replace(&self.committed);
        }
        tracing::debug!(label = %self.label, "editing started");
        true
    }

    /// Discards the draft without committing.
    pub fn cancel(&mut self) -> bool {
        if self.mode != FieldMode::Editing {
            return false;
        }
        self.mode = FieldMode::Viewing;
        self.draft.replace(&self.committed);
        tracing::debug!(label = %self.label, "editing cancelled");
        true
    }

    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        if self.mode != FieldMode::Editing {
            return false;
        }
        self.draft.handle_key(key)
    }

    /// Enter. Yields the value to hand to the commit function, or `None` when
    /// there is nothing to commit.
    pub fn confirm(&mut self) -> Option<CommitRequest> {
        if self.mode != FieldMode::Editing {
            return None;
        }
        let value = if self.draft.is_empty() {
            self.placeholder.clone()
        } else if self.draft.as_str() != self.committed {
            self.draft.as_str().to_string()
        } else {
            return None;
        };
        self.mode = FieldMode::Submitting;
        self.in_flight = Some(value.clone());
        tracing::info!(label = %self.label, "submitting value");
        Some(CommitRequest::new(value))
    }

    /// Applies the commit function's outcome and raises exactly one notice.
    pub fn resolve(&mut self, outcome: &CommitOutcome, now: Instant) -> Option<NoticeKind> {
        if self.mode != FieldMode::Submitting {
            return None;
        }
        let submitted = self.in_flight.take();
        let kind = if outcome.is_success() {
            if let Some(value) = submitted {
                self.committed = value;
            }
            NoticeKind::Success
        } else {
            if let CommitOutcome::Rejected(err) = outcome {
                tracing::warn!(label = %self.label, error = %err, "commit rejected");
            }
            NoticeKind::Failure
        };
        self.mode = FieldMode::Viewing;
        self.draft.replace(&self.committed);
        self.notice = Some(Notice::new(kind, now, self.notice_ttl));
        tracing::info!(label = %self.label, ?kind, "submit resolved");
        Some(kind)
    }

    /// Drops the notice once its display window has passed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self
            .notice
            .as_ref()
            .is_some_and(|notice| notice.is_expired(now))
        {
            self.notice = None;
            return true;
        }
        false
    }

    pub fn dismiss_notice(&mut self) -> bool {
        self.notice.take().is_some()
    }
}
