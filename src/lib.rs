#![deny(rust_2018_idioms)]

//! Inline editable text fields for terminal UIs.
//!
//! An [`InlineField`] shows a value read-only until the user starts editing
//! it, hands confirmed edits to a caller supplied [`Committer`] on a worker
//! thread and reports the outcome with a notice that dismisses itself.

mod app;
pub mod commit;
pub mod field;
pub mod io;
mod presentation;
pub mod store;

pub use app::{FieldBinding, InlineEditUI, UiOptions};
pub use commit::{CommitError, CommitOutcome, CommitRequest, Committer, PendingCommit};
pub use field::{FieldMode, InlineField, Messages, Notice, NoticeKind};
pub use io::DocumentFormat;
pub use store::{DocumentStore, DocumentWatch, PointerCommitter, ValueSource};

pub mod prelude {
    pub use super::{
        Committer, DocumentStore, FieldBinding, InlineEditUI, InlineField, UiOptions,
    };
}
