use std::sync::Arc;

use crate::{
    commit::{Committer, PendingCommit},
    field::InlineField,
};

/// One inline field together with the function that persists it.
pub struct FieldBinding {
    pub(crate) key: String,
    pub(crate) field: InlineField,
    pub(crate) committer: Arc<dyn Committer>,
    pub(crate) pending: Option<PendingCommit>,
}

impl FieldBinding {
    pub fn new(
        key: impl Into<String>,
        label: impl Into<String>,
        placeholder: impl Into<String>,
        current: impl Into<String>,
        committer: impl Committer,
    ) -> Self {
        Self {
            key: key.into(),
            field: InlineField::new(label, placeholder, current),
            committer: Arc::new(committer),
            pending: None,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn field(&self) -> &InlineField {
        &self.field
    }
}

impl std::fmt::Debug for FieldBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldBinding")
            .field("key", &self.key)
            .field("field", &self.field)
            .field("pending", &self.pending.is_some())
            .finish()
    }
}
