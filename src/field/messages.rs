use std::borrow::Cow;

use super::NoticeKind;

const LABEL_SLOT: &str = "{label}";

/// User-facing text templates. `{label}` is replaced with the field label.
#[derive(Debug, Clone)]
pub struct Messages {
    pub edit_tooltip: Cow<'static, str>,
    pub save_tooltip: Cow<'static, str>,
    pub success: Cow<'static, str>,
    pub failure: Cow<'static, str>,
    pub saving: Cow<'static, str>,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            edit_tooltip: Cow::Borrowed("Press Enter to edit {label}"),
            save_tooltip: Cow::Borrowed("Press Enter to save {label}, Esc to discard"),
            success: Cow::Borrowed("{label} was saved"),
            failure: Cow::Borrowed("Could not save {label}"),
            saving: Cow::Borrowed("saving…"),
        }
    }
}

impl Messages {
    pub fn with_edit_tooltip(mut self, template: impl Into<Cow<'static, str>>) -> Self {
        self.edit_tooltip = template.into();
        self
    }

    pub fn with_save_tooltip(mut self, template: impl Into<Cow<'static, str>>) -> Self {
        self.save_tooltip = template.into();
        self
    }

    pub fn with_success(mut self, template: impl Into<Cow<'static, str>>) -> Self {
        self.success = template.into();
        self
    }

    pub fn with_failure(mut self, template: impl Into<Cow<'static, str>>) -> Self {
        self.failure = template.into();
        self
    }

    pub fn tooltip(&self, editing: bool, label: &str) -> String {
        let template = if editing {
            &self.save_tooltip
        } else {
            &self.edit_tooltip
        };
        fill(template, label)
    }

    pub fn notice(&self, kind: NoticeKind, label: &str) -> String {
        let template = match kind {
            NoticeKind::Success => &self.success,
            NoticeKind::Failure => &self.failure,
        };
        fill(template, label)
    }
}

fn fill(template: &str, label: &str) -> String {
    template.replace(LABEL_SLOT, label)
}
