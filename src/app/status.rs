use crate::field::NoticeKind;

#[derive(Debug, Clone)]
pub struct StatusLine {
    message: String,
}

pub const READY_STATUS: &str = "Ready. Select a field and press Enter to edit it.";

impl Default for StatusLine {
    fn default() -> Self {
        Self {
            message: READY_STATUS.to_string(),
        }
    }
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ready(&mut self) {
        self.message = READY_STATUS.to_string();
    }

    pub fn editing(&mut self, label: &str) {
        self.message = format!("Editing {label}");
    }

    pub fn discarded(&mut self, label: &str) {
        self.message = format!("Discarded changes to {label}");
    }

    pub fn unchanged(&mut self, label: &str) {
        self.message = format!("{label} is unchanged");
    }

    pub fn submitting(&mut self, label: &str) {
        self.message = format!("Saving {label}…");
    }

    pub fn busy(&mut self, label: &str) {
        self.message = format!("{label} is still saving");
    }

    pub fn resolved(&mut self, label: &str, kind: NoticeKind) {
        self.message = match kind {
            NoticeKind::Success => format!("Saved {label}"),
            NoticeKind::Failure => format!("{label} was not saved; edit it again to retry"),
        };
    }

    pub fn external_update(&mut self, count: usize) {
        self.message = format!("{count} value(s) changed outside this editor");
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
