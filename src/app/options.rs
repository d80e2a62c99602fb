use std::{borrow::Cow, time::Duration};

use crate::field::{DEFAULT_NOTICE_DURATION, Messages};

#[derive(Debug, Clone)]
pub struct UiOptions {
    pub tick_rate: Duration,
    pub notice_duration: Duration,
    pub show_help: bool,
    pub messages: Messages,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_millis(100),
            notice_duration: DEFAULT_NOTICE_DURATION,
            show_help: true,
            messages: Messages::default(),
        }
    }
}

impl UiOptions {
    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    /// How long a submit notice stays on screen.
    pub fn with_notice_duration(mut self, duration: Duration) -> Self {
        self.notice_duration = duration;
        self
    }

    pub fn with_help(mut self, show: bool) -> Self {
        self.show_help = show;
        self
    }

    pub fn with_messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }

    pub fn with_success_message(self, template: impl Into<Cow<'static, str>>) -> Self {
        let template = template.into();
        self.map_messages(|messages| messages.with_success(template))
    }

    pub fn with_failure_message(self, template: impl Into<Cow<'static, str>>) -> Self {
        let template = template.into();
        self.map_messages(|messages| messages.with_failure(template))
    }

    fn map_messages(mut self, map: impl FnOnce(Messages) -> Messages) -> Self {
        self.messages = map(self.messages);
        self
    }
}
