use std::time::{Duration, Instant};

pub const DEFAULT_NOTICE_DURATION: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
}

/// Outcome banner of the last completed submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    kind: NoticeKind,
    raised_at: Instant,
    ttl: Duration,
}

impl Notice {
    pub fn new(kind: NoticeKind, raised_at: Instant, ttl: Duration) -> Self {
        Self {
            kind,
            raised_at,
            ttl,
        }
    }

    pub fn kind(&self) -> NoticeKind {
        self.kind
    }

    pub fn raised_at(&self) -> Instant {
        self.raised_at
    }

    pub fn is_success(&self) -> bool {
        self.kind == NoticeKind::Success
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.raised_at) >= self.ttl
    }

    pub fn remaining(&self, now: Instant) -> Duration {
        self.ttl
            .saturating_sub(now.saturating_duration_since(self.raised_at))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expires_after_ttl() {
        let start = Instant::now();
        let notice = Notice::new(NoticeKind::Success, start, DEFAULT_NOTICE_DURATION);
        assert!(!notice.is_expired(start + Duration::from_millis(2999)));
        assert!(notice.is_expired(start + DEFAULT_NOTICE_DURATION));
        assert_eq!(notice.remaining(start + Duration::from_secs(10)), Duration::ZERO);
    }
}
