//! Toast notifications
//!
//! Fire-and-forget stack with auto-expiry: newest on top, bounded depth,
//! no acknowledgement.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

const DEFAULT_TTL: Duration = Duration::from_millis(3000);
const MAX_VISIBLE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    created: Instant,
}

impl Toast {
    fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            created: Instant::now(),
        }
    }
}

/// Stack of active toasts, newest first
#[derive(Debug)]
pub struct ToastStack {
    toasts: VecDeque<Toast>,
    ttl: Duration,
}

impl ToastStack {
    pub fn new() -> Self {
        Self {
            toasts: VecDeque::new(),
            ttl: DEFAULT_TTL,
        }
    }

    #[cfg(test)]
    fn with_ttl(ttl: Duration) -> Self {
        Self {
            toasts: VecDeque::new(),
            ttl,
        }
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(Toast::new(ToastKind::Success, message));
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(Toast::new(ToastKind::Error, message));
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(Toast::new(ToastKind::Info, message));
    }

    fn push(&mut self, toast: Toast) {
        tracing::debug!(kind = ?toast.kind, message = %toast.message, "toast");
        self.toasts.push_front(toast);
        self.toasts.truncate(MAX_VISIBLE);
    }

    /// Drop expired toasts. Called once per UI tick.
    pub fn prune(&mut self) {
        let ttl = self.ttl;
        self.toasts.retain(|t| t.created.elapsed() < ttl);
    }

    /// Active toasts, newest first
    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

impl Default for ToastStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newest_first() {
        let mut stack = ToastStack::new();
        stack.success("first");
        stack.error("second");

        let messages: Vec<_> = stack.iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, ["second", "first"]);
    }

    #[test]
    fn test_prune_drops_expired() {
        let mut stack = ToastStack::with_ttl(Duration::from_millis(0));
        stack.info("gone");
        stack.prune();
        assert!(stack.is_empty());
    }

    #[test]
    fn test_stack_is_bounded() {
        let mut stack = ToastStack::new();
        for i in 0..10 {
            stack.info(format!("toast {}", i));
        }
        assert_eq!(stack.iter().count(), MAX_VISIBLE);
    }
}
