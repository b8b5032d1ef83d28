//! Bounded notification queue
//!
//! Replacement for the browser client's implicit toast globals: at
//! most `max_visible` notifications are kept, the oldest is evicted
//! first. The queue is owned by the presentation layer alone.

use std::collections::VecDeque;

/// Notification kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

impl NotificationKind {
    fn marker(&self) -> &'static str {
        match self {
            NotificationKind::Success => "✔",
            NotificationKind::Error => "✖",
            NotificationKind::Info => "ℹ",
        }
    }
}

/// One transient notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.kind.marker(), self.message)
    }
}

/// FIFO queue with a visibility bound
pub struct NotificationQueue {
    max_visible: usize,
    queue: VecDeque<Notification>,
}

impl NotificationQueue {
    /// Create a queue showing at most `max_visible` notifications
    pub fn new(max_visible: usize) -> Self {
        Self {
            max_visible: max_visible.max(1),
            queue: VecDeque::new(),
        }
    }

    /// Push a notification, evicting the oldest when full
    pub fn push(&mut self, kind: NotificationKind, message: impl Into<String>) {
        if self.queue.len() >= self.max_visible {
            let evicted = self.queue.pop_front();
            if let Some(evicted) = evicted {
                log::debug!("Evicted notification: {}", evicted.message);
            }
        }
        self.queue.push_back(Notification {
            kind,
            message: message.into(),
        });
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(NotificationKind::Success, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(NotificationKind::Error, message);
    }

    /// Currently visible notifications, oldest first
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.queue.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Print and clear the visible notifications
    pub fn flush(&mut self) {
        for notification in self.queue.drain(..) {
            eprintln!("{}", notification);
        }
    }
}

// ==================== Tests ====================
