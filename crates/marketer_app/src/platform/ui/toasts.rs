use std::time::Instant;

use marketer_core::{Notification, Severity};

/// Notifications currently on screen, each dismissed once its duration elapses.
#[derive(Debug, Default)]
pub struct ToastBoard {
    active: Vec<(Notification, Instant)>,
}

impl ToastBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification, now: Instant) {
        let expires_at = now + notification.duration;
        self.active.push((notification, expires_at));
    }

    /// Drops expired toasts. Returns true if any were removed.
    pub fn prune(&mut self, now: Instant) -> bool {
        let before = self.active.len();
        self.active.retain(|(_, expires_at)| *expires_at > now);
        self.active.len() != before
    }

    pub fn active(&self) -> impl Iterator<Item = &Notification> {
        self.active.iter().map(|(notification, _)| notification)
    }
}

/// One-line rendering of a notification.
pub fn format_toast(notification: &Notification) -> String {
    let marker = match notification.severity {
        Severity::Success => "ok",
        Severity::Error => "!!",
    };
    match &notification.description {
        Some(description) => format!("[{marker}] {}: {description}", notification.title),
        None => format!("[{marker}] {}", notification.title),
    }
}
