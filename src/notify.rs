//! Notifications
//!
//! Themed toast messages. The queue is plain data; `NotificationCenter`
//! puts it in a signal and drives the dismissal timers.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};

/// Exit transition before a toast is dropped
pub const EXIT_MS: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Warning,
    #[serde(alias = "error")]
    Danger,
    #[serde(other)]
    Info,
}

impl Severity {
    /// Accepts server flash categories, `error` included
    pub fn parse(s: &str) -> Self {
        match s {
            "success" => Severity::Success,
            "warning" => Severity::Warning,
            "danger" | "error" => Severity::Danger,
            _ => Severity::Info,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Danger => "danger",
            Severity::Info => "info",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Severity::Success => "bi-check-circle-fill",
            Severity::Warning | Severity::Danger => "bi-exclamation-triangle-fill",
            Severity::Info => "bi-info-circle-fill",
        }
    }

    pub fn alert_class(&self) -> String {
        format!("alert alert-{} alert-dismissible fancy-notification", self.as_str())
    }
}

/// Anything that can show a message to the user. Fire-and-forget.
pub trait Notifier {
    fn notify(&self, message: &str, severity: Severity, duration_ms: Option<u32>);
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u32,
    pub message: String,
    pub severity: Severity,
    /// Set once the exit transition has started
    pub leaving: bool,
}

/// Ordered toasts, newest last
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationQueue {
    next_id: u32,
    items: Vec<Notification>,
}

impl NotificationQueue {
    pub fn push(&mut self, message: &str, severity: Severity) -> u32 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notification {
            id,
            message: message.to_string(),
            severity,
            leaving: false,
        });
        id
    }

    pub fn begin_leave(&mut self, id: u32) -> bool {
        match self.items.iter_mut().find(|n| n.id == id) {
            Some(n) if !n.leaving => {
                n.leaving = true;
                true
            }
            _ => false,
        }
    }

    pub fn remove(&mut self, id: u32) {
        self.items.retain(|n| n.id != id);
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }
}

/// Signal-backed notifier used by the running app
#[derive(Clone, Copy)]
pub struct NotificationCenter {
    pub queue: RwSignal<NotificationQueue>,
    default_ms: u32,
}

impl NotificationCenter {
    pub fn new(default_ms: u32) -> Self {
        Self {
            queue: RwSignal::new(NotificationQueue::default()),
            default_ms,
        }
    }

    /// Start the exit transition now and drop the toast after it
    pub fn dismiss(&self, id: u32) {
        let queue = self.queue;
        let started = queue.try_update(|q| q.begin_leave(id)).unwrap_or(false);
        if started {
            Timeout::new(EXIT_MS, move || queue.update(|q| q.remove(id))).forget();
        }
    }
}

impl Notifier for NotificationCenter {
    fn notify(&self, message: &str, severity: Severity, duration_ms: Option<u32>) {
        log::debug!("[NOTIFY] {}: {}", severity.as_str(), message);
        let Some(id) = self.queue.try_update(|q| q.push(message, severity)) else {
            return;
        };
        let center = *self;
        let duration = duration_ms.unwrap_or(self.default_ms);
        Timeout::new(duration, move || center.dismiss(id)).forget();
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_parse_and_icons() {
        assert_eq!(Severity::parse("error"), Severity::Danger);
        assert_eq!(Severity::parse("danger"), Severity::Danger);
        assert_eq!(Severity::parse("message"), Severity::Info);
        assert_eq!(Severity::Warning.icon(), Severity::Danger.icon());
        assert_eq!(Severity::Success.icon(), "bi-check-circle-fill");
        let parsed: Severity = serde_json::from_str("\"error\"").unwrap();
        assert_eq!(parsed, Severity::Danger);
    }

    #[test]
    fn test_queue_lifecycle() {
        let mut q = NotificationQueue::default();
        let a = q.push("first", Severity::Info);
        let b = q.push("second", Severity::Success);
        assert_ne!(a, b);
        assert!(q.begin_leave(a));
        assert!(!q.begin_leave(a));
        assert!(q.items()[0].leaving);
        q.remove(a);
        assert_eq!(q.items().len(), 1);
        assert_eq!(q.items()[0].message, "second");
        assert!(!q.begin_leave(a));
    }
}
