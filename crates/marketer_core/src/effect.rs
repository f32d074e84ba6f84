use std::time::Duration;

use crate::RequestId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Scan {
        request_id: RequestId,
        url: String,
    },
    Generate {
        request_id: RequestId,
        slot: usize,
        keywords: Vec<String>,
        length: u32,
    },
    CopyToClipboard {
        text: String,
    },
    Notify(Notification),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// A transient, auto-dismissing notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: Option<String>,
    pub severity: Severity,
    pub duration: Duration,
    pub closable: bool,
}

impl Notification {
    pub fn error(description: &str) -> Self {
        Self {
            title: "Error".to_string(),
            description: Some(description.to_string()),
            severity: Severity::Error,
            duration: Duration::from_millis(3000),
            closable: true,
        }
    }

    pub fn copied() -> Self {
        Self {
            title: "Copied to clipboard".to_string(),
            description: None,
            severity: Severity::Success,
            duration: Duration::from_millis(2000),
            closable: false,
        }
    }
}
