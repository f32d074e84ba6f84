use std::fmt;

use serde::{Deserialize, Serialize};

use crate::RequestId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the URL input box.
    InputChanged(String),
    /// User submitted the current URL for scanning.
    ScanSubmitted,
    /// User asked to copy a keyword or sentence.
    CopyRequested(String),
    /// User clicked "Generate New" on a sentence slot.
    RegenerateClicked { slot: usize },
    /// Service completion for a scan request.
    ScanFinished {
        request_id: RequestId,
        result: Result<ScanOutcome, RequestFailure>,
    },
    /// Service completion for a regenerate request.
    RegenerateFinished {
        request_id: RequestId,
        slot: usize,
        result: Result<String, RequestFailure>,
    },
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}

/// Keywords and sentences returned by a successful scan.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScanOutcome {
    pub keywords: Vec<String>,
    pub sentences: Vec<String>,
}

/// Why a service request failed. The user sees one fixed message per
/// endpoint regardless of the kind; the kind is kept for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestFailure {
    Network,
    Timeout,
    HttpStatus(u16),
    InvalidResponse,
}

impl fmt::Display for RequestFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestFailure::Network => write!(f, "network error"),
            RequestFailure::Timeout => write!(f, "timeout"),
            RequestFailure::HttpStatus(code) => write!(f, "http status {code}"),
            RequestFailure::InvalidResponse => write!(f, "invalid response"),
        }
    }
}
