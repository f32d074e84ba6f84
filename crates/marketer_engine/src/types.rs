use std::fmt;

pub type RequestId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanReply {
    pub keywords: Vec<String>,
    pub sentences: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReply {
    pub sentence: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    ScanCompleted {
        request_id: RequestId,
        result: Result<ScanReply, ServiceError>,
    },
    GenerateCompleted {
        request_id: RequestId,
        slot: usize,
        result: Result<GenerateReply, ServiceError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct ServiceError {
    pub kind: FailureKind,
    pub message: String,
}

impl ServiceError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    InvalidBaseUrl,
    Network,
    Timeout,
    TaskFailed,
    HttpStatus(u16),
    InvalidResponse,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidBaseUrl => write!(f, "invalid base url"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TaskFailed => write!(f, "task failed"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::InvalidResponse => write!(f, "invalid response"),
        }
    }
}
