//! Keyword marketer engine: generation service client and effect execution.
mod engine;
mod service;
mod types;
mod wire;

pub use engine::{EngineError, EngineHandle};
pub use service::{
    GenerationService, ReqwestGenerationService, ServiceSettings, DEFAULT_SERVICE_URL,
};
pub use types::{
    EngineEvent, FailureKind, GenerateReply, RequestId, ScanReply, ServiceError,
};
