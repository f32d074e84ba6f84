use std::io;
use std::sync::{mpsc, Arc};
use std::thread;

use marketer_logging::{marketer_debug, marketer_error, marketer_info};

use crate::service::{GenerationService, ReqwestGenerationService, ServiceSettings};
use crate::{EngineEvent, FailureKind, RequestId, ServiceError};

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to configure generation service: {0}")]
    Service(#[from] ServiceError),
    #[error("failed to start engine runtime: {0}")]
    Runtime(#[from] io::Error),
    #[error("engine has stopped")]
    Stopped,
}

enum EngineCommand {
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
}

/// Runs service calls on a background tokio runtime and reports each
/// completion as one [`EngineEvent`] on the supplied channel.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(
        settings: &ServiceSettings,
        event_tx: mpsc::Sender<EngineEvent>,
    ) -> Result<Self, EngineError> {
        let service = ReqwestGenerationService::new(settings)?;
        marketer_info!("Generation service at {}", settings.base_url);
        Self::with_service(Arc::new(service), event_tx)
    }

    pub fn with_service(
        service: Arc<dyn GenerationService>,
        event_tx: mpsc::Sender<EngineEvent>,
    ) -> Result<Self, EngineError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .thread_name("marketer-engine")
            .build()?;
        let (cmd_tx, cmd_rx) = mpsc::channel::<EngineCommand>();

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let service = service.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    let request_id = command.request_id();
                    let fallback = command.failed(ServiceError::new(
                        FailureKind::TaskFailed,
                        "service task did not complete",
                    ));
                    // A panicking service call still owes the caller a completion.
                    let event = match tokio::spawn(run_command(service, command)).await {
                        Ok(event) => event,
                        Err(err) => {
                            marketer_error!("Engine task for request_id={} failed: {}", request_id, err);
                            fallback
                        }
                    };
                    if event_tx.send(event).is_err() {
                        marketer_debug!("Event receiver closed; dropping request_id={}", request_id);
                    }
                });
            }
            marketer_debug!("Engine command channel closed");
        });

        Ok(Self { cmd_tx })
    }

    /// Queues a scan. Fails only if the engine thread is gone, in which case
    /// no completion event will follow.
    pub fn scan(&self, request_id: RequestId, url: impl Into<String>) -> Result<(), EngineError> {
        self.send(EngineCommand::Scan {
            request_id,
            url: url.into(),
        })
    }

    pub fn generate(
        &self,
        request_id: RequestId,
        slot: usize,
        keywords: Vec<String>,
        length: u32,
    ) -> Result<(), EngineError> {
        self.send(EngineCommand::Generate {
            request_id,
            slot,
            keywords,
            length,
        })
    }

    fn send(&self, command: EngineCommand) -> Result<(), EngineError> {
        self.cmd_tx.send(command).map_err(|_| EngineError::Stopped)
    }
}

async fn run_command(service: Arc<dyn GenerationService>, command: EngineCommand) -> EngineEvent {
    match command {
        EngineCommand::Scan { request_id, url } => EngineEvent::ScanCompleted {
            request_id,
            result: service.scan(&url).await,
        },
        EngineCommand::Generate {
            request_id,
            slot,
            keywords,
            length,
        } => EngineEvent::GenerateCompleted {
            request_id,
            slot,
            result: service.generate(&keywords, length).await,
        },
    }
}
