use std::sync::mpsc;
use std::thread;

use marketer_core::{Effect, Msg, RequestFailure, RequestId, ScanOutcome};
use marketer_engine::{EngineError, EngineEvent, EngineHandle, FailureKind, ServiceSettings};
use marketer_logging::{marketer_debug, marketer_error, marketer_info, marketer_warn};

use super::app::AppEvent;
use super::clipboard::ClipboardService;

/// Executes service and clipboard effects. Notifications are left to the caller.
pub struct EffectRunner {
    engine: EngineHandle,
    clipboard: ClipboardService,
    app_tx: mpsc::Sender<AppEvent>,
}

impl EffectRunner {
    pub fn new(
        settings: &ServiceSettings,
        app_tx: mpsc::Sender<AppEvent>,
    ) -> Result<Self, EngineError> {
        let (event_tx, event_rx) = mpsc::channel();
        let engine = EngineHandle::new(settings, event_tx)?;
        spawn_event_forwarder(event_rx, app_tx.clone());
        Ok(Self {
            engine,
            clipboard: ClipboardService::new(),
            app_tx,
        })
    }

    pub fn run(&mut self, effect: Effect) {
        match effect {
            Effect::Scan { request_id, url } => {
                marketer_info!("Scan request_id={} url_len={} url={}", request_id, url.len(), url);
                if let Err(err) = self.engine.scan(request_id, url) {
                    marketer_error!("Scan request_id={} not started: {}", request_id, err);
                    self.report(not_started(request_id, None));
                }
            }
            Effect::Generate {
                request_id,
                slot,
                keywords,
                length,
            } => {
                marketer_info!(
                    "Generate request_id={} slot={} keywords={} length={}",
                    request_id,
                    slot,
                    keywords.len(),
                    length
                );
                if let Err(err) = self.engine.generate(request_id, slot, keywords, length) {
                    marketer_error!("Generate request_id={} not started: {}", request_id, err);
                    self.report(not_started(request_id, Some(slot)));
                }
            }
            Effect::CopyToClipboard { text } => self.clipboard.set_text(&text),
            Effect::Notify(_) => {}
        }
    }

    /// Feeds a completion back into the dispatch loop on the next turn.
    fn report(&self, msg: Msg) {
        if self.app_tx.send(AppEvent::Core(msg)).is_err() {
            marketer_debug!("App inbox closed; dropping completion");
        }
    }
}

/// Completion for a request the engine never accepted, so its in-flight
/// entry still clears.
fn not_started(request_id: RequestId, slot: Option<usize>) -> Msg {
    let result = Err(RequestFailure::Network);
    match slot {
        Some(slot) => Msg::RegenerateFinished {
            request_id,
            slot,
            result,
        },
        None => Msg::ScanFinished { request_id, result },
    }
}

fn spawn_event_forwarder(event_rx: mpsc::Receiver<EngineEvent>, app_tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        while let Ok(event) = event_rx.recv() {
            if app_tx.send(AppEvent::Core(map_event(event))).is_err() {
                break;
            }
        }
    });
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::ScanCompleted { request_id, result } => Msg::ScanFinished {
            request_id,
            result: result
                .map(|reply| ScanOutcome {
                    keywords: reply.keywords,
                    sentences: reply.sentences,
                })
                .map_err(|err| {
                    marketer_warn!("Scan request_id={} failed: {}", request_id, err);
                    map_failure(err.kind)
                }),
        },
        EngineEvent::GenerateCompleted {
            request_id,
            slot,
            result,
        } => Msg::RegenerateFinished {
            request_id,
            slot,
            result: result.map(|reply| reply.sentence).map_err(|err| {
                marketer_warn!("Generate request_id={} failed: {}", request_id, err);
                map_failure(err.kind)
            }),
        },
    }
}

fn map_failure(kind: FailureKind) -> RequestFailure {
    match kind {
        FailureKind::Timeout => RequestFailure::Timeout,
        FailureKind::HttpStatus(code) => RequestFailure::HttpStatus(code),
        FailureKind::InvalidResponse => RequestFailure::InvalidResponse,
        FailureKind::Network | FailureKind::InvalidBaseUrl | FailureKind::TaskFailed => {
            RequestFailure::Network
        }
    }
}

#[cfg(test)]
mod tests {
    use marketer_engine::{GenerateReply, ScanReply, ServiceError};

    use super::*;

    #[test]
    fn scan_reply_becomes_scan_finished() {
        let msg = map_event(EngineEvent::ScanCompleted {
            request_id: 4,
            result: Ok(ScanReply {
                keywords: vec!["k".to_string()],
                sentences: vec!["s".to_string()],
            }),
        });
        assert_eq!(
            msg,
            Msg::ScanFinished {
                request_id: 4,
                result: Ok(ScanOutcome {
                    keywords: vec!["k".to_string()],
                    sentences: vec!["s".to_string()],
                }),
            }
        );
    }

    #[test]
    fn service_failure_keeps_its_kind() {
        let msg = map_event(EngineEvent::GenerateCompleted {
            request_id: 9,
            slot: 2,
            result: Err(ServiceError {
                kind: FailureKind::InvalidResponse,
                message: "missing field `sentence`".to_string(),
            }),
        });
        assert_eq!(
            msg,
            Msg::RegenerateFinished {
                request_id: 9,
                slot: 2,
                result: Err(RequestFailure::InvalidResponse),
            }
        );
    }

    #[test]
    fn crashed_task_reads_as_network_failure() {
        let msg = map_event(EngineEvent::ScanCompleted {
            request_id: 5,
            result: Err(ServiceError {
                kind: FailureKind::TaskFailed,
                message: "service task did not complete".to_string(),
            }),
        });
        assert_eq!(
            msg,
            Msg::ScanFinished {
                request_id: 5,
                result: Err(RequestFailure::Network),
            }
        );
    }

    #[test]
    fn unstarted_requests_complete_with_failure() {
        assert_eq!(
            not_started(2, None),
            Msg::ScanFinished {
                request_id: 2,
                result: Err(RequestFailure::Network),
            }
        );
        assert_eq!(
            not_started(3, Some(6)),
            Msg::RegenerateFinished {
                request_id: 3,
                slot: 6,
                result: Err(RequestFailure::Network),
            }
        );
    }

    #[test]
    fn generate_reply_becomes_sentence() {
        let msg = map_event(EngineEvent::GenerateCompleted {
            request_id: 1,
            slot: 0,
            result: Ok(GenerateReply {
                sentence: "New.".to_string(),
            }),
        });
        assert!(matches!(
            msg,
            Msg::RegenerateFinished { result: Ok(ref s), .. } if s == "New."
        ));
    }
}
