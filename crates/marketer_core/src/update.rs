use marketer_logging::{marketer_debug, marketer_warn};

use crate::{AppState, Effect, Msg, Notification, GENERATE_LENGTH};

pub const SCAN_FAILED_MESSAGE: &str = "Failed to fetch data. Please try again.";
pub const REGENERATE_FAILED_MESSAGE: &str = "Failed to generate new sentence. Please try again.";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            state.set_url(text);
            Vec::new()
        }
        Msg::ScanSubmitted => {
            // No client-side validation; the service decides what a usable URL is.
            let request_id = state.begin_scan();
            vec![Effect::Scan {
                request_id,
                url: state.url().to_string(),
            }]
        }
        Msg::CopyRequested(text) => {
            vec![
                Effect::CopyToClipboard { text },
                Effect::Notify(Notification::copied()),
            ]
        }
        Msg::RegenerateClicked { slot } => match state.begin_regenerate(slot) {
            Some(request_id) => vec![Effect::Generate {
                request_id,
                slot,
                keywords: state.keywords().to_vec(),
                length: GENERATE_LENGTH,
            }],
            None => {
                marketer_warn!(
                    "Ignoring regenerate for slot {} (have {} sentences)",
                    slot,
                    state.sentences().len()
                );
                Vec::new()
            }
        },
        Msg::ScanFinished { request_id, result } => {
            if !state.finish_scan(request_id) {
                marketer_debug!("Discarding stale scan response request_id={}", request_id);
                return (state, Vec::new());
            }
            match result {
                Ok(outcome) => {
                    state.apply_scan(outcome);
                    Vec::new()
                }
                Err(failure) => {
                    marketer_warn!("Scan request_id={} failed: {}", request_id, failure);
                    vec![Effect::Notify(Notification::error(SCAN_FAILED_MESSAGE))]
                }
            }
        }
        Msg::RegenerateFinished {
            request_id,
            slot,
            result,
        } => {
            if !state.finish_regenerate(request_id, slot) {
                marketer_debug!(
                    "Discarding stale regenerate response request_id={} slot={}",
                    request_id,
                    slot
                );
                return (state, Vec::new());
            }
            match result {
                Ok(sentence) => {
                    if !state.replace_sentence(slot, sentence) {
                        marketer_warn!("Regenerated slot {} no longer exists", slot);
                    }
                    Vec::new()
                }
                Err(failure) => {
                    marketer_warn!(
                        "Regenerate request_id={} slot={} failed: {}",
                        request_id,
                        slot,
                        failure
                    );
                    vec![Effect::Notify(Notification::error(
                        REGENERATE_FAILED_MESSAGE,
                    ))]
                }
            }
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
