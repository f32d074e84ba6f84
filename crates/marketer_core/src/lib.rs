//! Keyword marketer core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::{Effect, Notification, Severity};
pub use msg::{Msg, RequestFailure, ScanOutcome};
pub use state::{AppState, RequestId, GENERATE_LENGTH, SENTENCE_SLOTS};
pub use update::{update, REGENERATE_FAILED_MESSAGE, SCAN_FAILED_MESSAGE};
pub use view_model::{AppViewModel, SentenceRowView};
