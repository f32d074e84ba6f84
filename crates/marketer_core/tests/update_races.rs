use marketer_core::{
    update, AppState, Effect, Msg, Notification, RequestFailure, RequestId, ScanOutcome,
    REGENERATE_FAILED_MESSAGE,
};

fn init_logging() {
    marketer_logging::initialize_for_tests();
}

fn request_id_of(effects: &[Effect]) -> RequestId {
    effects
        .iter()
        .find_map(|effect| match effect {
            Effect::Scan { request_id, .. } | Effect::Generate { request_id, .. } => {
                Some(*request_id)
            }
            _ => None,
        })
        .expect("request effect")
}

fn outcome(tag: &str) -> ScanOutcome {
    ScanOutcome {
        keywords: vec![format!("{tag}-keyword")],
        sentences: vec![format!("{tag}-0"), format!("{tag}-1")],
    }
}

#[test]
fn stale_scan_response_is_discarded() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::ScanSubmitted);
    let first = request_id_of(&effects);
    let (state, effects) = update(state, Msg::ScanSubmitted);
    let second = request_id_of(&effects);

    let (state, _) = update(
        state,
        Msg::ScanFinished {
            request_id: second,
            result: Ok(outcome("new")),
        },
    );
    assert!(state.is_loading(), "first scan is still outstanding");

    let (mut state, effects) = update(
        state,
        Msg::ScanFinished {
            request_id: first,
            result: Ok(outcome("old")),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(state.keywords(), ["new-keyword"]);
    assert!(!state.is_loading());
    assert!(state.consume_dirty());
}

#[test]
fn stale_scan_failure_does_not_notify() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::ScanSubmitted);
    let first = request_id_of(&effects);
    let (state, _) = update(state, Msg::ScanSubmitted);

    let (state, effects) = update(
        state,
        Msg::ScanFinished {
            request_id: first,
            result: Err(RequestFailure::Network),
        },
    );

    assert!(effects.is_empty());
    assert!(state.is_loading());
}

#[test]
fn same_slot_latest_request_wins_in_any_order() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::RegenerateClicked { slot: 2 });
    let first = request_id_of(&effects);
    let (state, effects) = update(state, Msg::RegenerateClicked { slot: 2 });
    let second = request_id_of(&effects);

    let (state, _) = update(
        state,
        Msg::RegenerateFinished {
            request_id: second,
            slot: 2,
            result: Ok("second".to_string()),
        },
    );
    let (state, effects) = update(
        state,
        Msg::RegenerateFinished {
            request_id: first,
            slot: 2,
            result: Ok("first".to_string()),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(state.sentences()[2], "second");
    assert!(!state.is_loading());
}

#[test]
fn different_slots_both_apply() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::RegenerateClicked { slot: 0 });
    let zero = request_id_of(&effects);
    let (state, effects) = update(state, Msg::RegenerateClicked { slot: 7 });
    let seven = request_id_of(&effects);

    let (state, _) = update(
        state,
        Msg::RegenerateFinished {
            request_id: seven,
            slot: 7,
            result: Ok("seven".to_string()),
        },
    );
    assert!(state.is_loading());
    let (state, _) = update(
        state,
        Msg::RegenerateFinished {
            request_id: zero,
            slot: 0,
            result: Ok("zero".to_string()),
        },
    );

    assert_eq!(state.sentences()[0], "zero");
    assert_eq!(state.sentences()[7], "seven");
    assert!(!state.is_loading());
}

#[test]
fn new_scan_supersedes_outstanding_regenerate() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::RegenerateClicked { slot: 1 });
    let regen = request_id_of(&effects);
    let (state, effects) = update(state, Msg::ScanSubmitted);
    let scan = request_id_of(&effects);

    let (state, _) = update(
        state,
        Msg::ScanFinished {
            request_id: scan,
            result: Ok(outcome("scan")),
        },
    );
    let (state, effects) = update(
        state,
        Msg::RegenerateFinished {
            request_id: regen,
            slot: 1,
            result: Ok("late".to_string()),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(state.sentences(), ["scan-0", "scan-1"]);
    assert!(!state.is_loading());
}

#[test]
fn failed_scan_leaves_outstanding_regenerate_live() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::RegenerateClicked { slot: 1 });
    let regen = request_id_of(&effects);
    let (state, effects) = update(state, Msg::ScanSubmitted);
    let scan = request_id_of(&effects);

    let (state, _) = update(
        state,
        Msg::ScanFinished {
            request_id: scan,
            result: Err(RequestFailure::Network),
        },
    );
    let (state, effects) = update(
        state,
        Msg::RegenerateFinished {
            request_id: regen,
            slot: 1,
            result: Ok("X".to_string()),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(state.sentences()[1], "X");
    assert!(!state.is_loading());
}

#[test]
fn regenerate_failure_after_failed_scan_still_notifies() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::RegenerateClicked { slot: 4 });
    let regen = request_id_of(&effects);
    let (state, effects) = update(state, Msg::ScanSubmitted);
    let scan = request_id_of(&effects);

    let (state, effects) = update(
        state,
        Msg::ScanFinished {
            request_id: scan,
            result: Err(RequestFailure::HttpStatus(400)),
        },
    );
    assert_eq!(effects.len(), 1);

    let (state, effects) = update(
        state,
        Msg::RegenerateFinished {
            request_id: regen,
            slot: 4,
            result: Err(RequestFailure::Timeout),
        },
    );

    assert_eq!(
        effects,
        vec![Effect::Notify(Notification::error(REGENERATE_FAILED_MESSAGE))]
    );
    assert_eq!(state.sentences()[4], "");
    assert!(!state.is_loading());
}

#[test]
fn duplicate_completion_is_ignored() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::RegenerateClicked { slot: 0 });
    let request_id = request_id_of(&effects);
    let finished = Msg::RegenerateFinished {
        request_id,
        slot: 0,
        result: Ok("once".to_string()),
    };

    let (state, _) = update(state, finished.clone());
    let (mut state, _) = update(state, Msg::RegenerateClicked { slot: 0 });
    state.consume_dirty();
    let (state, effects) = update(state, finished);

    assert!(effects.is_empty());
    assert_eq!(state.sentences()[0], "once");
    assert!(state.is_loading());
}
