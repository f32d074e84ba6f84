use marketer_core::{update, AppState, Msg, ScanOutcome};

#[test]
fn state_snapshot_survives_json() {
    let (state, _) = update(AppState::new(), Msg::InputChanged("https://example.com".into()));
    let (state, _) = update(state, Msg::ScanSubmitted);
    let (state, _) = update(
        state,
        Msg::ScanFinished {
            request_id: 1,
            result: Ok(ScanOutcome {
                keywords: vec!["widgets".into()],
                sentences: vec!["Buy widgets.".into()],
            }),
        },
    );
    let (mut state, _) = update(state, Msg::RegenerateClicked { slot: 0 });
    state.consume_dirty();

    let json = serde_json::to_string(&state).expect("serialize");
    let restored: AppState = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(restored, state);
    assert!(restored.is_loading());
    assert_eq!(restored.url(), "https://example.com");
}

#[test]
fn snapshot_does_not_carry_render_flag() {
    let (state, _) = update(AppState::new(), Msg::InputChanged("x".into()));
    assert!(state.view().dirty);

    let json = serde_json::to_value(&state).expect("serialize");
    assert!(json.get("dirty").is_none());
    assert_eq!(json["sentences"].as_array().map(Vec::len), Some(10));
}
