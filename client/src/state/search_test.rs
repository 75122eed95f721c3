use super::*;

// =============================================================
// debounce
// =============================================================

#[test]
fn short_queries_never_schedule() {
    let mut state = SearchState::default();
    assert_eq!(state.on_input(""), InputAction::Hide);
    assert_eq!(state.on_input(" a "), InputAction::Hide);
    assert_eq!(state.on_timer(1), None);
}

#[test]
fn query_is_trimmed_before_length_check() {
    let mut state = SearchState::default();
    let InputAction::Schedule { timer } = state.on_input("  ab  ") else {
        panic!("expected a scheduled fetch");
    };
    let req = state.on_timer(timer).unwrap();
    assert_eq!(req.query, "ab");
}

#[test]
fn rapid_keystrokes_fetch_once_for_final_query() {
    let mut state = SearchState::default();
    let timers: Vec<u64> = ["co", "coc", "coca"]
        .into_iter()
        .map(|q| match state.on_input(q) {
            InputAction::Schedule { timer } => timer,
            InputAction::Hide => panic!("unexpected hide"),
        })
        .collect();

    let fired: Vec<SuggestionRequest> = timers.into_iter().filter_map(|t| state.on_timer(t)).collect();
    assert_eq!(fired.len(), 1);
    assert_eq!(fired[0].query, "coca");
}

#[test]
fn timer_fires_at_most_once() {
    let mut state = SearchState::default();
    let InputAction::Schedule { timer } = state.on_input("pepsi") else {
        panic!("expected a scheduled fetch");
    };
    assert!(state.on_timer(timer).is_some());
    assert!(state.on_timer(timer).is_none());
}

#[test]
fn shortening_input_cancels_pending_fetch() {
    let mut state = SearchState::default();
    let InputAction::Schedule { timer } = state.on_input("pe") else {
        panic!("expected a scheduled fetch");
    };
    assert_eq!(state.on_input("p"), InputAction::Hide);
    assert!(state.on_timer(timer).is_none());
}

// =============================================================
// request ordering
// =============================================================

#[test]
fn only_latest_response_is_accepted() {
    let mut state = SearchState::default();
    let InputAction::Schedule { timer } = state.on_input("co") else {
        panic!("expected a scheduled fetch");
    };
    let first = state.on_timer(timer).unwrap();
    let InputAction::Schedule { timer } = state.on_input("coca") else {
        panic!("expected a scheduled fetch");
    };
    let second = state.on_timer(timer).unwrap();

    assert!(second.seq > first.seq);
    assert!(state.accepts(second.seq));
    assert!(!state.accepts(first.seq));
}

#[test]
fn short_input_invalidates_in_flight_response() {
    let mut state = SearchState::default();
    let InputAction::Schedule { timer } = state.on_input("co") else {
        panic!("expected a scheduled fetch");
    };
    let req = state.on_timer(timer).unwrap();
    state.on_input("");
    assert!(!state.accepts(req.seq));
}

#[test]
fn dismiss_invalidates_everything() {
    let mut state = SearchState::default();
    let InputAction::Schedule { timer } = state.on_input("co") else {
        panic!("expected a scheduled fetch");
    };
    state.dismiss();
    assert!(state.on_timer(timer).is_none());
}

// =============================================================
// rendering
// =============================================================

#[test]
fn render_escapes_markup() {
    let html = render_suggestions(&["<script>alert(1)</script>".to_owned()]);
    assert_eq!(
        html,
        r#"<div class="suggestion-item" data-value="&lt;script&gt;alert(1)&lt;/script&gt;">&lt;script&gt;alert(1)&lt;/script&gt;</div>"#
    );
    assert!(!html.contains("<script>"));
}

#[test]
fn render_escapes_attribute_quotes() {
    let html = render_suggestions(&[r#"a" onclick="x"#.to_owned()]);
    assert!(html.contains(r#"data-value="a&quot; onclick=&quot;x""#));
}

#[test]
fn panel_update_hides_on_empty_or_error() {
    assert_eq!(panel_update(&Ok(Vec::new())), PanelUpdate::Hide);
    assert_eq!(panel_update(&Err("offline".into())), PanelUpdate::Hide);
}

#[test]
fn panel_update_shows_one_row_per_item() {
    let PanelUpdate::Show(html) = panel_update(&Ok(vec!["Pepsi".into(), "Coca-Cola".into()])) else {
        panic!("expected the panel to show");
    };
    assert_eq!(html.matches(SUGGESTION_ITEM_CLASS).count(), 2);
}
