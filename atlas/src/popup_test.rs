use super::*;

// =============================================================
// PopupState
// =============================================================

#[test]
fn closed_opens_on_enter() {
    assert_eq!(PopupState::Closed.on_hover(Hover::Enter), (PopupState::Open, PopupTransition::Opened));
}

#[test]
fn open_closes_on_leave() {
    assert_eq!(PopupState::Open.on_hover(Hover::Leave), (PopupState::Closed, PopupTransition::Closed));
}

#[test]
fn repeated_edges_are_noops() {
    assert_eq!(PopupState::Open.on_hover(Hover::Enter), (PopupState::Open, PopupTransition::Unchanged));
    assert_eq!(PopupState::Closed.on_hover(Hover::Leave), (PopupState::Closed, PopupTransition::Unchanged));
}

// =============================================================
// PopupStates
// =============================================================

fn four_hover_markers() -> PopupStates {
    let mut states = PopupStates::new();
    for _ in 0..4 {
        states.push(PopupState::Closed, true);
    }
    states
}

#[test]
fn enter_touches_only_its_marker() {
    let mut states = four_hover_markers();
    assert_eq!(states.apply(2, Hover::Enter), Some(PopupTransition::Opened));
    assert_eq!(states.open_indices(), vec![2]);
}

#[test]
fn enter_then_leave_returns_to_all_closed() {
    let mut states = four_hover_markers();
    states.apply(1, Hover::Enter);
    assert_eq!(states.apply(1, Hover::Leave), Some(PopupTransition::Closed));
    assert!(states.open_indices().is_empty());
}

#[test]
fn unknown_marker_is_none() {
    let mut states = four_hover_markers();
    assert_eq!(states.apply(9, Hover::Enter), None);
    assert_eq!(states.get(9), None);
}

#[test]
fn markers_without_hover_keep_their_state() {
    let mut states = PopupStates::new();
    states.push(PopupState::Open, false);
    assert_eq!(states.apply(0, Hover::Leave), Some(PopupTransition::Unchanged));
    assert_eq!(states.get(0), Some(PopupState::Open));
}

#[test]
fn empty_by_default() {
    let mut states = PopupStates::new();
    assert_eq!(states.get(0), None);
    assert!(states.open_indices().is_empty());
    assert_eq!(states.apply(0, Hover::Enter), None);
}
