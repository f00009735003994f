//! Hover popup state machine.
//!
//! Each marker carries its own two-state machine:
//!
//! ```text
//! Closed --Enter--> Open
//! Open   --Leave--> Closed
//! ```
//!
//! Any other (state, event) pair is a no-op. Visibility is tracked here rather
//! than read back from the mapping library, so one hover event can only ever
//! change the popup of the marker it was reported for.

#[cfg(test)]
#[path = "popup_test.rs"]
mod popup_test;

use crate::widget::Hover;

/// Visibility of one marker's popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PopupState {
    #[default]
    Closed,
    Open,
}

/// Result of applying a hover event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupTransition {
    Opened,
    Closed,
    Unchanged,
}

impl PopupState {
    /// Next state and the transition taken for `hover`.
    #[must_use]
    pub fn on_hover(self, hover: Hover) -> (Self, PopupTransition) {
        match (self, hover) {
            (Self::Closed, Hover::Enter) => (Self::Open, PopupTransition::Opened),
            (Self::Open, Hover::Leave) => (Self::Closed, PopupTransition::Closed),
            (state, _) => (state, PopupTransition::Unchanged),
        }
    }
}

/// Popup states for every marker on one widget, indexed by placement order.
#[derive(Debug, Clone, Default)]
pub struct PopupStates {
    states: Vec<PopupState>,
    hover_enabled: Vec<bool>,
}

impl PopupStates {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Track one more marker.
    pub fn push(&mut self, initial: PopupState, hover_enabled: bool) {
        self.states.push(initial);
        self.hover_enabled.push(hover_enabled);
    }

    /// Apply `hover` to marker `index`.
    ///
    /// Returns `None` for unknown markers. Markers without hover wiring always
    /// report [`PopupTransition::Unchanged`].
    pub fn apply(&mut self, index: usize, hover: Hover) -> Option<PopupTransition> {
        let state = self.states.get_mut(index)?;
        if !self.hover_enabled.get(index).copied().unwrap_or(false) {
            return Some(PopupTransition::Unchanged);
        }
        let (next, transition) = state.on_hover(hover);
        *state = next;
        Some(transition)
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<PopupState> {
        self.states.get(index).copied()
    }

    /// Indices of markers whose popup is open.
    #[must_use]
    pub fn open_indices(&self) -> Vec<usize> {
        self.states
            .iter()
            .enumerate()
            .filter(|(_, s)| **s == PopupState::Open)
            .map(|(i, _)| i)
            .collect()
    }
}
