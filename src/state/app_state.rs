//! Application state definitions

use std::collections::HashMap;

use super::card::CardSummary;
use super::form::{DependencyEngine, FieldId, FormDocument, GroupId, GroupTransition};
use super::reveal::{RevealDirection, RevealState};

/// Outcome of the last submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every visible required field was filled
    Ready,
    /// Labels of visible required fields still empty
    MissingFields(Vec<String>),
}

/// All state the UI renders from. Headless: no terminal types in here.
pub struct AppState {
    /// The signup form the page rendered
    pub document: FormDocument,
    /// Bound dependency rules for the document
    pub engine: DependencyEngine,
    /// Index into `document.visible_fields()` of the focused control
    pub focus: usize,
    /// Running reveal/collapse transitions per group
    pub reveals: HashMap<GroupId, RevealState>,
    /// The billing display region: replaced wholesale on a successful fetch,
    /// untouched on failure
    pub card: Option<CardSummary>,
    /// Whether the portal backend answered at startup
    pub backend_connected: bool,
    /// Transient message shown in the status bar
    pub status_message: Option<String>,
    /// Result of the last submit attempt, if any
    pub last_submit: Option<SubmitOutcome>,
}

impl AppState {
    /// Build the signup form state with its rules already initialized, so
    /// the first paint shows the correct groups without animating.
    pub fn new() -> Self {
        let mut document = FormDocument::signup();
        let engine = DependencyEngine::signup(&document);
        engine.initialize(&mut document);
        Self {
            document,
            engine,
            focus: 0,
            reveals: HashMap::new(),
            card: None,
            backend_connected: false,
            status_message: None,
            last_submit: None,
        }
    }

    /// The field id currently focused, if the form has any visible fields
    pub fn focused_field(&self) -> Option<FieldId> {
        let visible = self.document.visible_fields();
        if visible.is_empty() {
            return None;
        }
        visible.get(self.focus.min(visible.len() - 1)).copied()
    }

    /// Move focus to the next visible field, wrapping
    pub fn focus_next(&mut self) {
        let count = self.document.visible_fields().len();
        if count > 0 {
            self.focus = (self.focus + 1) % count;
        }
    }

    /// Move focus to the previous visible field, wrapping
    pub fn focus_prev(&mut self) {
        let count = self.document.visible_fields().len();
        if count > 0 {
            self.focus = if self.focus == 0 {
                count - 1
            } else {
                self.focus - 1
            };
        }
    }

    /// Keep focus valid after a visibility change. If the focused field just
    /// hid, focus lands on the nearest preceding visible field.
    pub fn clamp_focus(&mut self) {
        let count = self.document.visible_fields().len();
        if count == 0 {
            self.focus = 0;
        } else if self.focus >= count {
            self.focus = count - 1;
        }
    }

    /// Record reveal/collapse transitions from the dependency engine.
    /// `animate = false` settles them instantly.
    pub fn start_transitions(&mut self, transitions: &[GroupTransition], animate: bool) {
        for t in transitions {
            let direction = if t.now_visible {
                RevealDirection::Reveal
            } else {
                RevealDirection::Collapse
            };
            let reveal = if animate {
                RevealState::new(direction)
            } else {
                RevealState::settled(direction)
            };
            self.reveals.insert(t.group, reveal);
        }
        self.clamp_focus();
    }

    /// Fraction of a group's full height to draw right now
    pub fn group_height_fraction(&self, group: GroupId) -> f32 {
        if let Some(reveal) = self.reveals.get(&group) {
            reveal.height_fraction()
        } else if self
            .document
            .group(group)
            .map(|g| g.visible)
            .unwrap_or(false)
        {
            1.0
        } else {
            0.0
        }
    }

    /// Whether any group transition is still animating
    pub fn is_animating(&self) -> bool {
        self.reveals.values().any(|r| !r.is_settled())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod focus {
        use super::*;

        #[test]
        fn test_initial_focus_is_first_field() {
            let state = AppState::new();
            assert_eq!(state.focused_field(), Some(FieldId::FirstName));
        }

        #[test]
        fn test_focus_next_wraps() {
            let mut state = AppState::new();
            let count = state.document.visible_fields().len();
            for _ in 0..count {
                state.focus_next();
            }
            assert_eq!(state.focused_field(), Some(FieldId::FirstName));
        }

        #[test]
        fn test_focus_prev_from_start_wraps_to_end() {
            let mut state = AppState::new();
            state.focus_prev();
            let visible = state.document.visible_fields();
            assert_eq!(state.focused_field(), visible.last().copied());
        }

        #[test]
        fn test_navigation_skips_hidden_group_fields() {
            let mut state = AppState::new();
            let visible = state.document.visible_fields();
            assert!(!visible.contains(&FieldId::BusinessName));
            for _ in 0..visible.len() {
                state.focus_next();
                assert_ne!(state.focused_field(), Some(FieldId::BusinessName));
            }
        }

        #[test]
        fn test_clamp_focus_after_group_hides() {
            let mut state = AppState::new();
            // Reveal state/zip, focus the last field, then hide the group
            state
                .document
                .field_mut(FieldId::Country)
                .unwrap()
                .select_code("US");
            let transitions = state.engine.apply(&mut state.document, FieldId::Country);
            state.start_transitions(&transitions, false);

            state.focus = state.document.visible_fields().len() - 1;
            state
                .document
                .field_mut(FieldId::Country)
                .unwrap()
                .select_code("CA");
            let transitions = state.engine.apply(&mut state.document, FieldId::Country);
            state.start_transitions(&transitions, false);

            assert!(state.focused_field().is_some());
            assert!(state.focus < state.document.visible_fields().len());
        }
    }

    mod transitions {
        use super::*;

        #[test]
        fn test_instant_transition_is_settled() {
            let mut state = AppState::new();
            state.start_transitions(
                &[GroupTransition {
                    group: GroupId::BusinessFields,
                    now_visible: true,
                }],
                false,
            );
            assert!(!state.is_animating());
            assert_eq!(state.group_height_fraction(GroupId::BusinessFields), 1.0);
        }

        #[test]
        fn test_animated_transition_is_animating() {
            let mut state = AppState::new();
            state.start_transitions(
                &[GroupTransition {
                    group: GroupId::StateZipFields,
                    now_visible: true,
                }],
                true,
            );
            assert!(state.is_animating());
        }

        #[test]
        fn test_height_fraction_without_transition_matches_visibility() {
            let mut state = AppState::new();
            assert_eq!(state.group_height_fraction(GroupId::BusinessFields), 0.0);
            state
                .document
                .group_mut(GroupId::BusinessFields)
                .unwrap()
                .visible = true;
            assert_eq!(state.group_height_fraction(GroupId::BusinessFields), 1.0);
        }

        #[test]
        fn test_settled_collapse_draws_nothing() {
            let mut state = AppState::new();
            state.start_transitions(
                &[GroupTransition {
                    group: GroupId::StateZipFields,
                    now_visible: false,
                }],
                false,
            );
            assert_eq!(state.group_height_fraction(GroupId::StateZipFields), 0.0);
        }
    }

    mod initialization {
        use super::*;

        #[test]
        fn test_new_state_has_no_card() {
            let state = AppState::new();
            assert!(state.card.is_none());
            assert!(state.status_message.is_none());
            assert!(state.last_submit.is_none());
        }

        #[test]
        fn test_new_state_groups_match_default_values() {
            let state = AppState::new();
            assert!(
                !state
                    .document
                    .group(GroupId::BusinessFields)
                    .unwrap()
                    .visible
            );
            assert!(
                !state
                    .document
                    .group(GroupId::StateZipFields)
                    .unwrap()
                    .visible
            );
        }
    }
}
