//! Selection state for one picker instance
//!
//! All mutation goes through [`SelectionController`]. Each of its three
//! mutators commits the change and then hands a full [`SelectionSnapshot`] to
//! the caller's callback, exactly once.

use serde::{Deserialize, Serialize};

use super::choice::ChoiceConfig;

/// Full current selection, delivered to the caller after every change.
///
/// Callers should treat each snapshot as authoritative, not as a delta.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSnapshot {
    pub image: Option<String>,
    pub reasons: Vec<String>,
    #[serde(rename = "customReason")]
    pub custom_reason: String,
}

/// Mutable state owned by a single picker instance
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    chosen_option: Option<String>,
    /// Set semantics; kept in first-selection order for display
    chosen_reasons: Vec<String>,
    free_text: String,
}

/// One user interaction with the picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent {
    SelectOption(String),
    ToggleReason(String),
    SetFreeText(String),
}

/// Callback invoked with the snapshot after every committed change
pub type SelectionCallback = Box<dyn FnMut(&SelectionSnapshot)>;

/// Binds a [`SelectionState`] to its configuration and optional callback
pub struct SelectionController {
    config: ChoiceConfig,
    state: SelectionState,
    on_selection_complete: Option<SelectionCallback>,
}

impl std::fmt::Debug for SelectionController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionController")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("has_callback", &self.on_selection_complete.is_some())
            .finish()
    }
}

impl SelectionController {
    /// Create a controller with all state at defaults
    pub fn new(config: ChoiceConfig) -> Self {
        Self {
            config,
            state: SelectionState::default(),
            on_selection_complete: None,
        }
    }

    pub fn with_callback(
        config: ChoiceConfig,
        callback: impl FnMut(&SelectionSnapshot) + 'static,
    ) -> Self {
        Self {
            config,
            state: SelectionState::default(),
            on_selection_complete: Some(Box::new(callback)),
        }
    }

    pub fn config(&self) -> &ChoiceConfig {
        &self.config
    }

    pub fn chosen_option(&self) -> Option<&str> {
        self.state.chosen_option.as_deref()
    }

    pub fn chosen_reasons(&self) -> &[String] {
        &self.state.chosen_reasons
    }

    pub fn free_text(&self) -> &str {
        &self.state.free_text
    }

    pub fn has_selection(&self) -> bool {
        self.state.chosen_option.is_some()
    }

    pub fn is_reason_chosen(&self, label: &str) -> bool {
        self.state.chosen_reasons.iter().any(|r| r == label)
    }

    /// Snapshot of the current state
    pub fn snapshot(&self) -> SelectionSnapshot {
        SelectionSnapshot {
            image: self.state.chosen_option.clone(),
            reasons: self.state.chosen_reasons.clone(),
            custom_reason: self.state.free_text.clone(),
        }
    }

    /// Choose an option.
    ///
    /// In single-select mode re-clicking the chosen option clears it. Otherwise
    /// the clicked option always becomes the choice. Reasons and free text are
    /// kept either way.
    pub fn select_option(&mut self, option: &str) {
        let reclicked = self.state.chosen_option.as_deref() == Some(option);
        self.state.chosen_option = if self.config.single_select && reclicked {
            None
        } else {
            Some(option.to_string())
        };
        self.notify();
    }

    /// Add `label` to the reason set, or remove it if already present
    pub fn toggle_reason(&mut self, label: &str) {
        let reasons = &mut self.state.chosen_reasons;
        if let Some(pos) = reasons.iter().position(|r| r == label) {
            reasons.remove(pos);
        } else {
            reasons.push(label.to_string());
        }
        self.notify();
    }

    /// Replace the free text as entered, no trimming
    pub fn set_free_text(&mut self, text: impl Into<String>) {
        self.state.free_text = text.into();
        self.notify();
    }

    /// Route an interaction to the matching mutator
    pub fn apply(&mut self, event: &SelectionEvent) {
        match event {
            SelectionEvent::SelectOption(option) => self.select_option(option),
            SelectionEvent::ToggleReason(label) => self.toggle_reason(label),
            SelectionEvent::SetFreeText(text) => self.set_free_text(text.as_str()),
        }
    }

    fn notify(&mut self) {
        let snapshot = self.snapshot();
        if let Some(callback) = self.on_selection_complete.as_mut() {
            callback(&snapshot);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    fn recording(config: ChoiceConfig) -> (SelectionController, Rc<RefCell<Vec<SelectionSnapshot>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let controller =
            SelectionController::with_callback(config, move |s| sink.borrow_mut().push(s.clone()));
        (controller, seen)
    }

    #[test]
    fn test_initial_state_is_empty() {
        let controller = SelectionController::new(ChoiceConfig::new("Pick", vec!["a".into()]));
        assert_eq!(controller.snapshot(), SelectionSnapshot::default());
        assert!(!controller.has_selection());
    }

    #[test]
    fn test_non_single_select_never_clears() {
        let (mut controller, seen) = recording(ChoiceConfig::new("Pick", vec!["a".into()]));
        controller.select_option("a");
        controller.select_option("a");
        assert_eq!(controller.chosen_option(), Some("a"));
        assert_eq!(seen.borrow().len(), 2, "Each click notifies, even without a change");
    }

    #[test]
    fn test_toggle_reason_keeps_first_selection_order() {
        let (mut controller, _) = recording(
            ChoiceConfig::new("Pick", vec!["x".into()])
                .with_reasons(vec!["A".into(), "B".into(), "C".into()]),
        );
        controller.toggle_reason("C");
        controller.toggle_reason("A");
        controller.toggle_reason("B");
        controller.toggle_reason("A");
        assert_eq!(controller.chosen_reasons(), ["C".to_string(), "B".to_string()]);
        assert!(controller.is_reason_chosen("B"));
        assert!(!controller.is_reason_chosen("A"));
    }

    #[test]
    fn test_toggle_reason_accepts_unconfigured_label() {
        let (mut controller, _) = recording(ChoiceConfig::new("Pick", vec!["x".into()]));
        controller.toggle_reason("Other");
        assert_eq!(controller.chosen_reasons(), ["Other".to_string()]);
    }

    #[test]
    fn test_free_text_is_not_trimmed() {
        let (mut controller, seen) = recording(ChoiceConfig::new("Pick", vec!["x".into()]));
        controller.set_free_text("  padded  ");
        assert_eq!(controller.free_text(), "  padded  ");
        assert_eq!(seen.borrow()[0].custom_reason, "  padded  ");
    }

    #[test]
    fn test_apply_routes_events() {
        let (mut controller, seen) = recording(
            ChoiceConfig::new("Pick", vec!["x".into()]).with_reasons(vec!["Clear".into()]),
        );
        controller.apply(&SelectionEvent::SelectOption("x".into()));
        controller.apply(&SelectionEvent::ToggleReason("Clear".into()));
        controller.apply(&SelectionEvent::SetFreeText("note".into()));
        assert_eq!(seen.borrow().len(), 3);
        assert_eq!(
            controller.snapshot(),
            SelectionSnapshot {
                image: Some("x".into()),
                reasons: vec!["Clear".into()],
                custom_reason: "note".into(),
            }
        );
    }

    #[test]
    fn test_snapshot_serializes_with_caller_field_names() {
        let snapshot = SelectionSnapshot {
            image: None,
            reasons: Vec::new(),
            custom_reason: String::new(),
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        assert_eq!(json, r#"{"image":null,"reasons":[],"customReason":""}"#);
    }
}
