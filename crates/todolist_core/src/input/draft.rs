//! Pending input state of the creation screen.
//!
//! # Invariants
//! - Raw input never holds more than `MAX_TASK_TEXT_CHARS` chars.
//! - `submit` touches the store only when validation passes.
//! - Cancelling with non-blank input requires a discard confirmation.

use crate::input::validation::{validate_task_text, TaskTextError, MAX_TASK_TEXT_CHARS};
use crate::model::task::TaskId;
use crate::store::task_store::TaskStore;
use log::info;

/// Counter turns to a warning color above this many chars.
pub const NEAR_LIMIT_CHARS: usize = 80;

/// One-tap suggestions offered under the input field.
pub const QUICK_SUGGESTIONS: &[&str] = &["Exercise", "Read a book", "Call family", "Buy groceries"];

/// What the screen should do after the user taps cancel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelOutcome {
    /// Nothing typed; go back immediately.
    Close,
    /// Ask "Discard Changes" before going back.
    ConfirmDiscard,
}

/// Text being typed on the creation screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    text: String,
}

impl TaskDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the raw input, capped like the text field's max length.
    pub fn set_text(&mut self, text: &str) {
        self.text = text.chars().take(MAX_TASK_TEXT_CHARS).collect();
    }

    /// Fills the input with one of `QUICK_SUGGESTIONS`.
    pub fn apply_suggestion(&mut self, suggestion: &str) {
        self.set_text(suggestion);
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Raw char count, including surrounding whitespace.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Counter label, e.g. `12/100`.
    pub fn char_counter(&self) -> String {
        format!("{}/{}", self.char_count(), MAX_TASK_TEXT_CHARS)
    }

    pub fn is_near_limit(&self) -> bool {
        self.char_count() > NEAR_LIMIT_CHARS
    }

    /// Whether the create button is enabled.
    pub fn can_submit(&self) -> bool {
        !self.text.trim().is_empty()
    }

    /// Validates the draft and appends it to `store`.
    ///
    /// On success the draft is cleared and the new task id returned.
    ///
    /// # Errors
    /// - Propagates `TaskTextError`; the store and the draft stay unchanged.
    pub fn submit(&mut self, store: &mut TaskStore) -> Result<TaskId, TaskTextError> {
        let text = validate_task_text(&self.text)?;
        let id = store.add(text);
        self.clear();
        info!("event=task_create module=draft status=ok id={id}");
        Ok(id)
    }

    /// Decides whether cancelling needs a discard prompt.
    pub fn cancel(&self) -> CancelOutcome {
        if self.text.trim().is_empty() {
            CancelOutcome::Close
        } else {
            CancelOutcome::ConfirmDiscard
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CancelOutcome, TaskDraft, QUICK_SUGGESTIONS};

    #[test]
    fn set_text_caps_raw_input() {
        let mut draft = TaskDraft::new();
        draft.set_text(&"x".repeat(150));
        assert_eq!(draft.char_count(), 100);
        assert_eq!(draft.char_counter(), "100/100");
        assert!(draft.is_near_limit());
    }

    #[test]
    fn counter_tracks_raw_length() {
        let mut draft = TaskDraft::new();
        draft.set_text(" hi ");
        assert_eq!(draft.char_counter(), "4/100");
        assert!(!draft.is_near_limit());
    }

    #[test]
    fn cancel_requires_confirmation_only_for_non_blank_input() {
        let mut draft = TaskDraft::new();
        assert_eq!(draft.cancel(), CancelOutcome::Close);
        draft.set_text("   ");
        assert_eq!(draft.cancel(), CancelOutcome::Close);
        assert!(!draft.can_submit());
        draft.apply_suggestion(QUICK_SUGGESTIONS[0]);
        assert_eq!(draft.cancel(), CancelOutcome::ConfirmDiscard);
        assert!(draft.can_submit());
    }
}
