//! Task domain model.
//!
//! # Responsibility
//! - Define the single record rendered by the list and creation screens.
//! - Keep identity and creation metadata immutable once a task exists.
//!
//! # Invariants
//! - `id` is unique within one store and never reused by that store.
//! - `done` is the only field that changes after creation.
//! - Only the owning store flips `done`; callers get read accessors.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Store-scoped task identifier.
///
/// Allocated from a monotonic counter, so two tasks created in the same
/// clock tick still get distinct ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    /// Wraps a raw id value, e.g. one received back from the UI layer.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw id value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One todo item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    text: String,
    done: bool,
    /// Unix epoch milliseconds. Display only.
    created_at: i64,
}

impl Task {
    /// Creates an open task.
    ///
    /// # Invariants
    /// - `done` starts as `false`.
    /// - `text` is stored as given; callers validate before reaching here.
    pub fn new(id: TaskId, text: impl Into<String>, created_at: i64) -> Self {
        Self {
            id,
            text: text.into(),
            done: false,
            created_at,
        }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn created_at(&self) -> i64 {
        self.created_at
    }

    /// Flips completion and returns the new value.
    pub(crate) fn toggle(&mut self) -> bool {
        self.done = !self.done;
        self.done
    }

    pub(crate) fn set_done(&mut self, done: bool) {
        self.done = done;
    }
}

#[cfg(test)]
mod tests {
    use super::{Task, TaskId};

    #[test]
    fn new_task_starts_open() {
        let task = Task::new(TaskId::new(7), "Buy milk", 1_700_000_000_000);
        assert_eq!(task.id().get(), 7);
        assert_eq!(task.text(), "Buy milk");
        assert!(!task.is_done());
        assert_eq!(task.created_at(), 1_700_000_000_000);
    }

    #[test]
    fn toggle_flips_only_done() {
        let mut task = Task::new(TaskId::new(1), "x", 5);
        assert!(task.toggle());
        assert!(!task.toggle());
        assert_eq!(task.text(), "x");
        assert_eq!(task.created_at(), 5);
    }
}
