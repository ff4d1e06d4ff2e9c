//! Task text validation for the creation screen.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Maximum task text length, counted in chars after trimming.
pub const MAX_TASK_TEXT_CHARS: usize = 100;

/// Rejection reasons for new task text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskTextError {
    /// Nothing left after trimming.
    Empty,
    /// Trimmed text is longer than `MAX_TASK_TEXT_CHARS`.
    TooLong { chars: usize, max: usize },
}

impl TaskTextError {
    /// Dialog title shown to the user.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Empty => "Empty Task",
            Self::TooLong { .. } => "Task Too Long",
        }
    }

    /// Dialog body shown to the user.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Empty => "Please enter a task description.",
            Self::TooLong { .. } => "Please keep your task under 100 characters.",
        }
    }
}

impl Display for TaskTextError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "task text is empty"),
            Self::TooLong { chars, max } => {
                write!(f, "task text has {chars} chars; limit is {max}")
            }
        }
    }
}

impl Error for TaskTextError {}

/// Trims and validates raw task text.
///
/// Returns the trimmed text ready for `TaskStore::add`.
///
/// # Errors
/// - `TaskTextError::Empty` when the trimmed text is empty.
/// - `TaskTextError::TooLong` when the trimmed text exceeds 100 chars.
pub fn validate_task_text(raw: &str) -> Result<String, TaskTextError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TaskTextError::Empty);
    }
    let chars = trimmed.chars().count();
    if chars > MAX_TASK_TEXT_CHARS {
        return Err(TaskTextError::TooLong {
            chars,
            max: MAX_TASK_TEXT_CHARS,
        });
    }
    Ok(trimmed.to_string())
}
