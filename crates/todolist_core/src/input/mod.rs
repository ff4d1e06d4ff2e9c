//! Creation screen input handling.
//!
//! # Responsibility
//! - Validate new task text before it reaches the store.
//! - Model the pending draft, its counter, and the cancel/discard decision.

pub mod draft;
pub mod validation;

pub use draft::{CancelOutcome, TaskDraft, NEAR_LIMIT_CHARS, QUICK_SUGGESTIONS};
pub use validation::{validate_task_text, TaskTextError, MAX_TASK_TEXT_CHARS};
