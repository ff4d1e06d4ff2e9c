//! Core domain logic for the todo list app.
//! This crate is the single source of truth for task state and input rules.

pub mod config;
pub mod input;
pub mod logging;
pub mod model;
pub mod store;

pub use config::{ConfigError, SeedTask, StoreConfig};
pub use input::{
    validate_task_text, CancelOutcome, TaskDraft, TaskTextError, MAX_TASK_TEXT_CHARS,
    QUICK_SUGGESTIONS,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::stats::{percent_complete, TaskStats};
pub use model::task::{Task, TaskId};
pub use store::clock::{Clock, FixedClock, SystemClock};
pub use store::task_store::{SubscriptionId, TaskChange, TaskListener, TaskStore};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
