//! Store configuration and initial seed data.
//!
//! # Responsibility
//! - Describe the tasks a fresh session starts with.
//! - Parse the seed mode string supplied by the host app or environment.
//!
//! # Invariants
//! - A store is fully seeded before any surface can subscribe to it.
//! - Seed text goes through the same validation as user input.

use crate::input::{validate_task_text, TaskTextError};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Environment variable consulted when the host passes no seed mode.
pub const SEED_MODE_ENV: &str = "TODOLIST_SEED";

/// Seed mode value that reproduces the demo list.
pub const SEED_MODE_DEMO: &str = "demo";
/// Seed mode value that starts with an empty list.
pub const SEED_MODE_EMPTY: &str = "empty";

/// One task to insert at session start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedTask {
    pub text: String,
    pub done: bool,
}

impl SeedTask {
    pub fn new(text: impl Into<String>, done: bool) -> Self {
        Self {
            text: text.into(),
            done,
        }
    }
}

/// Initial data for a task store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreConfig {
    /// Inserted in order; ids are allocated from the store counter.
    pub seed: Vec<SeedTask>,
}

impl StoreConfig {
    /// Empty list on first launch.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Three example tasks so the list is non-empty on first launch.
    pub fn demo() -> Self {
        Self {
            seed: vec![
                SeedTask::new("Morning workout", true),
                SeedTask::new("Read a book", false),
                SeedTask::new("Buy groceries", false),
            ],
        }
    }

    /// Resolves a seed mode string (`demo` or `empty`, case-insensitive).
    ///
    /// # Errors
    /// - Returns `ConfigError::UnknownSeedMode` for any other value.
    pub fn from_seed_mode(mode: &str) -> Result<Self, ConfigError> {
        match mode.trim().to_ascii_lowercase().as_str() {
            SEED_MODE_DEMO => Ok(Self::demo()),
            SEED_MODE_EMPTY => Ok(Self::empty()),
            other => Err(ConfigError::UnknownSeedMode(other.to_string())),
        }
    }

    /// Resolves the seed mode from `TODOLIST_SEED`, defaulting to `demo`.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(SEED_MODE_ENV) {
            Ok(raw) if !raw.trim().is_empty() => Self::from_seed_mode(&raw),
            _ => Ok(Self::demo()),
        }
    }

    /// Checks every seed entry against the creation-input rules.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (index, entry) in self.seed.iter().enumerate() {
            validate_task_text(&entry.text)
                .map_err(|source| ConfigError::InvalidSeedTask { index, source })?;
        }
        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    UnknownSeedMode(String),
    InvalidSeedTask { index: usize, source: TaskTextError },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownSeedMode(value) => write!(
                f,
                "unsupported seed mode `{value}`; expected {SEED_MODE_DEMO}|{SEED_MODE_EMPTY}"
            ),
            Self::InvalidSeedTask { index, source } => {
                write!(f, "seed task #{index} is invalid: {source}")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidSeedTask { source, .. } => Some(source),
            Self::UnknownSeedMode(_) => None,
        }
    }
}
