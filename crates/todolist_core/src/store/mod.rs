//! Session-scoped task state.
//!
//! # Responsibility
//! - Hold the task collection for the lifetime of one app session.
//! - Broadcast every effective mutation to subscribed rendering surfaces.
//!
//! # Invariants
//! - State is process-local and never persisted.
//! - The store is constructed explicitly and passed to each surface; there
//!   is no global instance.

pub mod clock;
pub mod task_store;
