//! Task domain model and derived projections.
//!
//! # Responsibility
//! - Define the task record shared by the list and creation screens.
//! - Compute header counters from a snapshot without storing them.
//!
//! # Invariants
//! - Every task is identified by a store-scoped `TaskId`.
//! - Deletion is a hard delete; there are no tombstones.

pub mod stats;
pub mod task;
