//! Progress counters derived from a task snapshot.
//!
//! Nothing here is stored; every value is recomputed from the slice handed in.

use crate::model::task::Task;
use serde::Serialize;

/// Header counters shown above the task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub remaining: usize,
    /// Rounded half-up; `0` when the list is empty.
    pub percent_complete: u8,
}

impl TaskStats {
    /// Computes counters for the given snapshot.
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let total = tasks.len();
        let completed = tasks.iter().filter(|task| task.is_done()).count();
        Self {
            total,
            completed,
            remaining: total - completed,
            percent_complete: percent_complete(completed, total),
        }
    }

    /// Header line, e.g. `2 of 3 completed`.
    pub fn summary(&self) -> String {
        format!("{} of {} completed", self.completed, self.total)
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// Returns `round(completed / total * 100)`, or `0` for an empty list.
pub fn percent_complete(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let completed = completed.min(total) as u64;
    let total = total as u64;
    // Integer half-up rounding of completed * 100 / total.
    ((completed * 200 + total) / (total * 2)) as u8
}
