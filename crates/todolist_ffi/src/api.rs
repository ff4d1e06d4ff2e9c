//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose task list and creation screen use-cases to Dart via FRB.
//! - Return render envelopes so the UI redraws from each call's output.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - One `TaskSession` is created by the host per app session and passed to
//!   every screen; there is no process-wide store.

use flutter_rust_bridge::frb;
use log::warn;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use todolist_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    validate_task_text, CancelOutcome, StoreConfig, SystemClock, Task, TaskDraft, TaskId,
    TaskStats, TaskStore, QUICK_SUGGESTIONS,
};

const EMPTY_STATE_TITLE: &str = "No tasks yet";
const EMPTY_STATE_DESCRIPTION: &str = "Add your first task to get started!";

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Suggestion chips shown on the creation screen.
#[frb(sync)]
pub fn quick_suggestions() -> Vec<String> {
    QUICK_SUGGESTIONS.iter().map(|value| value.to_string()).collect()
}

/// One row of the task list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskItem {
    pub id: u64,
    pub text: String,
    pub done: bool,
    /// Unix epoch milliseconds.
    pub created_at_ms: i64,
}

/// Everything the list screen needs for one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskListView {
    /// Tasks in insertion order.
    pub items: Vec<TaskItem>,
    pub total: u32,
    pub completed: u32,
    pub percent_complete: u8,
    /// Header line, e.g. `1 of 3 completed`.
    pub summary: String,
    /// Set only when `items` is empty.
    pub empty_state: Option<EmptyState>,
    /// Bumped by every effective store mutation.
    pub revision: u64,
}

/// Copy shown when the list has no tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub title: String,
    pub description: String,
}

/// Live state of the creation screen input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftStatus {
    /// Input after the field's length cap.
    pub text: String,
    /// Counter label, e.g. `12/100`.
    pub counter: String,
    pub near_limit: bool,
    pub can_submit: bool,
}

/// Result of a create attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskActionResponse {
    pub ok: bool,
    pub task_id: Option<u64>,
    /// Dialog title on rejection; empty on success.
    pub title: String,
    pub message: String,
    pub view: TaskListView,
}

/// Session handle owning the task store.
#[frb(opaque)]
pub struct TaskSession {
    store: Mutex<TaskStore>,
    revision: Arc<AtomicU64>,
}

impl TaskSession {
    /// Builds a fully seeded session.
    ///
    /// `seed_mode` is `demo` or `empty`; blank falls back to `TODOLIST_SEED`,
    /// then `demo`.
    ///
    /// # FFI contract
    /// - Returns an error message for unknown seed modes; never panics.
    #[frb(sync)]
    pub fn new(seed_mode: String) -> Result<TaskSession, String> {
        let config = if seed_mode.trim().is_empty() {
            StoreConfig::from_env()
        } else {
            StoreConfig::from_seed_mode(&seed_mode)
        }
        .map_err(|err| err.to_string())?;

        let mut store =
            TaskStore::with_config(&config, SystemClock).map_err(|err| err.to_string())?;
        let revision = Arc::new(AtomicU64::new(0));
        let counter = Arc::clone(&revision);
        store.subscribe(move |_, _| {
            counter.fetch_add(1, Ordering::Relaxed);
        });

        Ok(Self {
            store: Mutex::new(store),
            revision,
        })
    }

    /// Current list render.
    #[frb(sync)]
    pub fn list_view(&self) -> TaskListView {
        let store = self.lock_store();
        self.render(&store)
    }

    /// Checkbox tap. Unknown ids leave the list unchanged.
    #[frb(sync)]
    pub fn toggle_task(&self, id: u64) -> TaskListView {
        let mut store = self.lock_store();
        store.toggle(TaskId::new(id));
        self.render(&store)
    }

    /// Delete tap. Unknown ids leave the list unchanged.
    #[frb(sync)]
    pub fn remove_task(&self, id: u64) -> TaskListView {
        let mut store = self.lock_store();
        store.remove(TaskId::new(id));
        self.render(&store)
    }

    /// Create button. Validates `text` and appends it on success.
    ///
    /// # FFI contract
    /// - Rejections return `ok=false` with dialog title and message; the
    ///   list is untouched.
    #[frb(sync)]
    pub fn create_task(&self, text: String) -> TaskActionResponse {
        let mut store = self.lock_store();
        let outcome = validate_task_text(&text).map(|trimmed| store.add(trimmed));

        match outcome {
            Ok(task_id) => TaskActionResponse {
                ok: true,
                task_id: Some(task_id.get()),
                title: String::new(),
                message: "Task created.".to_string(),
                view: self.render(&store),
            },
            Err(err) => TaskActionResponse {
                ok: false,
                task_id: None,
                title: err.title().to_string(),
                message: err.message().to_string(),
                view: self.render(&store),
            },
        }
    }

    fn lock_store(&self) -> MutexGuard<'_, TaskStore> {
        match self.store.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                warn!("event=store_lock module=ffi status=recovered reason=poisoned");
                poisoned.into_inner()
            }
        }
    }

    fn render(&self, store: &TaskStore) -> TaskListView {
        to_list_view(
            store.tasks(),
            store.stats(),
            self.revision.load(Ordering::Relaxed),
        )
    }
}

/// Live counter/button state for the creation screen input.
#[frb(sync)]
pub fn draft_status(text: String) -> DraftStatus {
    let mut draft = TaskDraft::new();
    draft.set_text(&text);
    DraftStatus {
        counter: draft.char_counter(),
        near_limit: draft.is_near_limit(),
        can_submit: draft.can_submit(),
        text: draft.text().to_string(),
    }
}

/// Cancel tap. Returns `close` or `confirm_discard`.
#[frb(sync)]
pub fn draft_cancel(text: String) -> String {
    let mut draft = TaskDraft::new();
    draft.set_text(&text);
    match draft.cancel() {
        CancelOutcome::Close => "close".to_string(),
        CancelOutcome::ConfirmDiscard => "confirm_discard".to_string(),
    }
}

fn to_list_view(tasks: &[Task], stats: TaskStats, revision: u64) -> TaskListView {
    let items = tasks.iter().map(to_task_item).collect::<Vec<_>>();
    let empty_state = stats.is_empty().then(|| EmptyState {
        title: EMPTY_STATE_TITLE.to_string(),
        description: EMPTY_STATE_DESCRIPTION.to_string(),
    });
    TaskListView {
        items,
        total: stats.total as u32,
        completed: stats.completed as u32,
        percent_complete: stats.percent_complete,
        summary: stats.summary(),
        empty_state,
        revision,
    }
}

fn to_task_item(task: &Task) -> TaskItem {
    TaskItem {
        id: task.id().get(),
        text: task.text().to_string(),
        done: task.is_done(),
        created_at_ms: task.created_at(),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        core_version, draft_cancel, draft_status, init_logging, ping, quick_suggestions,
        TaskSession,
    };

    fn demo_session() -> TaskSession {
        TaskSession::new("demo".to_string()).expect("demo session")
    }

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn session_rejects_unknown_seed_mode() {
        let error = TaskSession::new("bogus".to_string())
            .err()
            .expect("unknown seed mode should fail");
        assert!(error.contains("bogus"));
    }

    #[test]
    fn demo_session_renders_header_counters() {
        let view = demo_session().list_view();
        assert_eq!(view.total, 3);
        assert_eq!(view.completed, 1);
        assert_eq!(view.percent_complete, 33);
        assert_eq!(view.summary, "1 of 3 completed");
        assert!(view.empty_state.is_none());
        assert_eq!(view.revision, 0);
    }

    #[test]
    fn empty_session_renders_empty_state() {
        let session = TaskSession::new("empty".to_string()).expect("empty session");
        let view = session.list_view();
        assert!(view.items.is_empty());
        assert_eq!(view.percent_complete, 0);
        let empty = view.empty_state.expect("empty state copy");
        assert_eq!(empty.title, "No tasks yet");
    }

    #[test]
    fn toggle_and_remove_return_updated_view() {
        let session = demo_session();
        let second_id = session.list_view().items[1].id;

        let toggled = session.toggle_task(second_id);
        assert!(toggled.items[1].done);
        assert_eq!(toggled.completed, 2);
        assert_eq!(toggled.percent_complete, 67);
        assert_eq!(toggled.revision, 1);

        let removed = session.remove_task(second_id);
        assert_eq!(removed.total, 2);
        assert!(removed.items.iter().all(|item| item.id != second_id));
        assert_eq!(removed.revision, 2);

        let unchanged = session.remove_task(second_id);
        assert_eq!(unchanged, removed);
    }

    #[test]
    fn create_task_trims_and_appends() {
        let session = demo_session();
        let response = session.create_task("  Call family  ".to_string());
        assert!(response.ok, "{}", response.message);
        let last = response.view.items.last().expect("new task row");
        assert_eq!(Some(last.id), response.task_id);
        assert_eq!(last.text, "Call family");
        assert!(!last.done);
    }

    #[test]
    fn create_task_rejects_blank_and_overlong_text() {
        let session = demo_session();

        let blank = session.create_task("   ".to_string());
        assert!(!blank.ok);
        assert_eq!(blank.title, "Empty Task");
        assert_eq!(blank.view.total, 3);

        let overlong = session.create_task("x".repeat(101));
        assert!(!overlong.ok);
        assert_eq!(overlong.title, "Task Too Long");
        assert_eq!(overlong.view.total, 3);
        assert_eq!(overlong.view.revision, 0);
    }

    #[test]
    fn draft_helpers_mirror_creation_screen() {
        let status = draft_status("x".repeat(85));
        assert_eq!(status.counter, "85/100");
        assert!(status.near_limit);
        assert!(status.can_submit);

        assert_eq!(draft_cancel("  ".to_string()), "close");
        assert_eq!(draft_cancel("Read".to_string()), "confirm_discard");
        assert_eq!(quick_suggestions().len(), 4);
    }
}
