//! In-memory task store with synchronous change listeners.
//!
//! # Responsibility
//! - Own the ordered task collection for one app session.
//! - Apply add/toggle/remove and notify every subscribed surface.
//!
//! # Invariants
//! - Collection order is insertion order; mutations never reorder tasks.
//! - Ids come from a per-store counter and are never reused.
//! - Listeners run after the collection is updated and before the
//!   mutating call returns. A no-op (unknown id) notifies nobody.
//! - Readers only get shared slices or owned copies of the collection.

use crate::config::{ConfigError, StoreConfig};
use crate::model::stats::TaskStats;
use crate::model::task::{Task, TaskId};
use crate::store::clock::{Clock, SystemClock};
use log::debug;
use std::fmt::{Debug, Formatter};

/// Change applied by one store mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskChange {
    Added(TaskId),
    Toggled { id: TaskId, done: bool },
    Removed(TaskId),
}

/// Handle returned by `TaskStore::subscribe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

/// Callback invoked with the applied change and the updated collection.
pub type TaskListener = Box<dyn FnMut(&TaskChange, &[Task]) + Send>;

/// Single source of truth for the task list.
pub struct TaskStore {
    tasks: Vec<Task>,
    next_task_id: u64,
    clock: Box<dyn Clock>,
    listeners: Vec<(SubscriptionId, TaskListener)>,
    next_subscription_id: u64,
}

impl TaskStore {
    /// Creates an empty store backed by the system clock.
    pub fn new() -> Self {
        Self::empty_with_clock(Box::new(SystemClock))
    }

    /// Creates a store and inserts the configured seed tasks.
    ///
    /// # Errors
    /// - Returns `ConfigError::InvalidSeedTask` when a seed entry would be
    ///   rejected by the creation screen.
    pub fn with_config(
        config: &StoreConfig,
        clock: impl Clock + 'static,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut store = Self::empty_with_clock(Box::new(clock));
        let created_at = store.clock.now_epoch_ms();
        for entry in &config.seed {
            let mut task = Task::new(store.allocate_id(), entry.text.trim(), created_at);
            task.set_done(entry.done);
            store.tasks.push(task);
        }
        debug!(
            "event=store_init module=store status=ok seeded={}",
            store.tasks.len()
        );
        Ok(store)
    }

    fn empty_with_clock(clock: Box<dyn Clock>) -> Self {
        Self {
            tasks: Vec::new(),
            next_task_id: 1,
            clock,
            listeners: Vec::new(),
            next_subscription_id: 1,
        }
    }

    /// Appends a new open task and returns its id.
    ///
    /// The caller validates `text` first (see `validate_task_text`); the
    /// store accepts it as given.
    pub fn add(&mut self, text: impl Into<String>) -> TaskId {
        let id = self.allocate_id();
        let task = Task::new(id, text, self.clock.now_epoch_ms());
        self.tasks.push(task);
        debug!(
            "event=task_add module=store status=ok id={} total={}",
            id,
            self.tasks.len()
        );
        self.notify(TaskChange::Added(id));
        id
    }

    /// Flips `done` for the matching task.
    ///
    /// Returns `false` without notifying when no task has `id`.
    pub fn toggle(&mut self, id: TaskId) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id() == id) else {
            debug!("event=task_toggle module=store status=noop id={id}");
            return false;
        };
        let done = task.toggle();
        debug!("event=task_toggle module=store status=ok id={id} done={done}");
        self.notify(TaskChange::Toggled { id, done });
        true
    }

    /// Removes the matching task, keeping the order of the rest.
    ///
    /// Returns `false` without notifying when no task has `id`.
    pub fn remove(&mut self, id: TaskId) -> bool {
        let Some(index) = self.tasks.iter().position(|task| task.id() == id) else {
            debug!("event=task_remove module=store status=noop id={id}");
            return false;
        };
        self.tasks.remove(index);
        debug!(
            "event=task_remove module=store status=ok id={} total={}",
            id,
            self.tasks.len()
        );
        self.notify(TaskChange::Removed(id));
        true
    }

    /// Returns an owned copy of the collection in insertion order.
    pub fn snapshot(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    /// Borrowed read-only view of the collection.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Header counters for the current collection.
    pub fn stats(&self) -> TaskStats {
        TaskStats::from_tasks(&self.tasks)
    }

    /// Registers a listener called after every effective mutation.
    ///
    /// Listeners run in subscription order.
    pub fn subscribe(
        &mut self,
        listener: impl FnMut(&TaskChange, &[Task]) + Send + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription_id);
        self.next_subscription_id += 1;
        self.listeners.push((id, Box::new(listener)));
        debug!(
            "event=store_subscribe module=store status=ok listeners={}",
            self.listeners.len()
        );
        id
    }

    /// Drops a listener. Returns `false` when it was already gone.
    pub fn unsubscribe(&mut self, subscription: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(id, _)| *id != subscription);
        self.listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn allocate_id(&mut self) -> TaskId {
        let id = TaskId::new(self.next_task_id);
        self.next_task_id += 1;
        id
    }

    fn notify(&mut self, change: TaskChange) {
        let tasks = &self.tasks;
        for (_, listener) in &mut self.listeners {
            listener(&change, tasks);
        }
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for TaskStore {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskStore")
            .field("tasks", &self.tasks)
            .field("next_task_id", &self.next_task_id)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{TaskChange, TaskStore};
    use crate::config::{SeedTask, StoreConfig};
    use crate::model::task::TaskId;
    use crate::store::clock::FixedClock;
    use std::sync::{Arc, Mutex};

    #[test]
    fn ids_are_not_reused_after_removal() {
        let mut store = TaskStore::new();
        let first = store.add("a");
        assert!(store.remove(first));
        let second = store.add("b");
        assert_ne!(first, second);
        assert!(second > first);
    }

    #[test]
    fn seed_continues_id_counter() {
        let config = StoreConfig {
            seed: vec![SeedTask::new(" one ", true), SeedTask::new("two", false)],
        };
        let mut store = TaskStore::with_config(&config, FixedClock(42)).expect("valid seed");
        assert_eq!(store.tasks()[0].text(), "one");
        assert!(store.tasks()[0].is_done());
        assert_eq!(store.tasks()[1].created_at(), 42);

        let added = store.add("three");
        assert_eq!(added, TaskId::new(3));
    }

    #[test]
    fn listeners_see_updated_collection_in_subscription_order() {
        let mut store = TaskStore::new();
        let calls = Arc::new(Mutex::new(Vec::new()));

        let first = Arc::clone(&calls);
        store.subscribe(move |change, tasks| {
            first.lock().unwrap().push(("first", *change, tasks.len()));
        });
        let second = Arc::clone(&calls);
        store.subscribe(move |change, tasks| {
            second.lock().unwrap().push(("second", *change, tasks.len()));
        });

        let id = store.add("x");
        let calls = calls.lock().unwrap();
        assert_eq!(
            *calls,
            vec![
                ("first", TaskChange::Added(id), 1),
                ("second", TaskChange::Added(id), 1),
            ]
        );
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let mut store = TaskStore::new();
        let count = Arc::new(Mutex::new(0usize));
        let counter = Arc::clone(&count);
        let subscription = store.subscribe(move |_, _| *counter.lock().unwrap() += 1);

        store.add("a");
        assert!(store.unsubscribe(subscription));
        assert!(!store.unsubscribe(subscription));
        store.add("b");

        assert_eq!(*count.lock().unwrap(), 1);
        assert_eq!(store.listener_count(), 0);
    }

    #[test]
    fn noop_mutations_do_not_notify() {
        let mut store = TaskStore::new();
        store.add("a");
        let count = Arc::new(Mutex::new(0usize));
        let counter = Arc::clone(&count);
        store.subscribe(move |_, _| *counter.lock().unwrap() += 1);

        assert!(!store.toggle(TaskId::new(99)));
        assert!(!store.remove(TaskId::new(99)));
        assert_eq!(*count.lock().unwrap(), 0);
    }

    #[test]
    fn snapshot_is_detached_from_store() {
        let mut store = TaskStore::new();
        let id = store.add("a");
        let mut copy = store.snapshot();
        copy.clear();
        assert_eq!(store.len(), 1);
        assert!(store.get(id).is_some());
    }
}
