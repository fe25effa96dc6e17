//! Authoritative task state and its mutation operations.
//!
//! This module provides:
//! - `TaskStore`: owner of the completed and incomplete task sequences
//! - `Task` / `TaskStatus` / `TaskSeed` data types
//! - `StoreError`: the store's error taxonomy
//!
//! Every mutation updates state first and publishes its event second, so a
//! subscriber that re-queries the store always observes the post-mutation
//! sequences.

mod types;

pub use types::{StoreError, Task, TaskId, TaskSeed, TaskStatus};

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::bus::{event_types, EventBus};

#[derive(Debug, Default)]
struct TaskState {
    completed: Vec<Task>,
    incomplete: Vec<Task>,
}

pub struct TaskStore {
    state: Mutex<TaskState>,
    next_id: AtomicU64,
    bus: Arc<EventBus>,
}

impl TaskStore {
    /// Build a store over `bus`, pre-populated from `seed`.
    ///
    /// Seeding admits tasks directly; no events are published for them.
    pub fn new(bus: Arc<EventBus>, seed: TaskSeed) -> Self {
        let store = Self {
            state: Mutex::new(TaskState::default()),
            next_id: AtomicU64::new(0),
            bus,
        };
        {
            let mut state = store.state();
            state.completed = seed.completed.into_iter().map(|name| store.admit(name)).collect();
            state.incomplete = seed.incomplete.into_iter().map(|name| store.admit(name)).collect();
        }
        store
    }

    /// Snapshot of the completed list, oldest first.
    ///
    /// The returned tasks are copies; mutating them never touches store
    /// state.
    pub fn completed_tasks(&self) -> Vec<Task> {
        self.state().completed.clone()
    }

    /// Snapshot of the incomplete list, oldest first.
    pub fn incomplete_tasks(&self) -> Vec<Task> {
        self.state().incomplete.clone()
    }

    /// Append a task to the end of the incomplete list and publish
    /// `addTask`.
    ///
    /// An empty name is ignored outright: nothing is stored and nothing is
    /// published.
    pub fn add_task(&self, name: impl Into<String>) {
        let name = name.into();
        if name.is_empty() {
            tracing::debug!("ignoring add of empty task name");
            return;
        }
        let task = self.admit(name);
        self.state().incomplete.push(task);
        self.bus.emit(event_types::ADD_TASK, serde_json::Value::Null);
    }

    /// Move the task at `index` in the incomplete list to the end of the
    /// completed list and publish `markTaskCompleted`.
    pub fn mark_task_completed(&self, index: usize) -> Result<(), StoreError> {
        {
            let mut state = self.state();
            let task = take_at(&mut state.incomplete, index, TaskStatus::Incomplete)?;
            state.completed.push(task);
        }
        self.bus
            .emit(event_types::MARK_TASK_COMPLETED, serde_json::Value::Null);
        Ok(())
    }

    /// Move the task at `index` in the completed list to the end of the
    /// incomplete list and publish `markTaskInComplete`.
    pub fn mark_task_incomplete(&self, index: usize) -> Result<(), StoreError> {
        {
            let mut state = self.state();
            let task = take_at(&mut state.completed, index, TaskStatus::Completed)?;
            state.incomplete.push(task);
        }
        self.bus
            .emit(event_types::MARK_TASK_INCOMPLETE, serde_json::Value::Null);
        Ok(())
    }

    /// Remove the task at `index` from the list named by `status` and
    /// publish `removeTask`.
    pub fn remove_task(&self, index: usize, status: TaskStatus) -> Result<(), StoreError> {
        {
            let mut state = self.state();
            let tasks = match status {
                TaskStatus::Completed => &mut state.completed,
                TaskStatus::Incomplete => &mut state.incomplete,
            };
            let task = take_at(tasks, index, status)?;
            tracing::debug!(name = %task.name, %status, "removed task");
        }
        self.bus.emit(event_types::REMOVE_TASK, serde_json::Value::Null);
        Ok(())
    }

    fn admit(&self, name: String) -> Task {
        let id = TaskId(self.next_id.fetch_add(1, Ordering::Relaxed));
        Task { id, name }
    }

    /// Acquire a lock on the task sequences. Never held across a publish.
    fn state(&self) -> MutexGuard<'_, TaskState> {
        self.state.lock().expect("task state mutex poisoned")
    }
}

fn take_at(tasks: &mut Vec<Task>, index: usize, status: TaskStatus) -> Result<Task, StoreError> {
    if index >= tasks.len() {
        return Err(StoreError::IndexOutOfRange {
            index,
            len: tasks.len(),
            status,
        });
    }
    Ok(tasks.remove(index))
}
