//! Test helpers and utilities shared across test modules.

use std::sync::{Arc, Mutex};

use crate::bus::{BusEvent, EventBus};
use crate::store::{Task, TaskSeed, TaskStore};

mod store;

/// Store wired to a fresh bus, seeded with the built-in starter lists.
pub fn seeded_store() -> (Arc<EventBus>, TaskStore) {
    let bus = Arc::new(EventBus::new());
    let store = TaskStore::new(Arc::clone(&bus), TaskSeed::default());
    (bus, store)
}

/// Record every delivery of `event_type` into a shared log.
///
/// The registration is left in place for the life of the bus; tests observe
/// through the returned log.
pub fn record_events(bus: &EventBus, event_type: &str) -> Arc<Mutex<Vec<BusEvent>>> {
    let log = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);
    bus.subscribe(event_type, move |event| {
        sink.lock().unwrap().push(event.clone());
    });
    log
}

/// The task names of a snapshot, in order.
pub fn names(tasks: &[Task]) -> Vec<String> {
    tasks.iter().map(|task| task.name.clone()).collect()
}
