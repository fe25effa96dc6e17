use std::str::FromStr;

use crate::store::{StoreError, TaskStatus, TaskStore};

/// Parse the position argument of a task action.
///
/// UI input arrives as text; anything that is not a plain non-negative
/// number is rejected before it reaches the store.
fn parse_index(raw: &str) -> Result<usize, StoreError> {
    raw.trim().parse::<usize>().map_err(|_| StoreError::InvalidIndexType {
        raw: raw.to_string(),
    })
}

pub fn add_task(store: &TaskStore, name: &str) {
    store.add_task(name);
}

pub fn mark_task_completed(store: &TaskStore, raw_index: &str) -> Result<(), StoreError> {
    store.mark_task_completed(parse_index(raw_index)?)
}

pub fn mark_task_incomplete(store: &TaskStore, raw_index: &str) -> Result<(), StoreError> {
    store.mark_task_incomplete(parse_index(raw_index)?)
}

pub fn remove_task(store: &TaskStore, raw_index: &str, raw_status: &str) -> Result<(), StoreError> {
    let index = parse_index(raw_index)?;
    let status = TaskStatus::from_str(raw_status.trim())?;
    store.remove_task(index, status)
}
