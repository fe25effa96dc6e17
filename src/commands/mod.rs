//! UI-action entry points.
//!
//! The analog of button handlers: raw text from the front end is parsed
//! here and dispatched to the store. Refresh is driven entirely by the
//! events the store publishes, never by these functions directly.

mod tasks;

pub use tasks::{add_task, mark_task_completed, mark_task_incomplete, remove_task};
