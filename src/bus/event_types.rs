//! Event name constants.
//!
//! Single source of truth for the names mutations publish and views
//! subscribe to.

// ---------------------------------------------------------------------------
// Task mutation events
// ---------------------------------------------------------------------------

pub const ADD_TASK: &str = "addTask";
pub const MARK_TASK_COMPLETED: &str = "markTaskCompleted";
/// Historical wire name; the capital C is preserved so existing subscribers
/// keep matching.
pub const MARK_TASK_INCOMPLETE: &str = "markTaskInComplete";
pub const REMOVE_TASK: &str = "removeTask";
