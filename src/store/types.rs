//! Task data types and the store's error taxonomy.

use serde::{Deserialize, Serialize};

/// Stable identity assigned to a task when it is admitted to the store.
///
/// The id survives status moves; only a task's position within its list is
/// transient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TaskId(pub(crate) u64);

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named unit of work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Completed,
    Incomplete,
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Completed => "completed",
            Self::Incomplete => "incomplete",
        };
        f.write_str(s)
    }
}

impl std::str::FromStr for TaskStatus {
    type Err = StoreError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "completed" => Ok(Self::Completed),
            "incomplete" => Ok(Self::Incomplete),
            _ => Err(StoreError::UnknownStatus(s.to_string())),
        }
    }
}

/// Initial contents for a new store instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskSeed {
    pub completed: Vec<String>,
    pub incomplete: Vec<String>,
}

impl TaskSeed {
    pub fn empty() -> Self {
        Self {
            completed: Vec::new(),
            incomplete: Vec::new(),
        }
    }
}

impl Default for TaskSeed {
    /// The built-in starter lists the application boots with.
    fn default() -> Self {
        Self {
            completed: vec!["code".to_string(), "sleep".to_string(), "eat".to_string()],
            incomplete: vec![
                "waste time".to_string(),
                "trouble neighbour".to_string(),
                "blow up house".to_string(),
            ],
        }
    }
}

/// Errors surfaced by store operations and the command boundary.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("position of task should be a number, got '{raw}'")]
    InvalidIndexType { raw: String },
    #[error("no task at position {index} in the {status} list (len {len})")]
    IndexOutOfRange {
        index: usize,
        len: usize,
        status: TaskStatus,
    },
    #[error("unknown task status: {0}")]
    UnknownStatus(String),
}
