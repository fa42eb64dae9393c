//! Frontend Models
//!
//! Task data structures and the persisted record shape.

use serde::{Deserialize, Serialize};

/// Stable per-session task identifier, never persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(pub u64);

/// A task as held in memory
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub done: bool,
}

/// A task as stored under the persistence key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub text: String,
    pub done: bool,
}

impl From<&Task> for TaskRecord {
    fn from(task: &Task) -> Self {
        Self {
            text: task.text.clone(),
            done: task.done,
        }
    }
}

/// Counter values shown below the list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counts {
    pub total: usize,
    pub done: usize,
}
