//! Task Store
//!
//! Ordered in-memory task list, the single source of truth for the UI.
//! Mutations are positional; ids only map rendered rows back to positions.

use crate::models::{Counts, Task, TaskId, TaskRecord};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskList {
    tasks: Vec<Task>,
    next_id: u64,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from persisted records, assigning fresh ids
    pub fn from_records(records: Vec<TaskRecord>) -> Self {
        let mut list = Self::new();
        for record in records {
            let id = list.allocate_id();
            list.tasks.push(Task {
                id,
                text: record.text,
                done: record.done,
            });
        }
        list
    }

    pub fn to_records(&self) -> Vec<TaskRecord> {
        self.tasks.iter().map(TaskRecord::from).collect()
    }

    /// Append a not-done task. Text is expected to be validated already.
    pub fn add(&mut self, text: impl Into<String>) -> TaskId {
        let id = self.allocate_id();
        self.tasks.push(Task {
            id,
            text: text.into(),
            done: false,
        });
        id
    }

    /// Set the done flag at `index`. Out of range is a no-op.
    pub fn toggle(&mut self, index: usize, value: bool) -> bool {
        match self.tasks.get_mut(index) {
            Some(task) => {
                task.done = value;
                true
            }
            None => false,
        }
    }

    /// Remove the task at `index`, shifting later tasks down. Out of range is a no-op.
    pub fn remove(&mut self, index: usize) -> Option<Task> {
        if index < self.tasks.len() {
            Some(self.tasks.remove(index))
        } else {
            None
        }
    }

    pub fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    #[cfg(test)]
    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn counts(&self) -> Counts {
        Counts {
            total: self.tasks.len(),
            done: self.tasks.iter().filter(|t| t.done).count(),
        }
    }

    fn allocate_id(&mut self) -> TaskId {
        self.next_id += 1;
        TaskId(self.next_id)
    }
}
