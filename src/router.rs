//! Event Router
//!
//! Turns page events into task list mutations. Rows are addressed by
//! `TaskId` and resolved to a position just before the mutation.

use crate::config::TodoConfig;
use crate::error::ValidationError;
use crate::models::TaskId;
use crate::task_list::TaskList;
use crate::validation::validate_task_text;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Add(String),
    Toggle { id: TaskId, done: bool },
    Delete(TaskId),
}

/// Toast messages shown after a successful action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Added,
    Saved,
}

impl Notice {
    pub fn message(self) -> &'static str {
        match self {
            Notice::Added => "Added",
            Notice::Saved => "Saved",
        }
    }
}

/// What a dispatched action did. Unchanged lists are neither saved nor announced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dispatched {
    pub changed: bool,
    pub notice: Option<Notice>,
}

impl Dispatched {
    fn changed(notice: Notice) -> Self {
        Self { changed: true, notice: Some(notice) }
    }

    fn unchanged() -> Self {
        Self { changed: false, notice: None }
    }
}

pub fn dispatch(
    tasks: &mut TaskList,
    action: Action,
    config: &TodoConfig,
) -> Result<Dispatched, ValidationError> {
    match action {
        Action::Add(raw) => {
            let text = validate_task_text(&raw, config.min_task_chars)?;
            let id = tasks.add(text);
            log::debug!("added task {:?}", id);
            Ok(Dispatched::changed(Notice::Added))
        }
        Action::Toggle { id, done } => match tasks.position(id) {
            Some(index) => {
                tasks.toggle(index, done);
                Ok(Dispatched::changed(Notice::Saved))
            }
            None => {
                log::warn!("toggle for unknown task {:?}", id);
                Ok(Dispatched::unchanged())
            }
        },
        Action::Delete(id) => match tasks.position(id).and_then(|index| tasks.remove(index)) {
            Some(_) => Ok(Dispatched::changed(Notice::Saved)),
            None => {
                log::warn!("delete for unknown task {:?}", id);
                Ok(Dispatched::unchanged())
            }
        },
    }
}
