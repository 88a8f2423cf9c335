//! Edit Session
//!
//! At most one task is edited at a time; the session holds its id and a draft title.

use super::error::{DomainError, DomainResult};
use super::task::{Task, TaskId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub task_id: TaskId,
    pub draft: String,
}

impl EditSession {
    /// Start editing `task`, pre-filling the draft with its title
    pub fn begin(task: &Task) -> Self {
        Self {
            task_id: task.id,
            draft: task.title.clone(),
        }
    }

    /// Write the draft into the matching task
    pub fn apply(self, tasks: &mut [Task]) -> DomainResult<()> {
        let task = tasks
            .iter_mut()
            .find(|t| t.id == self.task_id)
            .ok_or_else(|| DomainError::NotFound(format!("task {}", self.task_id)))?;
        task.title = self.draft;
        Ok(())
    }
}
