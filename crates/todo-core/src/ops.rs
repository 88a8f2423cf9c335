//! List Operations
//!
//! Pure functions over a task slice. Both front-end variants mutate their
//! task list only through these, so the policies below are shared.

use crate::domain::{DomainError, DomainResult, EditSession, Task, TaskId, TaskRecord, VisibilityFilter};

/// Derived values recomputed after every mutation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub remaining: usize,
    pub completed: usize,
}

impl Summary {
    /// True when the list is non-empty and nothing is left to do
    pub fn all_completed(&self) -> bool {
        self.total > 0 && self.remaining == 0
    }
}

pub fn summarize(tasks: &[Task]) -> Summary {
    let remaining = remaining_count(tasks);
    Summary {
        total: tasks.len(),
        remaining,
        completed: tasks.len() - remaining,
    }
}

pub fn remaining_count(tasks: &[Task]) -> usize {
    tasks.iter().filter(|t| !t.completed).count()
}

/// Tasks shown under `filter`, in list order
pub fn visible(tasks: &[Task], filter: VisibilityFilter) -> Vec<Task> {
    tasks.iter().filter(|t| filter.matches(t)).cloned().collect()
}

/// Tasks for persisted records with ids assigned in order, plus the next free id
pub fn tasks_from_records(records: Vec<TaskRecord>) -> (Vec<Task>, TaskId) {
    let mut next_id = TaskId::default();
    let tasks = records
        .into_iter()
        .map(|record| Task::from_record(next_id.bump(), record))
        .collect();
    (tasks, next_id)
}

/// Append a new incomplete task, returning its id
pub fn add(tasks: &mut Vec<Task>, next_id: &mut TaskId, title: &str) -> TaskId {
    let id = next_id.bump();
    tasks.push(Task::new(id, title));
    id
}

pub fn toggle(tasks: &mut [Task], id: TaskId) -> DomainResult<bool> {
    let task = find_mut(tasks, id)?;
    task.completed = !task.completed;
    Ok(task.completed)
}

pub fn remove(tasks: &mut Vec<Task>, id: TaskId) -> DomainResult<Task> {
    let index = tasks
        .iter()
        .position(|t| t.id == id)
        .ok_or_else(|| not_found(id))?;
    Ok(tasks.remove(index))
}

/// Uncomplete everything only when everything is complete; otherwise complete everything.
pub fn toggle_all(tasks: &mut [Task]) {
    let all_completed = tasks.iter().all(|t| t.completed);
    for task in tasks.iter_mut() {
        task.completed = !all_completed;
    }
}

/// Remove completed tasks, returning how many were dropped
pub fn clear_completed(tasks: &mut Vec<Task>) -> usize {
    let before = tasks.len();
    tasks.retain(|t| !t.completed);
    before - tasks.len()
}

/// End the edit session if its task is no longer in the list. Returns true if it ended.
pub fn end_orphaned_edit(tasks: &[Task], editing: &mut Option<EditSession>) -> bool {
    let orphaned = editing
        .as_ref()
        .is_some_and(|session| find(tasks, session.task_id).is_err());
    if orphaned {
        *editing = None;
    }
    orphaned
}

/// Write the draft into its task and leave edit mode.
/// Returns false when there was no session to commit.
pub fn commit_edit(tasks: &mut [Task], editing: &mut Option<EditSession>) -> DomainResult<bool> {
    match editing.take() {
        Some(session) => session.apply(tasks).map(|()| true),
        None => Ok(false),
    }
}

pub fn find(tasks: &[Task], id: TaskId) -> DomainResult<&Task> {
    tasks.iter().find(|t| t.id == id).ok_or_else(|| not_found(id))
}

fn find_mut(tasks: &mut [Task], id: TaskId) -> DomainResult<&mut Task> {
    tasks.iter_mut().find(|t| t.id == id).ok_or_else(|| not_found(id))
}

fn not_found(id: TaskId) -> DomainError {
    DomainError::NotFound(format!("task {}", id))
}
