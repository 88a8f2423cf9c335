//! Task Types
//!
//! A single todo item. The persisted shape is only `{title, completed}`;
//! the id lives for the page session and is reassigned on every load.

use serde::Deserialize;

/// Runtime task identifier (never persisted)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(pub u32);

impl TaskId {
    /// Returns this id and advances `self` to the next one
    pub fn bump(&mut self) -> TaskId {
        let current = *self;
        self.0 += 1;
        current
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TaskId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(TaskId)
    }
}

/// A todo item as held in memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Session-scoped identifier
    pub id: TaskId,
    /// Display text
    pub title: String,
    /// Completion status
    pub completed: bool,
}

impl Task {
    /// Create a new, incomplete task
    pub fn new(id: TaskId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            completed: false,
        }
    }

    /// Rebuild a task from its persisted record
    pub fn from_record(id: TaskId, record: TaskRecord) -> Self {
        Self {
            id,
            title: record.title,
            completed: record.completed,
        }
    }

    /// Persisted view of this task
    pub fn record(&self) -> TaskRecord {
        TaskRecord {
            title: self.title.clone(),
            completed: self.completed,
        }
    }

    /// Field-wise equality ignoring the runtime id
    pub fn same_record(&self, other: &Task) -> bool {
        self.title == other.title && self.completed == other.completed
    }
}

/// Persisted task layout. Field order is part of the storage format.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaskRecord {
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

impl TaskRecord {
    pub fn new(title: impl Into<String>, completed: bool) -> Self {
        Self {
            title: title.into(),
            completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_creation() {
        let task = Task::new(TaskId(1), "Test task");
        assert_eq!(task.id, TaskId(1));
        assert_eq!(task.title, "Test task");
        assert!(!task.completed);
    }

    #[test]
    fn test_id_bump() {
        let mut next = TaskId(0);
        assert_eq!(next.bump(), TaskId(0));
        assert_eq!(next.bump(), TaskId(1));
        assert_eq!(next, TaskId(2));
    }

    #[test]
    fn test_same_record_ignores_id() {
        let a = Task::new(TaskId(1), "same");
        let b = Task::new(TaskId(9), "same");
        assert!(a.same_record(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn test_id_parse() {
        assert_eq!("42".parse::<TaskId>(), Ok(TaskId(42)));
        assert!("x".parse::<TaskId>().is_err());
    }
}
