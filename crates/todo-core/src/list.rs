//! Todo List State
//!
//! The full widget state: tasks, filter and edit session. Every operation is
//! a plain method call; derived values are read through `summary()` and
//! `visible()` which recompute from the current tasks.

use tracing::debug;

use crate::domain::{DomainResult, EditSession, Task, TaskId, TaskRecord, VisibilityFilter};
use crate::ops::{self, Summary};

/// Whether an operation changed the persisted task list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    Tasks,
    ViewOnly,
}

#[derive(Debug, Clone, Default)]
pub struct TodoList {
    tasks: Vec<Task>,
    next_id: TaskId,
    filter: VisibilityFilter,
    editing: Option<EditSession>,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from persisted records, assigning fresh ids in order
    pub fn from_records(records: Vec<TaskRecord>) -> Self {
        let (tasks, next_id) = ops::tasks_from_records(records);
        Self {
            tasks,
            next_id,
            ..Self::default()
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn records(&self) -> Vec<TaskRecord> {
        self.tasks.iter().map(Task::record).collect()
    }

    pub fn filter(&self) -> VisibilityFilter {
        self.filter
    }

    pub fn editing(&self) -> Option<&EditSession> {
        self.editing.as_ref()
    }

    pub fn is_editing(&self, id: TaskId) -> bool {
        self.editing.as_ref().is_some_and(|s| s.task_id == id)
    }

    pub fn summary(&self) -> Summary {
        ops::summarize(&self.tasks)
    }

    pub fn remaining_count(&self) -> usize {
        ops::remaining_count(&self.tasks)
    }

    pub fn visible(&self) -> Vec<Task> {
        ops::visible(&self.tasks, self.filter)
    }

    // ========================
    // Mutations
    // ========================

    pub fn add(&mut self, title: &str) -> TaskId {
        let id = ops::add(&mut self.tasks, &mut self.next_id, title);
        debug!(%id, title, "task added");
        id
    }

    pub fn toggle(&mut self, id: TaskId) -> DomainResult<Change> {
        let completed = ops::toggle(&mut self.tasks, id)?;
        debug!(%id, completed, "task toggled");
        Ok(Change::Tasks)
    }

    pub fn remove(&mut self, id: TaskId) -> DomainResult<Change> {
        ops::remove(&mut self.tasks, id)?;
        ops::end_orphaned_edit(&self.tasks, &mut self.editing);
        debug!(%id, "task removed");
        Ok(Change::Tasks)
    }

    /// Enter edit mode for `id`, replacing any other session
    pub fn begin_edit(&mut self, id: TaskId) -> DomainResult<Change> {
        let task = ops::find(&self.tasks, id)?;
        self.editing = Some(EditSession::begin(task));
        Ok(Change::ViewOnly)
    }

    pub fn set_draft(&mut self, draft: &str) {
        if let Some(session) = self.editing.as_mut() {
            session.draft = draft.to_string();
        }
    }

    /// Write the draft into its task. No session means nothing to commit.
    pub fn commit_edit(&mut self) -> DomainResult<Change> {
        let id = self.editing.as_ref().map(|s| s.task_id);
        if ops::commit_edit(&mut self.tasks, &mut self.editing)? {
            debug!(?id, "edit committed");
            Ok(Change::Tasks)
        } else {
            Ok(Change::ViewOnly)
        }
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    pub fn set_filter(&mut self, filter: VisibilityFilter) {
        self.filter = filter;
    }

    pub fn toggle_all(&mut self) -> Change {
        ops::toggle_all(&mut self.tasks);
        Change::Tasks
    }

    pub fn clear_completed(&mut self) -> Change {
        let removed = ops::clear_completed(&mut self.tasks);
        ops::end_orphaned_edit(&self.tasks, &mut self.editing);
        debug!(removed, "completed tasks cleared");
        Change::Tasks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(list: &TodoList) -> Vec<&str> {
        list.tasks().iter().map(|t| t.title.as_str()).collect()
    }

    #[test]
    fn test_add_toggle_clear_scenario() {
        let mut list = TodoList::new();
        let milk = list.add("buy milk");
        assert_eq!(list.records(), vec![TaskRecord::new("buy milk", false)]);
        assert_eq!(list.remaining_count(), 1);

        list.toggle(milk).unwrap();
        assert_eq!(list.remaining_count(), 0);

        list.add("walk dog");
        assert_eq!(list.remaining_count(), 1);

        list.clear_completed();
        assert_eq!(list.records(), vec![TaskRecord::new("walk dog", false)]);
    }

    #[test]
    fn test_filter_scenario_and_idempotence() {
        let mut list = TodoList::from_records(vec![
            TaskRecord::new("a", false),
            TaskRecord::new("b", true),
        ]);
        let visible_titles = |list: &TodoList| -> Vec<String> {
            list.visible().into_iter().map(|t| t.title).collect()
        };

        list.set_filter(VisibilityFilter::Active);
        assert_eq!(visible_titles(&list), vec!["a"]);
        list.set_filter(VisibilityFilter::Completed);
        let once = visible_titles(&list);
        list.set_filter(VisibilityFilter::Completed);
        assert_eq!(visible_titles(&list), once);
        assert_eq!(once, vec!["b"]);
        list.set_filter(VisibilityFilter::All);
        assert_eq!(visible_titles(&list), vec!["a", "b"]);
        assert_eq!(list.tasks().len(), 2);
    }

    #[test]
    fn test_edit_commit() {
        let mut list = TodoList::new();
        let a = list.add("x");
        list.begin_edit(a).unwrap();
        assert_eq!(list.editing().map(|s| s.draft.as_str()), Some("x"));
        list.set_draft("y");
        assert_eq!(list.commit_edit(), Ok(Change::Tasks));
        assert_eq!(titles(&list), vec!["y"]);
        assert!(list.editing().is_none());
    }

    #[test]
    fn test_edit_cancel() {
        let mut list = TodoList::new();
        let a = list.add("x");
        list.begin_edit(a).unwrap();
        list.set_draft("y");
        list.cancel_edit();
        assert_eq!(titles(&list), vec!["x"]);
        assert!(!list.is_editing(a));
    }

    #[test]
    fn test_single_edit_session() {
        let mut list = TodoList::new();
        let a = list.add("a");
        let b = list.add("b");
        list.begin_edit(a).unwrap();
        list.begin_edit(b).unwrap();
        assert!(!list.is_editing(a));
        assert!(list.is_editing(b));
    }

    #[test]
    fn test_commit_without_session_is_noop() {
        let mut list = TodoList::new();
        list.add("a");
        assert_eq!(list.commit_edit(), Ok(Change::ViewOnly));
        assert_eq!(titles(&list), vec!["a"]);
    }

    #[test]
    fn test_removing_edited_task_ends_session() {
        let mut list = TodoList::new();
        let a = list.add("a");
        list.begin_edit(a).unwrap();
        list.remove(a).unwrap();
        assert!(list.editing().is_none());

        let b = list.add("b");
        list.begin_edit(b).unwrap();
        list.toggle(b).unwrap();
        list.clear_completed();
        assert!(list.editing().is_none());
    }

    #[test]
    fn test_remaining_invariant_after_each_mutation() {
        let mut list = TodoList::new();
        let check = |list: &TodoList| {
            let expected = list.tasks().iter().filter(|t| !t.completed).count();
            assert_eq!(list.summary().remaining, expected);
        };
        let a = list.add("a");
        check(&list);
        let b = list.add("b");
        check(&list);
        list.toggle(a).unwrap();
        check(&list);
        list.toggle_all();
        check(&list);
        list.toggle_all();
        check(&list);
        list.remove(b).unwrap();
        check(&list);
        list.clear_completed();
        check(&list);
    }

    #[test]
    fn test_ids_stay_unique_after_load() {
        let mut list = TodoList::from_records(vec![
            TaskRecord::new("a", false),
            TaskRecord::new("a", false),
        ]);
        let fresh = list.add("c");
        let mut ids: Vec<TaskId> = list.tasks().iter().map(|t| t.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 3);
        assert_eq!(list.tasks()[2].id, fresh);
    }
}
