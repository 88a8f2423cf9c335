//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity: the task list,
//! the filter and the edit session are separate fields, so a filter change
//! never notifies subscribers of the task list (and never triggers a save).

use leptos::prelude::*;
use reactive_stores::Store;
use todo_core::{ops, DomainResult, EditSession, Task, TaskId, TaskRecord, VisibilityFilter};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All tasks in display order
    pub tasks: Vec<Task>,
    /// Which subset is rendered
    pub filter: VisibilityFilter,
    /// Task currently being edited, with its draft title
    pub editing: Option<EditSession>,
    /// Next id handed out by `store_add_task`
    pub next_id: TaskId,
}

impl AppState {
    pub fn from_records(records: Vec<TaskRecord>) -> Self {
        let (tasks, next_id) = ops::tasks_from_records(records);
        Self {
            tasks,
            next_id,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Append a task to the end of the list
pub fn store_add_task(store: &AppStore, title: &str) -> TaskId {
    let mut next_id = store.next_id().get_untracked();
    let id = ops::add(&mut store.tasks().write(), &mut next_id, title);
    store.next_id().set(next_id);
    tracing::debug!(%id, title, "task added");
    id
}

/// Flip a task's completion flag
pub fn store_toggle_task(store: &AppStore, id: TaskId) -> DomainResult<bool> {
    ops::toggle(&mut store.tasks().write(), id)
}

/// Remove a task, ending its edit session if any
pub fn store_remove_task(store: &AppStore, id: TaskId) -> DomainResult<()> {
    ops::remove(&mut store.tasks().write(), id)?;
    store_end_orphaned_edit(store);
    Ok(())
}

// Fields share one lock, so read them one after the other. Only writes
// `editing` when the session actually ends.
fn store_end_orphaned_edit(store: &AppStore) {
    let mut editing = store.editing().get_untracked();
    if store
        .tasks()
        .with_untracked(|tasks| ops::end_orphaned_edit(tasks, &mut editing))
    {
        store.editing().set(editing);
    }
}

/// Whether `id` is under edit (untracked, safe from event handlers)
pub fn store_is_editing(store: &AppStore, id: TaskId) -> bool {
    store
        .editing()
        .with_untracked(|editing| editing.as_ref().is_some_and(|s| s.task_id == id))
}

pub fn store_begin_edit(store: &AppStore, id: TaskId) -> DomainResult<()> {
    let session = ops::find(&store.tasks().read_untracked(), id).map(EditSession::begin)?;
    store.editing().set(Some(session));
    Ok(())
}

pub fn store_set_draft(store: &AppStore, draft: &str) {
    if let Some(session) = store.editing().write().as_mut() {
        session.draft = draft.to_string();
    }
}

/// Draft for `id`, empty when another task (or none) is under edit
pub fn store_draft_for(store: &AppStore, id: TaskId) -> String {
    store.editing().with(|editing| {
        editing
            .as_ref()
            .filter(|s| s.task_id == id)
            .map(|s| s.draft.clone())
            .unwrap_or_default()
    })
}

/// Write the draft into its task and leave edit mode
pub fn store_commit_edit(store: &AppStore) -> DomainResult<()> {
    let mut editing = store.editing().get_untracked();
    if editing.is_none() {
        return Ok(());
    }
    let result = ops::commit_edit(&mut store.tasks().write(), &mut editing);
    store.editing().set(editing);
    result.map(|_| ())
}

pub fn store_cancel_edit(store: &AppStore) {
    store.editing().set(None);
}

pub fn store_set_filter(store: &AppStore, filter: VisibilityFilter) {
    tracing::debug!(filter = filter.as_str(), "filter changed");
    store.filter().set(filter);
}

pub fn store_toggle_all(store: &AppStore) {
    ops::toggle_all(&mut store.tasks().write());
}

/// Remove completed tasks, ending the edit session if its task went with them
pub fn store_clear_completed(store: &AppStore) {
    let removed = ops::clear_completed(&mut store.tasks().write());
    store_end_orphaned_edit(store);
    tracing::debug!(removed, "completed tasks cleared");
}
