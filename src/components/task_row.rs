//! Task Row Component
//!
//! Checkbox, label, delete button, and an edit input shown while the row is
//! in edit mode. Double-click the label to edit; Enter commits, Escape or
//! blur cancels.

use leptos::prelude::*;
use todo_core::{KeyIntent, Task};

use crate::store::{
    store_begin_edit, store_cancel_edit, store_commit_edit, store_draft_for, store_is_editing,
    store_remove_task, store_set_draft, store_toggle_task, use_app_store, AppStateStoreFields,
};

/// CSS class of a row for the given state
pub fn row_class(completed: bool, editing: bool) -> &'static str {
    match (completed, editing) {
        (true, true) => "completed editing",
        (true, false) => "completed",
        (false, true) => "editing",
        (false, false) => "",
    }
}

/// Hidden flags `(view, edit)`: a row shows either its view or its edit input
pub fn row_hidden(editing: bool) -> (bool, bool) {
    (editing, !editing)
}

#[component]
pub fn TaskRow(task: Task) -> impl IntoView {
    let store = use_app_store();

    let id = task.id;
    let completed = task.completed;
    let title = task.title;
    let edit_ref = NodeRef::<leptos::html::Input>::new();

    let is_editing = move || {
        store
            .editing()
            .with(|editing| editing.as_ref().is_some_and(|s| s.task_id == id))
    };

    Effect::new(move |_| {
        if is_editing() {
            if let Some(input) = edit_ref.get() {
                let _ = input.focus();
            }
        }
    });

    let on_toggle = move |_: web_sys::Event| {
        if let Err(err) = store_toggle_task(&store, id) {
            tracing::warn!(error = %err, "toggle failed");
        }
    };

    let on_destroy = move |_: web_sys::MouseEvent| {
        if let Err(err) = store_remove_task(&store, id) {
            tracing::warn!(error = %err, "delete failed");
        }
    };

    let on_begin_edit = move |_: web_sys::MouseEvent| {
        if let Err(err) = store_begin_edit(&store, id) {
            tracing::warn!(error = %err, "edit failed");
        }
    };

    let on_edit_keydown = move |ev: web_sys::KeyboardEvent| {
        match KeyIntent::from_key(&ev.key(), ev.is_composing()) {
            Some(KeyIntent::Submit) => {
                if let Err(err) = store_commit_edit(&store) {
                    tracing::warn!(error = %err, "commit failed");
                }
            }
            Some(KeyIntent::Cancel) => store_cancel_edit(&store),
            None => {}
        }
    };

    // The row may already be gone after a commit, so check the store rather than row state.
    let on_edit_blur = move |_: web_sys::FocusEvent| {
        if store_is_editing(&store, id) {
            store_cancel_edit(&store);
        }
    };

    view! {
        <li class=move || row_class(completed, is_editing())>
            <div class="view" hidden=move || row_hidden(is_editing()).0>
                <input class="toggle" type="checkbox" prop:checked=completed on:change=on_toggle />
                <label on:dblclick=on_begin_edit>{title}</label>
                <button class="destroy" on:click=on_destroy></button>
            </div>
            <input
                class="edit"
                hidden=move || row_hidden(is_editing()).1
                node_ref=edit_ref
                prop:value=move || store_draft_for(&store, id)
                on:input=move |ev| store_set_draft(&store, &event_target_value(&ev))
                on:keydown=on_edit_keydown
                on:blur=on_edit_blur
            />
        </li>
    }
}
