//! Task List Component
//!
//! Renders the filtered tasks, one `TaskRow` each.

use leptos::prelude::*;
use todo_core::Task;

use crate::components::TaskRow;

#[component]
pub fn TaskList(tasks: Memo<Vec<Task>>) -> impl IntoView {
    view! {
        <ul class="todo-list">
            <For
                each=move || tasks.get()
                // Key on every mutable field so a toggle or rename rebuilds the row
                key=|task| (task.id, task.completed, task.title.clone())
                children=move |task| view! { <TaskRow task=task /> }
            />
        </ul>
    }
}
