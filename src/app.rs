//! Todo Widget App (data-binding variant)
//!
//! Owns the store, derives the summary and visible subset as memos, and
//! saves the task list whenever it changes.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_core::ops;

use crate::components::{NewTaskInput, TaskList, TodoFooter, ToggleAll};
use crate::config::WidgetConfig;
use crate::context::AppContext;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App(config: WidgetConfig) -> impl IntoView {
    let ctx = AppContext::new(&config.storage_key);
    let store = Store::new(AppState::from_records(ctx.restore()));
    tracing::info!(count = store.tasks().with_untracked(|t| t.len()), "task list restored");

    // Provide context to all children
    provide_context(ctx);
    provide_context(store);

    // Derived values
    let summary = Memo::new(move |_| store.tasks().with(|tasks| ops::summarize(tasks)));
    let visible_tasks = Memo::new(move |_| {
        let filter = store.filter().get();
        store.tasks().with(|tasks| ops::visible(tasks, filter))
    });

    // Save on every task list change; filter and edit state are not tracked here
    Effect::new(move |_| {
        store.tasks().with(|tasks| ctx.persist(tasks));
    });

    view! {
        <section class="todoapp">
            <header class="header">
                <h1>"todos"</h1>
                <NewTaskInput />
            </header>
            <Show when=move || { summary.get().total > 0 }>
                <section class="main">
                    <ToggleAll summary=summary />
                    <TaskList tasks=visible_tasks />
                </section>
                <TodoFooter summary=summary />
            </Show>
        </section>
    }
}
