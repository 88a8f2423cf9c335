//! New Task Input Component
//!
//! Adds a task on Enter, unless an IME composition is in progress.

use leptos::prelude::*;
use todo_core::input::submitted_title;
use todo_core::KeyIntent;

use crate::store::{store_add_task, use_app_store};

#[component]
pub fn NewTaskInput() -> impl IntoView {
    let store = use_app_store();
    let (new_title, set_new_title) = signal(String::new());
    let input_ref = NodeRef::<leptos::html::Input>::new();

    // Focus once the input is mounted.
    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if KeyIntent::from_key(&ev.key(), ev.is_composing()) != Some(KeyIntent::Submit) {
            return;
        }
        let value = new_title.get_untracked();
        if let Some(title) = submitted_title(&value) {
            store_add_task(&store, title);
            set_new_title.set(String::new());
        }
    };

    view! {
        <input
            class="new-todo"
            placeholder="What needs to be done?"
            node_ref=input_ref
            prop:value=move || new_title.get()
            on:input=move |ev| set_new_title.set(event_target_value(&ev))
            on:keydown=on_keydown
        />
    }
}
