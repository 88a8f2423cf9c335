//! Toggle-All Control

use leptos::prelude::*;
use todo_core::Summary;

use crate::store::{store_toggle_all, use_app_store};

/// Checkbox that completes everything, or uncompletes everything when all are done
#[component]
pub fn ToggleAll(summary: Memo<Summary>) -> impl IntoView {
    let store = use_app_store();

    view! {
        <input
            id="toggle-all"
            class="toggle-all"
            type="checkbox"
            prop:checked=move || summary.get().all_completed()
            on:change=move |_| store_toggle_all(&store)
        />
        <label for="toggle-all">"Mark all as complete"</label>
    }
}
