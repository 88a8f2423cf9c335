//! Footer Component
//!
//! Remaining count, filters and the clear-completed control.

use leptos::prelude::*;
use todo_core::Summary;

use crate::components::FilterBar;
use crate::store::{store_clear_completed, use_app_store};

pub fn remaining_label(remaining: usize) -> String {
    let noun = if remaining == 1 { "item" } else { "items" };
    format!("{} {} left", remaining, noun)
}

#[component]
pub fn TodoFooter(summary: Memo<Summary>) -> impl IntoView {
    let store = use_app_store();

    view! {
        <footer class="footer">
            <span class="todo-count">{move || remaining_label(summary.get().remaining)}</span>
            <FilterBar />
            <Show when=move || { summary.get().completed > 0 }>
                <button class="clear-completed" on:click=move |_| store_clear_completed(&store)>
                    "Clear completed"
                </button>
            </Show>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remaining_label() {
        assert_eq!(remaining_label(0), "0 items left");
        assert_eq!(remaining_label(1), "1 item left");
        assert_eq!(remaining_label(2), "2 items left");
    }
}
