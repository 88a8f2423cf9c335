//! Filter Bar Component
//!
//! One button per visibility filter; the active one is highlighted.

use leptos::prelude::*;
use todo_core::VisibilityFilter;

use crate::store::{store_set_filter, use_app_store, AppStateStoreFields};

pub fn filter_class(filter: VisibilityFilter, active: VisibilityFilter) -> &'static str {
    if filter == active {
        "selected"
    } else {
        ""
    }
}

#[component]
pub fn FilterBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <ul class="filters">
            {VisibilityFilter::ALL.into_iter().map(move |filter| {
                view! {
                    <li>
                        <button
                            type="button"
                            class=move || filter_class(filter, store.filter().get())
                            on:click=move |_| store_set_filter(&store, filter)
                        >
                            {filter.label()}
                        </button>
                    </li>
                }
            }).collect_view()}
        </ul>
    }
}
