//! Sortable List App
//!
//! Main application component: seeds the list and renders it.

use leptos::prelude::*;

use crate::components::SortableList;
use crate::models::ListEntry;

#[component]
pub fn App() -> impl IntoView {
    let entries = RwSignal::new(vec![
        ListEntry::new(1, "Item 1"),
        ListEntry::new(2, "Item 2"),
        ListEntry::new(3, "Item 3"),
    ]);

    view! {
        <main class="main-content">
            <h1>"Sortable List"</h1>

            <SortableList entries=entries />

            <p class="item-count">{move || format!("{} items", entries.get().len())}</p>
        </main>
    }
}
