//! Sortable List Component
//!
//! A vertical list reordered with native HTML5 drag events. Every
//! dragover recomputes the insertion anchor from the rendered row
//! geometry and repositions the entry signal; the keyed `<For>` mirrors
//! the signal into the DOM, so the dragged row follows the cursor as a
//! live preview. On dragend the final order is sent to the server.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::DragEvent;

use leptos_sortable::{
    begin_drag, create_sort_session, finish_drag, insertion_anchor, reposition, RowBounds,
};

use crate::api::{self, SyncError};
use crate::models::{labels, ListEntry};

/// Sortable list with drag-to-reorder and server sync on drop
#[component]
pub fn SortableList(
    entries: RwSignal<Vec<ListEntry>>,
    /// Invoked with the sync outcome after each completed drag
    #[prop(optional, into)] on_synced: Option<Callback<Result<serde_json::Value, SyncError>>>,
) -> impl IntoView {
    let session = create_sort_session();
    let container_ref = NodeRef::<html::Ul>::new();

    let on_dragover = move |ev: DragEvent| {
        // Required to keep the drop ours instead of the browser's
        ev.prevent_default();

        let Some(dragged_id) = session.dragging_read.get_untracked() else {
            return;
        };
        let Some(container) = container_ref.get_untracked() else {
            return;
        };

        let anchor_id = anchor_under_cursor(&container, dragged_id, ev.client_y() as f64);
        entries.update(|list| reposition(list, |e| e.id, dragged_id, anchor_id));
    };

    view! {
        <ul class="sortable-list" node_ref=container_ref on:dragover=on_dragover>
            <For
                each=move || entries.get()
                key=|entry| entry.id
                children=move |entry| {
                    let id = entry.id;

                    let on_dragstart = move |_: DragEvent| begin_drag(&session, id);

                    let on_dragend = move |_: DragEvent| {
                        finish_drag(&session);

                        // Order is final before the request leaves
                        let sorted = entries.with_untracked(|list| labels(list));
                        spawn_local(async move {
                            let outcome = api::send_sorted_list(&sorted).await;
                            match &outcome {
                                Ok(ack) => web_sys::console::log_1(
                                    &format!("[SYNC] Sorted list sent to server: {:?}", ack).into(),
                                ),
                                Err(e) => web_sys::console::error_1(
                                    &format!("[SYNC] Error sending sorted list: {}", e).into(),
                                ),
                            }
                            if let Some(cb) = on_synced {
                                cb.run(outcome);
                            }
                        });
                    };

                    let row_style = move || {
                        if session.hidden_read.get() == Some(id) {
                            "display: none;"
                        } else {
                            ""
                        }
                    };

                    view! {
                        <li
                            class="sortable-item"
                            draggable="true"
                            data-entry-id=id.to_string()
                            style=row_style
                            on:dragstart=on_dragstart
                            on:dragend=on_dragend
                        >
                            {entry.label.clone()}
                        </li>
                    }
                }
            />
        </ul>
    }
}

/// Read candidate row geometry from the DOM and pick the entry id the
/// dragged row should be inserted before. The dragged row itself is
/// skipped; hidden, it takes no space in the layout anyway.
fn anchor_under_cursor(
    container: &web_sys::Element,
    dragged_id: u32,
    cursor_y: f64,
) -> Option<u32> {
    let children = container.children();
    let mut ids = Vec::new();
    let mut rows = Vec::new();
    for i in 0..children.length() {
        let Some(child) = children.item(i) else {
            continue;
        };
        let Some(id) = child
            .get_attribute("data-entry-id")
            .and_then(|v| v.parse::<u32>().ok())
        else {
            continue;
        };
        if id == dragged_id {
            continue;
        }
        let rect = child.get_bounding_client_rect();
        ids.push(id);
        rows.push(RowBounds::new(rect.top(), rect.height()));
    }
    insertion_anchor(cursor_y, &rows).map(|idx| ids[idx])
}
