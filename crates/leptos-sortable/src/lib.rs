//! Leptos Sortable Utilities
//!
//! Vertical drag-to-reorder for Leptos using native HTML5 drag events.
//! The geometry and repositioning logic is DOM-free so it can be unit
//! tested on the host; components feed it row rectangles and apply the
//! result to their entry signal.

use leptos::prelude::*;

/// Vertical extent of a rendered list row
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RowBounds {
    pub top: f64,
    pub height: f64,
}

impl RowBounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }
}

/// Drag-session signals for one sortable container
#[derive(Clone, Copy)]
pub struct SortSession {
    /// Entry currently being dragged - read
    pub dragging_read: ReadSignal<Option<u32>>,
    pub dragging_write: WriteSignal<Option<u32>>,
    /// Entry whose row is visually collapsed - read
    pub hidden_read: ReadSignal<Option<u32>>,
    pub hidden_write: WriteSignal<Option<u32>>,
}

pub fn create_sort_session() -> SortSession {
    let (dragging_read, dragging_write) = signal(None::<u32>);
    let (hidden_read, hidden_write) = signal(None::<u32>);
    SortSession {
        dragging_read,
        dragging_write,
        hidden_read,
        hidden_write,
    }
}

/// Run `f` on the next turn of the browser event loop
#[cfg(target_arch = "wasm32")]
pub fn next_tick(f: impl FnOnce() + 'static) {
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(0).await;
        f();
    });
}

/// Host builds have no render pipeline to wait for
#[cfg(not(target_arch = "wasm32"))]
pub fn next_tick(f: impl FnOnce() + 'static) {
    f();
}

/// Mark `id` as dragging and schedule hiding its row.
///
/// The hide is deferred one tick so the browser captures the drag image
/// before the row collapses to `display: none`.
pub fn begin_drag(session: &SortSession, id: u32) {
    session.dragging_write.set(Some(id));
    let hide = session.hidden_write;
    next_tick(move || hide.set(Some(id)));
}

/// Schedule restoring the hidden row and clearing the dragging id
pub fn finish_drag(session: &SortSession) {
    let session = *session;
    next_tick(move || {
        session.hidden_write.set(None);
        session.dragging_write.set(None);
    });
}

/// Pick the row the dragged entry should be inserted before.
///
/// For each candidate `offset = cursor_y - top - height / 2`; among rows
/// whose midpoint lies below the cursor (`offset < 0`) the one closest
/// to zero wins. A zero offset does not qualify, so a cursor exactly on
/// a midpoint falls through to the next row down. `None` means append
/// after the last row.
pub fn insertion_anchor(cursor_y: f64, rows: &[RowBounds]) -> Option<usize> {
    let mut closest: Option<(f64, usize)> = None;
    for (idx, row) in rows.iter().enumerate() {
        let offset = cursor_y - row.top - row.height / 2.0;
        if offset < 0.0 && closest.map_or(true, |(best, _)| offset > best) {
            closest = Some((offset, idx));
        }
    }
    closest.map(|(_, idx)| idx)
}

/// Move the entry with id `dragged_id` immediately before the entry with
/// id `anchor_id`, or to the end of the list when there is no anchor.
/// Unknown ids are ignored.
pub fn reposition<T>(
    list: &mut Vec<T>,
    key: impl Fn(&T) -> u32,
    dragged_id: u32,
    anchor_id: Option<u32>,
) {
    let Some(from) = list.iter().position(|e| key(e) == dragged_id) else {
        return;
    };
    let entry = list.remove(from);
    let to = anchor_id
        .and_then(|aid| list.iter().position(|e| key(e) == aid))
        .unwrap_or(list.len());
    list.insert(to, entry);
}
