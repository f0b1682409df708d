//! Leptos DragDrop Utilities
//!
//! Drag-to-reorder for flat Leptos lists using mouse events.
//! Uses movement threshold to distinguish click from drag, and the hovered
//! row's vertical midpoint to decide between dropping before or after it.

mod order;

pub use order::{compute_drop_position, DragError, DragSession, DropPosition, Keyed, OrderedList};

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Current insertion point while dragging
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DropHint {
    pub target: u32,
    pub position: DropPosition,
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    /// Active drag, at most one
    pub session: RwSignal<DragSession>,
    pub drop_hint_read: ReadSignal<Option<DropHint>>,
    pub drop_hint_write: WriteSignal<Option<DropHint>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending item id (mousedown but not yet dragging)
    pub pending_id_read: ReadSignal<Option<u32>>,
    pub pending_id_write: WriteSignal<Option<u32>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

impl DndSignals {
    /// Item currently being dragged (tracked)
    pub fn dragging(&self) -> Option<u32> {
        self.session.with(|s| s.current())
    }

    fn dragging_untracked(&self) -> Option<u32> {
        self.session.with_untracked(|s| s.current())
    }
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

/// How long clicks are suppressed after a drop
const CLICK_SUPPRESS_MS: i32 = 100;

pub fn create_dnd_signals() -> DndSignals {
    let session = RwSignal::new(DragSession::default());
    let (drop_hint_read, drop_hint_write) = signal(None::<DropHint>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_id_read, pending_id_write) = signal(None::<u32>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        session,
        drop_hint_read,
        drop_hint_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_id_read,
        pending_id_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

/// End drag operation, returning the item that was dragged
pub fn end_drag(dnd: &DndSignals) -> Option<u32> {
    let dragged = dnd.session.try_update(|s| s.end()).flatten();
    dnd.drop_hint_write.set(None);
    dnd.pending_id_write.set(None);

    if dragged.is_some() {
        dnd.drag_just_ended_write.set(true);
        if let Some(win) = web_sys::window() {
            let clear = dnd.drag_just_ended_write;
            let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
                clear.set(false);
            });
            let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), CLICK_SUPPRESS_MS);
            cb.forget();
        }
    }
    dragged
}

/// Controls (or anything nested in one, like a button's icon)
fn is_interactive(target: &web_sys::EventTarget) -> bool {
    target
        .dyn_ref::<web_sys::Element>()
        .and_then(|el| el.closest("input, button, select, textarea, a").ok().flatten())
        .is_some()
}

/// Create mousedown handler for draggable items
/// Records pending drag with start position
pub fn make_on_mousedown(dnd: DndSignals, item_id: u32) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 || dnd.dragging_untracked().is_some() {
            return;
        }
        // Ignore presses on controls inside the row
        if let Some(target) = ev.target() {
            if is_interactive(&target) { return; }
        }
        dnd.pending_id_write.set(Some(item_id));
        dnd.start_x_write.set(ev.client_x());
        dnd.start_y_write.set(ev.client_y());
    }
}

/// Document mousemove handler - starts drag once moved past the threshold
pub fn bind_global_mousemove(dnd: DndSignals) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let Some(pending) = dnd.pending_id_read.get_untracked() else { return };
        if dnd.dragging_untracked().is_some() {
            return;
        }

        let dx = (ev.client_x() - dnd.start_x_read.get_untracked()).abs();
        let dy = (ev.client_y() - dnd.start_y_read.get_untracked()).abs();
        if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
            dnd.session.update(|s| {
                let _ = s.begin(pending);
            });
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Create mousemove handler for a row: tracks before/after against its bounding box
pub fn make_on_item_mousemove(dnd: DndSignals, item_id: u32) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        let Some(dragging) = dnd.dragging_untracked() else { return };
        if dragging == item_id {
            dnd.drop_hint_write.set(None);
            return;
        }
        let Some(row) = ev.current_target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) else {
            return;
        };
        let rect = row.get_bounding_client_rect();
        let position = compute_drop_position(rect.top(), rect.height(), f64::from(ev.client_y()));
        let hint = Some(DropHint { target: item_id, position });
        if dnd.drop_hint_read.get_untracked() != hint {
            dnd.drop_hint_write.set(hint);
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_untracked().is_some() {
            dnd.drop_hint_write.set(None);
        }
    }
}

/// Bind global mouseup handler for drop detection
///
/// `on_drop(dragged, target, position)` runs only for a real drag that ended over a row.
pub fn bind_global_mouseup<F>(dnd: DndSignals, on_drop: F)
where
    F: Fn(u32, u32, DropPosition) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let hint = dnd.drop_hint_read.get_untracked();
        let dragged = end_drag(&dnd);

        if let (Some(dragged), Some(hint)) = (dragged, hint) {
            on_drop(dragged, hint.target, hint.position);
        }
        // Otherwise it was a click; the click event fires naturally
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();

    // Also bind global mousemove
    bind_global_mousemove(dnd);
}
