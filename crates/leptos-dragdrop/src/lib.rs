//! Leptos DragDrop Utilities
//!
//! Vertical drag-to-reorder for Leptos lists using mouse events.
//! Uses movement threshold to distinguish click from drag, and reports
//! the vertical offset of the gesture when the button is released.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Movement threshold in pixels to start dragging
pub const DEFAULT_DRAG_THRESHOLD_PX: i32 = 5;

/// How long the "drag just ended" latch stays set after a release
const DRAG_END_LATCH_MS: u32 = 100;

/// DnD state signals for one list.
///
/// Holds only the state of the gesture in flight; everything is reset on release.
#[derive(Clone, Copy)]
pub struct DndSignals {
    /// Row index being dragged (threshold exceeded)
    pub dragging_index_read: ReadSignal<Option<usize>>,
    pub dragging_index_write: WriteSignal<Option<usize>>,
    /// Pending row index (mousedown but not yet dragging)
    pub pending_index_read: ReadSignal<Option<usize>>,
    pub pending_index_write: WriteSignal<Option<usize>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
    /// Live vertical offset of the dragged row
    pub offset_y_read: ReadSignal<i32>,
    pub offset_y_write: WriteSignal<i32>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    pub threshold_px: i32,
}

pub fn create_dnd_signals_with_threshold(threshold_px: i32) -> DndSignals {
    let (dragging_index_read, dragging_index_write) = signal(None::<usize>);
    let (pending_index_read, pending_index_write) = signal(None::<usize>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    let (offset_y_read, offset_y_write) = signal(0i32);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    DndSignals {
        dragging_index_read,
        dragging_index_write,
        pending_index_read,
        pending_index_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
        offset_y_read,
        offset_y_write,
        drag_just_ended_read,
        drag_just_ended_write,
        threshold_px,
    }
}

/// True once the pointer moved far enough on either axis to count as a drag
pub fn exceeds_threshold(dx: i32, dy: i32, threshold_px: i32) -> bool {
    dx.abs() > threshold_px || dy.abs() > threshold_px
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    let was_dragging = dnd.dragging_index_read.get_untracked().is_some();
    dnd.dragging_index_write.set(None);
    dnd.pending_index_write.set(None);
    dnd.offset_y_write.set(0);

    if was_dragging {
        dnd.drag_just_ended_write.set(true);
        let clear = dnd.drag_just_ended_write;
        Timeout::new(DRAG_END_LATCH_MS, move || {
            // The list may be gone by now
            let _ = clear.try_set(false);
        })
        .forget();
    }
}

/// Create mousedown handler for draggable rows
/// Records pending drag with start position
pub fn make_on_mousedown(dnd: DndSignals, index: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        // Ignore if target is input or button
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
        }
        dnd.pending_index_write.set(Some(index));
        dnd.start_x_write.set(ev.client_x());
        dnd.start_y_write.set(ev.client_y());
        dnd.offset_y_write.set(0);
    }
}

/// A document-level mouse listener, removed when dropped
struct DocumentListener {
    event: &'static str,
    closure: Closure<dyn FnMut(web_sys::MouseEvent)>,
}

impl DocumentListener {
    fn add(event: &'static str, closure: Closure<dyn FnMut(web_sys::MouseEvent)>) -> Self {
        if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
            let _ = doc.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        }
        Self { event, closure }
    }
}

impl Drop for DocumentListener {
    fn drop(&mut self) {
        if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
            let _ = doc.remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
        }
    }
}

/// Keep a listener alive until the current reactive owner is cleaned up
fn remove_on_cleanup(listener: DocumentListener) {
    let listener = StoredValue::new_local(listener);
    on_cleanup(move || listener.dispose());
}

/// Bind mousemove on the document: starts the drag once moved enough,
/// then keeps the vertical offset current
pub fn bind_global_mousemove(dnd: DndSignals) {
    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending_index_read.get_untracked();
        if pending.is_none() {
            return;
        }

        let dx = ev.client_x() - dnd.start_x_read.get_untracked();
        let dy = ev.client_y() - dnd.start_y_read.get_untracked();

        if dnd.dragging_index_read.get_untracked().is_none() {
            if exceeds_threshold(dx, dy, dnd.threshold_px) {
                dnd.dragging_index_write.set(pending);
                dnd.offset_y_write.set(dy);
            }
        } else {
            dnd.offset_y_write.set(dy);
        }
    });

    remove_on_cleanup(DocumentListener::add("mousemove", on_mousemove));
}

/// Bind global mouseup handler for release detection.
///
/// `on_release(index, offset_y)` fires only when a drag actually started;
/// a plain click just clears the pending state. Both document listeners are
/// removed when the calling component is disposed.
pub fn bind_global_mouseup<F>(dnd: DndSignals, on_release: F)
where
    F: Fn(usize, i32) + Clone + 'static,
{
    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let dragging = dnd.dragging_index_read.get_untracked();
        let offset_y = ev.client_y() - dnd.start_y_read.get_untracked();

        end_drag(&dnd);

        if let Some(index) = dragging {
            on_release(index, offset_y);
        }
    });

    remove_on_cleanup(DocumentListener::add("mouseup", on_mouseup));

    // Also bind global mousemove
    bind_global_mousemove(dnd);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_movement_is_a_click() {
        assert!(!exceeds_threshold(3, -4, DEFAULT_DRAG_THRESHOLD_PX));
        assert!(!exceeds_threshold(5, 5, DEFAULT_DRAG_THRESHOLD_PX));
    }

    #[test]
    fn test_either_axis_starts_drag() {
        assert!(exceeds_threshold(0, 6, DEFAULT_DRAG_THRESHOLD_PX));
        assert!(exceeds_threshold(0, -6, DEFAULT_DRAG_THRESHOLD_PX));
        assert!(exceeds_threshold(-9, 0, DEFAULT_DRAG_THRESHOLD_PX));
    }

    #[test]
    fn test_custom_threshold() {
        assert!(!exceeds_threshold(0, 15, 20));
        assert!(exceeds_threshold(0, 21, 20));
    }
}
