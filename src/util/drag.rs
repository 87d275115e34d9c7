//! Drag-to-reposition behavior shared by the shipment modals.
//!
//! DESIGN
//! ======
//! Position is a pure offset from the last mouse-down point. A press that
//! originates on an interactive control (input, button, link, ...) never
//! starts a drag, so clicks inside the modal keep working. The state machine
//! is plain data; browser event extraction lives behind the `csr` feature.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

/// Tag names whose presses must not start a drag.
const INTERACTIVE_TAGS: &[&str] = &["INPUT", "TEXTAREA", "SELECT", "BUTTON", "A"];

/// Free-form modal position driven by pointer events.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragState {
    /// Current horizontal offset in pixels.
    pub x: f64,
    /// Current vertical offset in pixels.
    pub y: f64,
    dragging: bool,
    grab_x: f64,
    grab_y: f64,
}

impl DragState {
    /// Handle a pointer press at `(px, py)` on an element named `target_tag`.
    /// Returns whether a drag began.
    pub fn press(&mut self, px: f64, py: f64, target_tag: &str) -> bool {
        let tag = target_tag.to_ascii_uppercase();
        if INTERACTIVE_TAGS.contains(&tag.as_str()) {
            return false;
        }
        self.dragging = true;
        self.grab_x = px - self.x;
        self.grab_y = py - self.y;
        true
    }

    /// Handle pointer movement; only repositions while a drag is active.
    pub fn moved(&mut self, px: f64, py: f64) {
        if !self.dragging {
            return;
        }
        self.x = px - self.grab_x;
        self.y = py - self.grab_y;
    }

    /// Handle pointer release (or the pointer leaving the backdrop).
    pub fn release(&mut self) {
        self.dragging = false;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// CSS transform for the current position.
    pub fn transform(&self) -> String {
        format!("translate({}px, {}px)", self.x, self.y)
    }
}

/// Tag name of the event target, uppercased; empty when unavailable.
pub fn event_target_tag(ev: &leptos::ev::MouseEvent) -> String {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;
        ev.target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .map(|el| el.tag_name())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = ev;
        String::new()
    }
}
