//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use pox_core::{Containment, Viewport};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Current inner size of the browser window.
///
/// Returns `None` outside a browser or if the size is unavailable.
pub fn viewport() -> Option<Viewport> {
    let window = window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some(Viewport { width, height })
}

// =============================================================================
// Pointer Targets
// =============================================================================

/// A pointer-down target checked against class markers.
///
/// The target is inside a marker when it, or any ancestor, carries the
/// marker as a plain class.
pub struct DomTarget(Option<Element>);

impl DomTarget {
    /// Wrap the target of `event`. Non-element targets are never inside.
    pub fn from_event(event: &Event) -> Self {
        Self(event.target().and_then(|t| t.dyn_into::<Element>().ok()))
    }
}

impl Containment for DomTarget {
    fn is_within(&self, marker: &str) -> bool {
        self.0.as_ref().is_some_and(|element| {
            element
                .closest(&format!(".{marker}"))
                .ok()
                .flatten()
                .is_some()
        })
    }
}
