//! Last-observed pointer position for the background glow.

use serde::{Deserialize, Serialize};

/// Viewport coordinates in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Custom properties consumed by the glow gradient.
    pub fn css_vars(&self) -> String {
        format!("--mouse-x: {}px; --mouse-y: {}px;", self.x, self.y)
    }
}

/// Keeps only the most recent pointer position; no history.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerTracker {
    position: PointerPosition,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn observe(&mut self, x: f64, y: f64) {
        self.position = PointerPosition::new(x, y);
    }

    #[inline]
    pub fn position(&self) -> PointerPosition {
        self.position
    }
}
