//! Outside-interaction detection for dismissable surfaces.

/// Region membership test for a pointer-down target.
///
/// Implemented by the host for its element type. `marker` names a protected
/// surface; the browser implementation checks for an ancestor carrying the
/// marker class.
pub trait Containment {
    fn is_within(&self, marker: &str) -> bool;
}

/// Decides whether a pointer-down happened outside every protected surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutsideClickDetector {
    protected: [&'static str; 2],
}

impl OutsideClickDetector {
    /// Protects the menu surface and the trigger that opens it.
    pub const fn new(surface: &'static str, trigger: &'static str) -> Self {
        Self {
            protected: [surface, trigger],
        }
    }

    pub fn protected(&self) -> &[&'static str] {
        &self.protected
    }

    /// True iff `target` lies outside both protected surfaces.
    pub fn is_outside<T: Containment + ?Sized>(&self, target: &T) -> bool {
        !self
            .protected
            .iter()
            .any(|marker| target.is_within(marker))
    }
}
