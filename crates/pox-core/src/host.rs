//! Global input streams provided by the host environment.

use crate::outside::Containment;
use crate::pointer::PointerPosition;

/// Source of the global pointer streams the shell observes.
///
/// Each subscription returns a guard; dropping the guard must remove the
/// handler so repeated mount/unmount cycles never accumulate listeners.
pub trait Host {
    type Guard;

    fn on_pointer_move(&self, handler: Box<dyn FnMut(PointerPosition)>) -> Self::Guard;

    fn on_pointer_down(&self, handler: Box<dyn FnMut(&dyn Containment)>) -> Self::Guard;
}
