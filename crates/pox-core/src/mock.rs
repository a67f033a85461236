//! In-memory host for exercising the shell without a browser.
//!
//! Enabled by the `mock` feature (and always in unit tests).

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::host::Host;
use crate::outside::Containment;
use crate::pointer::PointerPosition;

type MoveHandler = Box<dyn FnMut(PointerPosition)>;
type DownHandler = Box<dyn FnMut(&dyn Containment)>;
type Shared<T> = Rc<RefCell<T>>;

#[derive(Default)]
struct Listeners {
    next_id: u64,
    registrations: usize,
    moves: Vec<(u64, Shared<MoveHandler>)>,
    downs: Vec<(u64, Shared<DownHandler>)>,
}

impl Listeners {
    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.registrations += 1;
        self.next_id
    }

    fn is_live(&self, stream: Stream, id: u64) -> bool {
        match stream {
            Stream::Move => self.moves.iter().any(|(i, _)| *i == id),
            Stream::Down => self.downs.iter().any(|(i, _)| *i == id),
        }
    }
}

/// Synchronous event loop with listener bookkeeping.
#[derive(Clone, Default)]
pub struct FakeHost {
    listeners: Rc<RefCell<Listeners>>,
}

impl FakeHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delivers a pointer-move; returns how many handlers ran.
    ///
    /// Handlers run without the listener table borrowed, so they may drop
    /// guards. A handler released mid-dispatch is skipped.
    pub fn dispatch_move(&self, x: f64, y: f64) -> usize {
        let position = PointerPosition::new(x, y);
        let snapshot = self.listeners.borrow().moves.clone();
        let mut ran = 0;
        for (id, handler) in snapshot {
            if self.listeners.borrow().is_live(Stream::Move, id) {
                let mut handler = handler.borrow_mut();
                (&mut **handler)(position);
                ran += 1;
            }
        }
        ran
    }

    /// Delivers a pointer-down on `target`; returns how many handlers ran.
    pub fn dispatch_down(&self, target: &dyn Containment) -> usize {
        let snapshot = self.listeners.borrow().downs.clone();
        let mut ran = 0;
        for (id, handler) in snapshot {
            if self.listeners.borrow().is_live(Stream::Down, id) {
                let mut handler = handler.borrow_mut();
                (&mut **handler)(target);
                ran += 1;
            }
        }
        ran
    }

    pub fn move_listeners(&self) -> usize {
        self.listeners.borrow().moves.len()
    }

    pub fn down_listeners(&self) -> usize {
        self.listeners.borrow().downs.len()
    }

    /// Subscriptions ever made, including released ones.
    pub fn registrations(&self) -> usize {
        self.listeners.borrow().registrations
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Stream {
    Move,
    Down,
}

/// Removes its handler from the [`FakeHost`] on drop.
pub struct FakeGuard {
    id: u64,
    stream: Stream,
    listeners: Weak<RefCell<Listeners>>,
}

impl Drop for FakeGuard {
    fn drop(&mut self) {
        let Some(listeners) = self.listeners.upgrade() else {
            return;
        };
        let mut listeners = listeners.borrow_mut();
        match self.stream {
            Stream::Move => listeners.moves.retain(|(id, _)| *id != self.id),
            Stream::Down => listeners.downs.retain(|(id, _)| *id != self.id),
        }
    }
}

impl Host for FakeHost {
    type Guard = FakeGuard;

    fn on_pointer_move(&self, handler: MoveHandler) -> FakeGuard {
        let mut listeners = self.listeners.borrow_mut();
        let id = listeners.next_id();
        listeners.moves.push((id, Rc::new(RefCell::new(handler))));
        FakeGuard {
            id,
            stream: Stream::Move,
            listeners: Rc::downgrade(&self.listeners),
        }
    }

    fn on_pointer_down(&self, handler: DownHandler) -> FakeGuard {
        let mut listeners = self.listeners.borrow_mut();
        let id = listeners.next_id();
        listeners.downs.push((id, Rc::new(RefCell::new(handler))));
        FakeGuard {
            id,
            stream: Stream::Down,
            listeners: Rc::downgrade(&self.listeners),
        }
    }
}

/// Pointer target described by the markers on itself and its ancestors.
#[derive(Clone, Debug, Default)]
pub struct FakeTarget {
    markers: Vec<&'static str>,
}

impl FakeTarget {
    pub fn new(markers: impl IntoIterator<Item = &'static str>) -> Self {
        Self {
            markers: markers.into_iter().collect(),
        }
    }
}

impl Containment for FakeTarget {
    fn is_within(&self, marker: &str) -> bool {
        self.markers.iter().any(|m| *m == marker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handler_may_release_its_own_guard() {
        let host = FakeHost::new();
        let slot: Shared<Option<FakeGuard>> = Rc::default();

        let guard = host.on_pointer_move(Box::new({
            let slot = Rc::clone(&slot);
            move |_| {
                slot.borrow_mut().take();
            }
        }));
        *slot.borrow_mut() = Some(guard);

        assert_eq!(host.dispatch_move(1.0, 1.0), 1);
        assert_eq!(host.move_listeners(), 0);
        assert_eq!(host.dispatch_move(2.0, 2.0), 0);
    }

    #[test]
    fn test_guard_released_mid_dispatch_is_skipped() {
        let host = FakeHost::new();
        let second: Shared<Option<FakeGuard>> = Rc::default();
        let calls = Rc::new(RefCell::new(Vec::new()));

        let _first = host.on_pointer_down(Box::new({
            let second = Rc::clone(&second);
            let calls = Rc::clone(&calls);
            move |_: &dyn Containment| {
                calls.borrow_mut().push("first");
                second.borrow_mut().take();
            }
        }));
        *second.borrow_mut() = Some(host.on_pointer_down(Box::new({
            let calls = Rc::clone(&calls);
            move |_: &dyn Containment| calls.borrow_mut().push("second")
        })));

        assert_eq!(host.dispatch_down(&FakeTarget::default()), 1);
        assert_eq!(*calls.borrow(), ["first"]);
        assert_eq!(host.down_listeners(), 1);
    }
}
