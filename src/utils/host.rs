//! Browser implementation of the shell's [`Host`].
//!
//! Pointer moves are observed on the window, pointer-downs on the document.
//! Each subscription is a DOM listener owned by a [`ListenerGuard`], which
//! removes it again when dropped.

use leptos::prelude::*;
use pox_core::{Containment, Host, PointerPosition, ShellHandle, attach};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, EventTarget, MouseEvent, Window};

use super::dom::DomTarget;

/// The live browser window and document.
pub struct WebHost {
    window: Window,
    document: Document,
}

impl WebHost {
    /// Returns `None` outside a browser.
    pub fn new() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }
}

/// A registered DOM listener, removed from its target on drop.
pub struct ListenerGuard {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(MouseEvent)>,
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

fn listen(
    target: &EventTarget,
    event: &'static str,
    handler: impl FnMut(MouseEvent) + 'static,
) -> ListenerGuard {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    if let Err(err) =
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::warn!("failed to attach {event} listener: {err:?}");
    }
    ListenerGuard {
        target: target.clone(),
        event,
        closure,
    }
}

impl Host for WebHost {
    type Guard = ListenerGuard;

    fn on_pointer_move(&self, mut handler: Box<dyn FnMut(PointerPosition)>) -> ListenerGuard {
        listen(&self.window, "mousemove", move |event| {
            handler(PointerPosition::new(
                f64::from(event.client_x()),
                f64::from(event.client_y()),
            ));
        })
    }

    fn on_pointer_down(&self, mut handler: Box<dyn FnMut(&dyn Containment)>) -> ListenerGuard {
        listen(&self.document, "mousedown", move |event| {
            handler(&DomTarget::from_event(&event));
        })
    }
}

/// Attaches `shell` to the browser's pointer streams until the current
/// reactive owner is disposed.
pub fn use_host_listeners<S: ShellHandle>(shell: &S) {
    match WebHost::new() {
        Some(host) => {
            let listeners = attach(shell, &host);
            // Dropped with the owner, which removes both DOM listeners.
            let _ = StoredValue::new_local(listeners);
        }
        None => log::warn!("no browser window; pointer listeners not attached"),
    }
}
