//! Headless composition of the navigation shell.
//!
//! [`ShellModel`] wires the registry, navigation model, mobile menu, pointer
//! tracker and view switcher together the same way the web components do,
//! without any rendering. [`attach`] subscribes any [`ShellHandle`] to a
//! [`Host`]; the web crate passes its reactive handle, tests use
//! [`ShellModel::mount`], whose [`MountedShell`] owns both listener guards.

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use crate::error::NavigationError;
use crate::host::Host;
use crate::menu::{MobileMenu, NavItem, nav_items};
use crate::navigation::NavigationModel;
use crate::outside::{Containment, OutsideClickDetector};
use crate::pointer::{PointerPosition, PointerTracker};
use crate::section::{Section, SectionRegistry};
use crate::view::{SwitchOutcome, ViewSwitcher};

pub struct ShellModel<I, C> {
    registry: SectionRegistry<I, C>,
    nav: NavigationModel,
    menu: MobileMenu,
    pointer: PointerTracker,
    view: ViewSwitcher,
    detector: OutsideClickDetector,
}

impl<I: Copy, C> ShellModel<I, C> {
    /// Builds the shell with the first registered section mounted.
    pub fn new(
        registry: SectionRegistry<I, C>,
        detector: OutsideClickDetector,
    ) -> Result<Self, NavigationError> {
        let nav = NavigationModel::from_registry(&registry)?;
        let mut view = ViewSwitcher::new();
        view.switch_to(&registry, nav.active())?;
        Ok(Self {
            registry,
            nav,
            menu: MobileMenu::new(),
            pointer: PointerTracker::new(),
            view,
            detector,
        })
    }

    pub fn registry(&self) -> &SectionRegistry<I, C> {
        &self.registry
    }

    pub fn navigation(&self) -> &NavigationModel {
        &self.nav
    }

    pub fn menu(&self) -> MobileMenu {
        self.menu
    }

    pub fn pointer(&self) -> PointerPosition {
        self.pointer.position()
    }

    pub fn view(&self) -> ViewSwitcher {
        self.view
    }

    pub fn nav_items(&self) -> Vec<NavItem<I>> {
        nav_items(&self.registry, &self.nav)
    }

    /// Desktop control activated.
    pub fn activate(&mut self, section: Section) -> Result<SwitchOutcome, NavigationError> {
        self.nav.set_active(section)?;
        self.sync_view()
    }

    /// Activation by identifier; unknown identifiers change nothing.
    pub fn request(&mut self, id: &str) -> Result<Section, NavigationError> {
        let section = self.nav.request(id)?;
        self.sync_view()?;
        Ok(section)
    }

    pub fn toggle_menu(&mut self) {
        self.menu.toggle();
    }

    /// Mobile section control activated: navigate and close in one step.
    pub fn select_from_menu(&mut self, section: Section) -> Result<SwitchOutcome, NavigationError> {
        self.menu.select(&mut self.nav, section)?;
        self.sync_view()
    }

    /// Pointer-down anywhere in the document. Returns `true` if it closed
    /// the menu; ignored while the menu is closed.
    pub fn pointer_down<T: Containment + ?Sized>(&mut self, target: &T) -> bool {
        if !self.menu.is_open() {
            return false;
        }
        let outside = self.detector.is_outside(target);
        self.menu.pointer_down(outside);
        !self.menu.is_open()
    }

    /// Returns `true` if the position moved.
    pub fn pointer_move(&mut self, position: PointerPosition) -> bool {
        let previous = self.pointer.position();
        self.pointer.observe(position.x, position.y);
        previous != position
    }

    fn sync_view(&mut self) -> Result<SwitchOutcome, NavigationError> {
        let outcome = self.view.switch_to(&self.registry, self.nav.active())?;
        match outcome {
            SwitchOutcome::Swapped { exiting, entering } => {
                log::debug!("view swapped: {} -> {}", exiting.section, entering.section);
            }
            SwitchOutcome::Mounted(plan) => log::debug!("view mounted: {}", plan.section),
            SwitchOutcome::Unchanged => {}
        }
        Ok(outcome)
    }
}

/// Shared, mutable access to a live [`ShellModel`].
///
/// Host listeners write through this handle. The closure passed to
/// [`update`](Self::update) returns whether anything observable changed,
/// so reactive implementations can skip notifying subscribers.
pub trait ShellHandle: Clone + 'static {
    type Icon: Copy;
    type Content;

    fn update(&self, f: impl FnOnce(&mut ShellModel<Self::Icon, Self::Content>) -> bool);
}

impl<I: Copy + 'static, C: 'static> ShellHandle for Rc<RefCell<ShellModel<I, C>>> {
    type Icon = I;
    type Content = C;

    fn update(&self, f: impl FnOnce(&mut ShellModel<I, C>) -> bool) {
        f(&mut self.borrow_mut());
    }
}

/// Subscribes `shell` to the host's pointer streams.
///
/// The listeners stay registered until both returned guards are dropped.
pub fn attach<S: ShellHandle, H: Host>(shell: &S, host: &H) -> [H::Guard; 2] {
    let on_move = {
        let shell = shell.clone();
        host.on_pointer_move(Box::new(move |position| {
            shell.update(|model| model.pointer_move(position));
        }))
    };
    let on_down = {
        let shell = shell.clone();
        host.on_pointer_down(Box::new(move |target| {
            shell.update(|model| model.pointer_down(target));
        }))
    };
    [on_move, on_down]
}

impl<I: Copy + 'static, C: 'static> ShellModel<I, C> {
    /// Subscribes to the host's pointer streams for the lifetime of the
    /// returned [`MountedShell`].
    pub fn mount<H: Host>(self, host: &H) -> MountedShell<I, C, H::Guard> {
        let state = Rc::new(RefCell::new(self));
        let listeners = attach(&state, host);
        MountedShell {
            state,
            _listeners: listeners,
        }
    }
}

/// A shell attached to a host. Dropping it releases both listeners.
pub struct MountedShell<I, C, G> {
    state: Rc<RefCell<ShellModel<I, C>>>,
    _listeners: [G; 2],
}

impl<I, C, G> MountedShell<I, C, G> {
    pub fn state(&self) -> Ref<'_, ShellModel<I, C>> {
        self.state.borrow()
    }

    pub fn state_mut(&self) -> RefMut<'_, ShellModel<I, C>> {
        self.state.borrow_mut()
    }
}
