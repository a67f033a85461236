//! Listener lifecycle of a mounted shell against the in-memory host.

use std::cell::RefCell;
use std::rc::Rc;

use pox_core::mock::{FakeHost, FakeTarget};
use pox_core::{
    Host, OutsideClickDetector, PointerPosition, Section, SectionEntry, SectionRegistry, ShellModel,
};

fn site_shell() -> ShellModel<&'static str, ()> {
    let mut registry = SectionRegistry::new();
    let entries = [
        SectionEntry::new(Section::Home, "Home", "rocket", ()).bare(),
        SectionEntry::new(Section::Nfts, "NFTs", "paintbrush", ()),
        SectionEntry::new(Section::Swap, "Swap", "arrows-rotate", ()),
        SectionEntry::new(Section::Lock, "Lock", "lock", ()),
        SectionEntry::new(Section::Roadmap, "Roadmap", "road", ()),
    ];
    for entry in entries {
        registry.register(entry).unwrap();
    }
    ShellModel::new(
        registry,
        OutsideClickDetector::new("mobile-menu", "menu-trigger"),
    )
    .unwrap()
}

#[test]
fn teardown_releases_both_listeners() {
    let host = FakeHost::new();
    let mounted = site_shell().mount(&host);
    assert_eq!((host.move_listeners(), host.down_listeners()), (1, 1));

    drop(mounted);
    assert_eq!((host.move_listeners(), host.down_listeners()), (0, 0));
}

#[test]
fn remount_does_not_duplicate_listeners() {
    let host = FakeHost::new();

    for _ in 0..5 {
        let mounted = site_shell().mount(&host);
        assert_eq!(host.dispatch_move(2.0, 3.0), 1);
        assert_eq!(host.dispatch_down(&FakeTarget::new(["page"])), 1);
        assert_eq!(mounted.state().pointer(), PointerPosition::new(2.0, 3.0));
    }

    assert_eq!(host.registrations(), 10);
    assert_eq!(host.dispatch_move(0.0, 0.0), 0);
    assert_eq!(host.dispatch_down(&FakeTarget::default()), 0);
}

#[test]
fn pointer_burst_keeps_last_position() {
    let host = FakeHost::new();
    let mounted = site_shell().mount(&host);

    for (x, y) in [(1.0, 1.0), (5.0, 5.0), (9.0, 9.0)] {
        host.dispatch_move(x, y);
    }
    assert_eq!(mounted.state().pointer(), PointerPosition::new(9.0, 9.0));
}

#[test]
fn outside_pointer_down_closes_menu_only_while_open() {
    let host = FakeHost::new();
    let mounted = site_shell().mount(&host);

    host.dispatch_down(&FakeTarget::new(["page"]));
    assert!(!mounted.state().menu().is_open());

    mounted.state_mut().toggle_menu();
    host.dispatch_down(&FakeTarget::new(["icon", "menu-trigger"]));
    assert!(mounted.state().menu().is_open());
    host.dispatch_down(&FakeTarget::new(["label", "mobile-menu"]));
    assert!(mounted.state().menu().is_open());

    host.dispatch_down(&FakeTarget::new(["page", "main"]));
    assert!(!mounted.state().menu().is_open());
}

#[test]
fn menu_selection_navigates_and_closes() {
    let host = FakeHost::new();
    let mounted = site_shell().mount(&host);

    mounted.state_mut().toggle_menu();
    mounted
        .state_mut()
        .select_from_menu(Section::Swap)
        .unwrap();

    let state = mounted.state();
    assert!(!state.menu().is_open());
    assert_eq!(state.navigation().active(), Section::Swap);
    assert_eq!(state.view().mounted_units(), 2);

    let icons: Vec<_> = state
        .nav_items()
        .into_iter()
        .filter(|item| item.active)
        .map(|item| item.icon)
        .collect();
    assert_eq!(icons, ["arrows-rotate"]);
}

#[test]
fn dropping_a_guard_from_a_handler_is_safe() {
    let host = FakeHost::new();
    let mounted = site_shell().mount(&host);
    let slot = Rc::new(RefCell::new(Some(mounted)));

    let _watcher = {
        let slot = Rc::clone(&slot);
        host.on_pointer_move(Box::new(move |_| {
            slot.borrow_mut().take();
        }))
    };

    // The shell's own handler runs first, then the watcher unmounts it.
    assert_eq!(host.dispatch_move(1.0, 1.0), 2);
    assert_eq!(host.move_listeners(), 1);
    assert_eq!(host.down_listeners(), 0);
}
