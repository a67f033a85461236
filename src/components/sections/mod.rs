//! Section registry and content panels.
//!
//! The panels are self-contained: the shell only mounts and unmounts them.
//! Adding a section means adding a [`Section`] variant, a panel and one
//! registry entry below.

mod panels;

use icondata::Icon;
use leptos::prelude::*;
use pox_core::{Section, SectionEntry, SectionRegistry};

use crate::components::icons as ic;

/// Constructor for a section's content unit.
pub type ContentView = fn() -> AnyView;

/// The application's section registry.
pub type SiteRegistry = SectionRegistry<Icon, ContentView>;

/// Registered sections in menu order.
pub fn site_registry() -> SiteRegistry {
    let entries = [
        SectionEntry::new(Section::Home, "Home", ic::ROCKET, hero as ContentView).bare(),
        SectionEntry::new(Section::Nfts, "NFTs", ic::NFTS, nfts as ContentView),
        SectionEntry::new(Section::Swap, "Swap", ic::SWAP, swap as ContentView),
        SectionEntry::new(Section::Lock, "Lock", ic::LOCK, lock as ContentView),
        SectionEntry::new(Section::Roadmap, "Roadmap", ic::ROADMAP, roadmap as ContentView),
    ];

    let mut registry = SectionRegistry::new();
    for entry in entries {
        if let Err(err) = registry.register(entry) {
            log::warn!("{err}");
        }
    }
    registry
}

fn hero() -> AnyView {
    view! { <panels::Hero /> }.into_any()
}

fn nfts() -> AnyView {
    view! { <panels::Nfts /> }.into_any()
}

fn swap() -> AnyView {
    view! { <panels::Swap /> }.into_any()
}

fn lock() -> AnyView {
    view! { <panels::Lock /> }.into_any()
}

fn roadmap() -> AnyView {
    view! { <panels::Roadmap /> }.into_any()
}
