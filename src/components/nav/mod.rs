//! Navigation bar.
//!
//! Components:
//! - [`Navbar`] - Fixed top bar with brand, desktop menu and mobile trigger
//! - [`DesktopNav`] - Inline section buttons (desktop only)
//! - [`MenuTrigger`], [`MobileNav`] - Slide-in section menu (mobile only)

mod desktop;
mod mobile;

use leptos::prelude::*;
use leptos_icons::Icon;
use pox_core::NavItem;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::APP_NAME;

pub use desktop::DesktopNav;
pub use mobile::{MenuTrigger, MobileNav};

stylance::import_crate_style!(css, "src/components/nav/nav.module.css");

/// Menu items in registration order with the active one flagged.
///
/// Rebuilt only when the active section changes.
fn use_nav_items() -> Signal<Vec<NavItem<icondata::Icon>>> {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    Signal::derive(move || ctx.shell.nav_items())
}

/// Class for a section button, highlighting the active one.
fn item_class(base: &str, active: bool) -> String {
    if active {
        format!("{} {}", base, css::itemActive)
    } else {
        format!("{} {}", base, css::itemIdle)
    }
}

/// Fixed navigation bar.
#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class=css::navbar>
            <div class=css::bar>
                <div class=css::brand>
                    <span class=css::brandIcon><Icon icon=ic::ROCKET /></span>
                    <span class=css::brandName>{APP_NAME}</span>
                </div>
                <DesktopNav />
                <MenuTrigger />
            </div>
            <MobileNav />
        </nav>
    }
}
