//! Mobile navigation: trigger button and slide-in section menu.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::{css, item_class, use_nav_items};
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{MENU_EXIT, MENU_TRIGGER_MARKER, MOBILE_MENU_MARKER};

/// Button toggling the mobile menu (mobile only).
#[component]
pub fn MenuTrigger() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let is_open = Signal::derive(move || ctx.shell.menu_open());

    view! {
        <button
            class=format!("{} {}", css::trigger, MENU_TRIGGER_MARKER)
            on:click=move |_| ctx.shell.toggle_menu()
            aria-expanded=move || is_open.get().to_string()
            title=move || if is_open.get() { "Close menu" } else { "Open menu" }
        >
            {move || if is_open.get() {
                view! { <Icon icon=ic::CLOSE /> }.into_any()
            } else {
                view! { <Icon icon=ic::MENU /> }.into_any()
            }}
        </button>
    }
}

/// Slide-in section menu (mobile only).
///
/// Selecting a section navigates and closes the menu in one update. Outside
/// pointer-downs are handled by the shell's document listener; the panel
/// only carries the marker class that listener checks.
#[component]
pub fn MobileNav() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let items = use_nav_items();
    let is_open = Signal::derive(move || ctx.shell.menu_open());

    view! {
        <AnimatedShow
            when=is_open
            show_class=css::panelShow
            hide_class=css::panelHide
            hide_delay=MENU_EXIT
        >
            <div class=format!("{} {}", css::mobilePanel, MOBILE_MENU_MARKER)>
                <div class=css::mobileList>
                    {move || {
                        items
                            .get()
                            .into_iter()
                            .map(|item| {
                                let section = item.section;
                                view! {
                                    <button
                                        class=item_class(css::mobileItem, item.active)
                                        aria-current=item.active.then_some("page")
                                        on:click=move |_| ctx.shell.select_from_menu(section)
                                    >
                                        <Icon icon=item.icon />
                                        <span>{item.label}</span>
                                    </button>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>
        </AnimatedShow>
    }
}
