//! Desktop navigation menu.

use leptos::prelude::*;

use super::{css, item_class, use_nav_items};
use crate::app::AppContext;

/// One button per registered section, labels only.
#[component]
pub fn DesktopNav() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let items = use_nav_items();

    view! {
        <div class=css::desktopNav>
            {move || {
                items
                    .get()
                    .into_iter()
                    .map(|item| {
                        let section = item.section;
                        view! {
                            <button
                                class=item_class(css::desktopItem, item.active)
                                aria-current=item.active.then_some("page")
                                on:click=move |_| ctx.shell.select(section)
                            >
                                {item.label}
                            </button>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
