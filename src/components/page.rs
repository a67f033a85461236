//! Transition wrapper around the mounted section.

use leptos::prelude::*;
use pox_core::Section;

stylance::import_crate_style!(css, "src/components/page.module.css");

/// Wraps one section's content.
///
/// A fresh `Page` is created for every section switch, so the enter
/// animation runs once per section. While `leaving` is set the exit
/// animation plays instead.
#[component]
pub fn Page(
    section: Section,
    #[prop(into)] leaving: Signal<bool>,
    children: Children,
) -> impl IntoView {
    let class = move || {
        if leaving.get() {
            format!("{} {}", css::page, css::leaving)
        } else {
            css::page.to_string()
        }
    };

    view! {
        <div class=class data-section=section.id()>
            {children()}
        </div>
    }
}
