//! Decorative page background.
//!
//! A radial glow that follows the pointer plus a fixed set of floating
//! particles. Nothing here reads or writes navigation state.

use leptos::prelude::*;
use pox_core::{PointerPosition, random_particles};

use crate::app::AppContext;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/background.module.css");

#[component]
pub fn Background(#[prop(into)] pointer: Signal<PointerPosition>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // Generated once per mount; the CSS animation loops forever.
    let particles = ctx
        .config
        .with_value(|config| random_particles(&config.particles, dom::viewport()));

    view! {
        <div class=css::backdrop aria-hidden="true">
            <div class=css::glow style=move || pointer.get().css_vars()></div>
            {particles
                .into_iter()
                .map(|particle| view! { <div class=css::particle style=particle.style()></div> })
                .collect_view()}
        </div>
    }
}
