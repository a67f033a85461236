//! Main shell component.
//!
//! Page frame composing the decorative background, the navigation bar and
//! the active section.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::background::Background;
use crate::components::nav::Navbar;
use crate::components::view_switcher::ViewSwitcher;
use crate::utils::host::use_host_listeners;

stylance::import_crate_style!(css, "src/components/shell.module.css");

/// Shell component.
///
/// Subscribes the shell state to the window `mousemove` and document
/// `mousedown` streams when it mounts; both listeners are removed when its
/// owner is disposed.
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    use_host_listeners(&ctx.shell);

    view! {
        <div class=css::shell>
            <Background pointer=ctx.shell.pointer() />
            <Navbar />
            <main class=css::main>
                <ViewSwitcher />
            </main>
        </div>
    }
}
