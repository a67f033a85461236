//! Mounts the content of the active section.

use leptos::prelude::*;
use pox_core::MountPlan;

use crate::app::AppContext;
use crate::components::footer::Footer;
use crate::components::page::Page;
use crate::config::PAGE_EXIT;

/// Renders exactly one section at a time.
///
/// When the mount plan changes, the visible [`Page`] plays its exit
/// animation and is then disposed (running its cleanups) before the next
/// one is built. Re-selecting the active section does not remount.
#[component]
pub fn ViewSwitcher() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let shown = RwSignal::new(untrack(|| ctx.shell.mounted()));
    let leaving = RwSignal::new(false);

    Effect::new(move |_| {
        if ctx.shell.mounted() == shown.get_untracked() {
            return;
        }
        leaving.set(true);
        set_timeout(
            move || {
                // Several switches may land within one exit; show the latest.
                let latest = untrack(|| ctx.shell.mounted());
                if shown.get_untracked() != latest {
                    shown.set(latest);
                }
                leaving.set(false);
            },
            PAGE_EXIT,
        );
    });

    move || {
        shown.get().map(|MountPlan { section, footer }| {
            let content = ctx.shell.content(section);
            view! {
                <Page section=section leaving=leaving>
                    {content.map(|content| content())}
                    {footer.then(|| view! { <Footer /> })}
                </Page>
            }
        })
    }
}
