//! Shared footer shown beneath every non-home section.

use leptos::prelude::*;

use crate::config::APP_NAME;

stylance::import_crate_style!(css, "src/components/footer.module.css");

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class=css::footer>
            <span class=css::brand>{APP_NAME}</span>
            <span class=css::note>"Built on-chain. Not financial advice."</span>
        </footer>
    }
}
