//! Content panels for each section.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::config::APP_NAME;

stylance::import_crate_style!(css, "src/components/sections/sections.module.css");

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class=css::hero>
            <span class=css::heroIcon><Icon icon=ic::ROCKET /></span>
            <h1 class=css::heroTitle>{APP_NAME}</h1>
            <p class=css::lead>"Collect, swap and lock in one place."</p>
        </section>
    }
}

#[component]
pub fn Nfts() -> impl IntoView {
    view! {
        <Panel title="NFTs" icon=ic::NFTS>
            <p>"Browse and mint collection pieces."</p>
        </Panel>
    }
}

#[component]
pub fn Swap() -> impl IntoView {
    view! {
        <Panel title="Swap" icon=ic::SWAP>
            <p>"Exchange tokens at the current pool rate."</p>
        </Panel>
    }
}

#[component]
pub fn Lock() -> impl IntoView {
    view! {
        <Panel title="Lock" icon=ic::LOCK>
            <p>"Lock tokens for a fixed term to earn rewards."</p>
        </Panel>
    }
}

#[component]
pub fn Roadmap() -> impl IntoView {
    const MILESTONES: [(&str, &str); 4] = [
        ("Q1", "Token launch"),
        ("Q2", "NFT collection"),
        ("Q3", "Swap and lock"),
        ("Q4", "Governance"),
    ];

    view! {
        <Panel title="Roadmap" icon=ic::ROADMAP>
            <ol class=css::milestones>
                {MILESTONES
                    .into_iter()
                    .map(|(quarter, goal)| view! {
                        <li class=css::milestone>
                            <span class=css::quarter>{quarter}</span>
                            <span>{goal}</span>
                        </li>
                    })
                    .collect_view()}
            </ol>
        </Panel>
    }
}

/// Common frame for the non-home panels.
#[component]
fn Panel(title: &'static str, icon: icondata::Icon, children: Children) -> impl IntoView {
    view! {
        <section class=css::panel>
            <h2 class=css::panelTitle>
                <span class=css::panelIcon><Icon icon=icon /></span>
                {title}
            </h2>
            {children()}
        </section>
    }
}
