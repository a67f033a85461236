//! Root application module.
//!
//! Contains the main App component, the [`AppContext`] shared by every
//! component, and the [`ShellContext`] wrapping the shell state.

use icondata::Icon;
use leptos::prelude::*;
use pox_core::{
    MountPlan, NavItem, NavigationError, PointerPosition, Section, ShellConfig, ShellHandle,
    ShellModel, SwitchOutcome,
};

use crate::components::Shell;
use crate::components::sections::{ContentView, SiteRegistry, site_registry};
use crate::config::{OUTSIDE_CLICK, shell_config};

/// Shell state of this site.
pub type SiteShell = ShellModel<Icon, ContentView>;

// ============================================================================
// ShellContext
// ============================================================================

/// Reactive handle to the [`SiteShell`].
///
/// The model lives in one signal. Components read memoized slices of it, so
/// a pointer move only wakes the glow and a rejected or repeated selection
/// wakes nothing.
#[derive(Clone, Copy)]
pub struct ShellContext {
    model: RwSignal<SiteShell>,
    active: Memo<Section>,
    menu_open: Memo<bool>,
    pointer: Memo<PointerPosition>,
    mounted: Memo<Option<MountPlan>>,
}

impl ShellContext {
    pub fn new(shell: SiteShell) -> Self {
        let model = RwSignal::new(shell);
        Self {
            model,
            active: Memo::new(move |_| model.with(|s| s.navigation().active())),
            menu_open: Memo::new(move |_| model.with(|s| s.menu().is_open())),
            pointer: Memo::new(move |_| model.with(SiteShell::pointer)),
            mounted: Memo::new(move |_| model.with(|s| s.view().current())),
        }
    }

    /// Currently active section (tracked).
    pub fn active(&self) -> Section {
        self.active.get()
    }

    /// Whether the mobile menu is open (tracked).
    pub fn menu_open(&self) -> bool {
        self.menu_open.get()
    }

    /// Last pointer position (tracked).
    pub fn pointer(&self) -> Signal<PointerPosition> {
        self.pointer.into()
    }

    /// Mount plan of the visible section (tracked).
    pub fn mounted(&self) -> Option<MountPlan> {
        self.mounted.get()
    }

    /// Menu items in registration order; re-evaluates only when the active
    /// section changes.
    pub fn nav_items(&self) -> Vec<NavItem<Icon>> {
        self.active.track();
        self.model.with_untracked(SiteShell::nav_items)
    }

    /// Content constructor registered for `section`.
    pub fn content(&self, section: Section) -> Option<ContentView> {
        self.model
            .with_untracked(|s| s.registry().get(section).map(|entry| entry.content))
    }

    /// Desktop selection.
    pub fn select(&self, section: Section) {
        self.model.maybe_update(|s| match s.activate(section) {
            Ok(outcome) => outcome != SwitchOutcome::Unchanged,
            Err(err) => rejected(&err),
        });
    }

    /// Mobile selection: navigates and closes the menu in one update.
    pub fn select_from_menu(&self, section: Section) {
        self.model.maybe_update(|s| match s.select_from_menu(section) {
            Ok(_) => true,
            Err(err) => rejected(&err),
        });
    }

    pub fn toggle_menu(&self) {
        self.model.update(|s| s.toggle_menu());
    }
}

fn rejected(err: &NavigationError) -> bool {
    log::debug!("navigation request ignored: {err}");
    false
}

impl ShellHandle for ShellContext {
    type Icon = Icon;
    type Content = ContentView;

    fn update(&self, f: impl FnOnce(&mut SiteShell) -> bool) {
        self.model.maybe_update(f);
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide context, provided at the root of the component tree.
///
/// - **shell**: navigation, mobile menu, pointer and mounted view
/// - **config**: shell configuration loaded at startup
#[derive(Clone, Copy)]
pub struct AppContext {
    pub shell: ShellContext,
    pub config: StoredValue<ShellConfig>,
}

impl AppContext {
    /// Creates the context with the first registered section active.
    pub fn new(sections: SiteRegistry, config: ShellConfig) -> Result<Self, NavigationError> {
        let shell = ShellModel::new(sections, OUTSIDE_CLICK)?;
        Ok(Self {
            shell: ShellContext::new(shell),
            config: StoredValue::new(config),
        })
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the main Shell component
#[component]
pub fn App() -> impl IntoView {
    let shell = AppContext::new(site_registry(), shell_config()).map(|ctx| {
        provide_context(ctx);
        view! { <Shell /> }
    });

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #111827;
                    color: #e5e7eb;
                    font-family: system-ui, sans-serif;
                ">
                    <h1 style="color: #facc15; margin-bottom: 1rem;">
                        "Something went wrong"
                    </h1>
                    <ul style="color: #9ca3af; margin-bottom: 2rem;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                        style="
                            background: rgba(250, 204, 21, 0.2);
                            color: #facc15;
                            border: none;
                            padding: 0.75rem 2rem;
                            border-radius: 0.5rem;
                            cursor: pointer;
                        "
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            {shell}
        </ErrorBoundary>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn active_items(shell: ShellContext) -> Vec<Section> {
        shell
            .nav_items()
            .into_iter()
            .filter(|item| item.active)
            .map(|item| item.section)
            .collect()
    }

    #[test]
    fn test_items_rebuild_only_when_active_changes() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = AppContext::new(site_registry(), ShellConfig::default()).unwrap();
            let builds = Arc::new(AtomicUsize::new(0));
            let items = Memo::new({
                let builds = Arc::clone(&builds);
                move |_| {
                    builds.fetch_add(1, Ordering::Relaxed);
                    active_items(ctx.shell)
                }
            });

            assert_eq!(items.get_untracked(), [Section::Home]);
            assert_eq!(builds.load(Ordering::Relaxed), 1);

            ctx.shell.select(Section::Home);
            ShellHandle::update(&ctx.shell, |s| {
                s.pointer_move(PointerPosition::new(3.0, 4.0))
            });
            assert_eq!(items.get_untracked(), [Section::Home]);
            assert_eq!(builds.load(Ordering::Relaxed), 1);

            ctx.shell.select(Section::Swap);
            assert_eq!(items.get_untracked(), [Section::Swap]);
            assert_eq!(builds.load(Ordering::Relaxed), 2);
        });
    }

    #[test]
    fn test_menu_selection_closes_even_when_already_active() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = AppContext::new(site_registry(), ShellConfig::default()).unwrap();
            ctx.shell.toggle_menu();
            assert!(ctx.shell.menu_open.get_untracked());

            ctx.shell.select_from_menu(Section::Home);
            assert!(!ctx.shell.menu_open.get_untracked());
            assert_eq!(ctx.shell.mounted.get_untracked().map(|p| p.section), Some(Section::Home));
        });
    }
}
