//! UI components built with Leptos.
//!
//! - [`Shell`] - Page frame: background, navigation bar, active section
//! - [`background`] - Pointer glow and floating particles
//! - [`nav`] - Desktop and mobile navigation menus
//! - [`view_switcher`] - Mounts the active section's content
//! - [`page`] - Enter transition wrapper keyed by section
//! - [`footer`] - Shared footer shown under non-home sections
//! - [`sections`] - Section registry and content panels
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod background;
pub mod footer;
pub mod icons;
pub mod nav;
pub mod page;
pub mod sections;
pub mod shell;
pub mod view_switcher;

pub use shell::Shell;
