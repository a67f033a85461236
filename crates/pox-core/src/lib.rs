//! Navigation core for the POX single-page shell.
//!
//! Target-agnostic state and logic, rendered by the web crate:
//! - [`Section`], [`SectionRegistry`] - Navigable sections and their metadata
//! - [`NavigationModel`] - The single active section
//! - [`MobileMenu`], [`nav_items`] - Menu controls and mobile visibility
//! - [`OutsideClickDetector`] - Dismissal on outside pointer-down
//! - [`PointerTracker`] - Last pointer position for the background glow
//! - [`ViewSwitcher`] - Exclusive mounting of section content
//! - [`generate_particles`] - Decorative background particles
//! - [`ShellModel`], [`attach`] - Shell composition wired to a [`Host`]

pub mod config;
pub mod error;
pub mod host;
pub mod menu;
pub mod navigation;
pub mod outside;
pub mod particles;
pub mod pointer;
pub mod section;
pub mod shell;
pub mod view;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use config::{ParticleConfig, ShellConfig, Span};
pub use error::{ConfigError, NavigationError};
pub use host::Host;
pub use menu::{MenuEvent, MenuVisibility, MobileMenu, NavItem, nav_items};
pub use navigation::NavigationModel;
pub use outside::{Containment, OutsideClickDetector};
pub use particles::{Particle, Viewport, generate_particles, random_particles};
pub use pointer::{PointerPosition, PointerTracker};
pub use section::{Chrome, Section, SectionEntry, SectionRegistry};
pub use shell::{MountedShell, ShellHandle, ShellModel, attach};
pub use view::{MountPlan, SwitchOutcome, ViewSwitcher};
