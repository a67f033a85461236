//! Application configuration.
//!
//! Centralizes the constants used throughout the application. Tunable shell
//! parameters live in `assets/config/shell.toml`, embedded at compile time.

use std::time::Duration;

use pox_core::{OutsideClickDetector, ShellConfig};

// =============================================================================
// Application Metadata
// =============================================================================

/// Brand name shown in the navigation bar.
pub const APP_NAME: &str = "POX";

// =============================================================================
// Outside-Click Markers
// =============================================================================

/// Plain (unhashed) class marking the open mobile menu surface.
pub const MOBILE_MENU_MARKER: &str = "mobile-menu";

/// Plain (unhashed) class marking the mobile menu trigger button.
pub const MENU_TRIGGER_MARKER: &str = "menu-trigger";

/// Pointer-downs outside both surfaces close the mobile menu.
pub const OUTSIDE_CLICK: OutsideClickDetector =
    OutsideClickDetector::new(MOBILE_MENU_MARKER, MENU_TRIGGER_MARKER);

// =============================================================================
// Transitions
// =============================================================================

/// Exit animation of the outgoing section; matches `page.module.css`.
pub const PAGE_EXIT: Duration = Duration::from_millis(200);

/// Exit animation of the mobile menu panel; matches `nav.module.css`.
pub const MENU_EXIT: Duration = Duration::from_millis(200);

// =============================================================================
// Shell Configuration
// =============================================================================

/// Raw shell configuration document.
const SHELL_CONFIG_TOML: &str = include_str!("../assets/config/shell.toml");

/// Parse the embedded shell configuration.
///
/// Falls back to [`ShellConfig::default`] if the document is invalid.
pub fn shell_config() -> ShellConfig {
    ShellConfig::from_toml(SHELL_CONFIG_TOML).unwrap_or_else(|err| {
        log::warn!("{err}; using default shell config");
        ShellConfig::default()
    })
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
