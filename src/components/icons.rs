//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuLock as Lock, LuMap as Roadmap, LuMenu as Menu, LuPaintbrush as Nfts,
        LuRefreshCw as Swap, LuRocket as Rocket, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowRepeat as Swap, BsBrush as Nfts, BsList as Menu, BsLockFill as Lock,
        BsRocket as Rocket, BsSignpostSplit as Roadmap, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(ROCKET, Rocket);
themed_icon!(NFTS, Nfts);
themed_icon!(SWAP, Swap);
themed_icon!(LOCK, Lock);
themed_icon!(ROADMAP, Roadmap);
themed_icon!(MENU, Menu);
themed_icon!(CLOSE, Close);
