//! Error types for the navigation core.
//!
//! - [`NavigationError`] - Rejected section requests and registry misuse
//! - [`ConfigError`] - Shell configuration parsing and validation

use thiserror::Error;

use crate::section::Section;

/// Errors raised by the section registry and navigation model.
///
/// None of these are fatal to the shell: the UI layer logs them and leaves
/// the current state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// Identifier does not name any known section.
    #[error("unknown section identifier: {0:?}")]
    UnknownSection(String),
    /// Section is known but not part of the registered set.
    #[error("section `{0}` is not registered")]
    Unregistered(Section),
    /// Section was registered more than once.
    #[error("section `{0}` is already registered")]
    DuplicateSection(Section),
    /// A navigation model needs at least one section to be active.
    #[error("no sections registered")]
    EmptyRegistry,
}

/// Errors raised while loading [`ShellConfig`](crate::config::ShellConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// TOML could not be parsed into the configuration schema.
    #[error("failed to parse shell config: {0}")]
    Parse(#[from] toml::de::Error),
    /// A `min`/`max` pair is inverted or not finite.
    #[error("invalid range for `{field}`: {min}..{max}")]
    InvalidRange {
        field: &'static str,
        min: f64,
        max: f64,
    },
}
