//! Utility modules for DOM and Web API access.
//!
//! Provides:
//! - [`dom`] - Window/viewport access and pointer-target containment
//! - [`host`] - Browser pointer listeners feeding the shell

pub mod dom;
pub mod host;
