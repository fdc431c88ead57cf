//! Display models for CLI output
//!
//! This module converts endpoint records into CLI-friendly display rows for
//! the inspection commands.

pub mod display;

pub use display::{ParamDisplay, ResponseDisplay, ScopeDisplay};
