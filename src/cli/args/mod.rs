//! Shared CLI argument types
//!
//! This module contains reusable argument structs that can be flattened
//! into commands using `#[command(flatten)]`.

mod common;
mod global;
mod view;

pub use common::{OutputFormat, TabArg};
pub use global::GlobalOptions;
pub use view::ViewArgs;
