//! Display model implementations for table and JSON output
//!
//! Display models turn endpoint record parts into rows with column names and
//! serialization suited to the CLI.

mod common;
mod param;
mod response;
mod scope;

pub use param::ParamDisplay;
pub use response::ResponseDisplay;
pub use scope::ScopeDisplay;
