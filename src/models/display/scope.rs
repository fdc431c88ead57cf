//! Security scope display model

use serde::Serialize;
use tabled::Tabled;

/// Scope row for table/JSON output
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ScopeDisplay {
    #[tabled(rename = "SCHEME")]
    pub scheme: String,

    #[tabled(rename = "SCOPE")]
    pub scope: String,
}

impl ScopeDisplay {
    /// One row per scope of a scheme
    pub fn rows(scheme: &str, scopes: &[String]) -> Vec<Self> {
        scopes
            .iter()
            .map(|scope| Self {
                scheme: scheme.to_string(),
                scope: scope.clone(),
            })
            .collect()
    }
}
