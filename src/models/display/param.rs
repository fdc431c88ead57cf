//! Parameter display model

use serde::Serialize;
use tabled::Tabled;

use super::common::{EMPTY_CELL, single_line, truncate_string};
use crate::render::ParamEntry;

const DESCRIPTION_WIDTH: usize = 60;

/// Parameter row for table/JSON output
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ParamDisplay {
    /// Where the parameter goes: path, query or body
    #[tabled(rename = "IN")]
    pub location: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "TYPE")]
    #[serde(rename = "type")]
    pub kind: String,

    #[tabled(rename = "REQUIRED")]
    pub required: bool,

    #[tabled(rename = "DESCRIPTION")]
    pub description: String,
}

impl ParamDisplay {
    pub fn new(location: &str, entry: &ParamEntry) -> Self {
        Self {
            location: location.to_string(),
            name: entry.name.clone(),
            kind: entry.kind.clone().unwrap_or_else(|| EMPTY_CELL.to_string()),
            required: entry.required,
            description: entry
                .description
                .as_deref()
                .map(|d| truncate_string(&single_line(d), DESCRIPTION_WIDTH))
                .unwrap_or_else(|| EMPTY_CELL.to_string()),
        }
    }
}
