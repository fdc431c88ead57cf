//! Response display model

use serde::Serialize;
use tabled::Tabled;

use super::common::{EMPTY_CELL, single_line, truncate_string};
use crate::record::Response;

/// Response row for table/JSON output
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ResponseDisplay {
    /// Position in the endpoint's response list, used with `--response`
    #[tabled(rename = "#")]
    pub index: usize,

    #[tabled(rename = "STATUS")]
    pub status: String,

    #[tabled(rename = "DESCRIPTION")]
    pub description: String,

    #[tabled(rename = "EXAMPLE")]
    pub has_example: bool,

    #[tabled(rename = "SCHEMA")]
    pub has_schema: bool,
}

impl ResponseDisplay {
    pub fn new(index: usize, response: &Response) -> Self {
        Self {
            index,
            status: response
                .status_code
                .clone()
                .unwrap_or_else(|| "default".to_string()),
            description: if response.description.trim().is_empty() {
                EMPTY_CELL.to_string()
            } else {
                truncate_string(&single_line(&response.description), 60)
            },
            has_example: response.example().is_some(),
            has_schema: response.has_schema(),
        }
    }
}
