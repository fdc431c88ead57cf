//! Endpoint record loading
//!
//! Records are produced ahead of time by the OpenAPI collection step and
//! arrive as JSON or YAML files. A file may hold a single record, a list of
//! records, or the `{ "openApi": { "id", "path" } }` node returned by the
//! page query (optionally wrapped in `{ "data": ... }`).

mod model;

use std::path::Path;

use heck::ToKebabCase;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{RecordError, Result};

pub use model::{
    BodySchema, Endpoint, Parameter, ParameterLocation, Response, SecurityRequirement,
};

/// A loaded endpoint record
#[derive(Debug, Clone)]
pub struct EndpointRecord {
    /// Node id from the query, when the file carried one
    pub id: Option<String>,
    pub endpoint: Endpoint,
}

#[derive(Debug, Deserialize)]
struct QueryData {
    #[serde(rename = "openApi")]
    open_api: OpenApiNode,
}

#[derive(Debug, Deserialize)]
struct OpenApiNode {
    #[serde(default)]
    id: Option<String>,
    path: Endpoint,
}

impl EndpointRecord {
    pub fn new(endpoint: Endpoint) -> Self {
        Self { id: None, endpoint }
    }

    /// File-name slug: the kebab-cased operation id, or method and path
    pub fn slug(&self) -> String {
        let base = match self.endpoint.operation_id.as_deref() {
            Some(op) if !op.trim().is_empty() => op.to_string(),
            _ => format!("{} {}", self.endpoint.method, self.endpoint.api_path),
        };
        let slug = base
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { ' ' })
            .collect::<String>()
            .to_kebab_case();

        if slug.is_empty() {
            "endpoint".to_string()
        } else {
            slug
        }
    }

    /// Check the invariants a page render relies on
    pub fn validate(&self) -> std::result::Result<(), RecordError> {
        let invalid = |reason: &str| RecordError::Invalid {
            endpoint: self.endpoint.label(),
            reason: reason.to_string(),
        };

        if self.endpoint.method.trim().is_empty() {
            return Err(invalid("method is empty"));
        }
        if self.endpoint.api_path.trim().is_empty() {
            return Err(invalid("apiPath is empty"));
        }
        if self.endpoint.responses.is_empty() {
            return Err(invalid("at least one response is required"));
        }
        Ok(())
    }
}

/// Parse records from file contents. `yaml` selects the YAML parser.
///
/// The shape is picked from the top level (`data`, `openApi`, a list, or a
/// single endpoint) before the endpoint itself is deserialized, so field
/// errors name the offending field.
pub fn parse_records(
    contents: &str,
    yaml: bool,
) -> std::result::Result<Vec<EndpointRecord>, RecordError> {
    let value: Value = if yaml {
        serde_yaml::from_str(contents)?
    } else {
        serde_json::from_str(contents)?
    };

    let records = match value {
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(i, item)| {
                serde_json::from_value(item)
                    .map(EndpointRecord::new)
                    .map_err(|e| RecordError::ParseError(format!("record {}: {}", i, e)))
            })
            .collect::<std::result::Result<Vec<_>, _>>()?,
        Value::Object(mut map) => {
            if let Some(data) = map.remove("data") {
                vec![node_record(serde_json::from_value::<QueryData>(data)?.open_api)]
            } else if map.contains_key("openApi") {
                let data: QueryData = serde_json::from_value(Value::Object(map))?;
                vec![node_record(data.open_api)]
            } else {
                vec![EndpointRecord::new(serde_json::from_value(Value::Object(map))?)]
            }
        }
        other => {
            return Err(RecordError::ParseError(format!(
                "expected an endpoint object or a list of endpoints, found {}",
                kind_of(&other)
            )));
        }
    };

    for record in &records {
        record.validate()?;
    }
    Ok(records)
}

fn node_record(node: OpenApiNode) -> EndpointRecord {
    EndpointRecord {
        id: node.id,
        endpoint: node.path,
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

/// Load every record from a JSON or YAML file
pub fn load_records(path: &Path) -> Result<Vec<EndpointRecord>> {
    if !path.exists() {
        return Err(RecordError::NotFound(path.display().to_string()).into());
    }

    let yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );
    let contents = std::fs::read_to_string(path)?;
    let records = parse_records(&contents, yaml)?;

    if records.is_empty() {
        return Err(RecordError::Empty(path.display().to_string()).into());
    }

    log::debug!(
        "Loaded {} endpoint record(s) from {}",
        records.len(),
        path.display()
    );
    Ok(records)
}

/// Load a file that must hold exactly one record
pub fn load_single(path: &Path) -> Result<EndpointRecord> {
    let mut records = load_records(path)?;
    if records.len() != 1 {
        return Err(RecordError::NotSingle {
            count: records.len(),
        }
        .into());
    }
    Ok(records.remove(0))
}
