//! Endpoint record models
//!
//! These mirror the records produced by the OpenAPI collection step. Field
//! names follow that output, which mixes camelCase (`apiPath`) and
//! snake_case (`status_code`).

use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::RenderError;

/// One API operation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoint {
    /// HTTP verb, any case
    pub method: String,

    /// Path template, e.g. `/api/0/projects/{org}/{project}/`
    pub api_path: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub readable_url: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub parameters: Vec<Parameter>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_body: Option<RequestBody>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub responses: Vec<Response>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub security: Vec<SecurityRequirement>,
}

/// Where a parameter is carried
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    Path,
    Query,
    Header,
    Cookie,
    #[serde(other)]
    Other,
}

/// A path, query, header or cookie parameter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,

    #[serde(rename = "in")]
    pub location: ParameterLocation,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub required: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<ParameterSchema>,
}

/// Type information for a parameter
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParameterSchema {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub variants: Option<Vec<Value>>,
}

/// Request body descriptor
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequestBody {
    #[serde(default, deserialize_with = "null_as_default")]
    pub required: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<RequestBodyContent>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequestBodyContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    /// Serialized JSON schema text
    #[serde(
        default,
        deserialize_with = "text_or_json",
        skip_serializing_if = "Option::is_none"
    )]
    pub schema: Option<String>,
}

/// Parsed request body schema
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BodySchema {
    #[serde(default)]
    pub properties: IndexMap<String, BodyProperty>,

    #[serde(default)]
    pub required: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BodyProperty {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Example value. A missing key is `None`; an explicit `null` is kept
    /// as `Some(Value::Null)` and still shows up in the example request.
    #[serde(
        default,
        deserialize_with = "present_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub example: Option<Value>,
}

/// One documented response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Response {
    /// Absent for the default/catch-all response
    #[serde(
        default,
        deserialize_with = "status_code",
        skip_serializing_if = "Option::is_none"
    )]
    pub status_code: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<ResponseContent>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResponseContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    /// Serialized example payload
    #[serde(
        default,
        deserialize_with = "text_or_json",
        skip_serializing_if = "Option::is_none"
    )]
    pub example: Option<String>,

    /// Serialized response schema
    #[serde(
        default,
        deserialize_with = "text_or_json",
        skip_serializing_if = "Option::is_none"
    )]
    pub schema: Option<String>,
}

/// Scheme name to required scopes. A `null` scope list means the scheme is
/// not part of this requirement.
pub type SecurityRequirement = BTreeMap<String, Option<Vec<String>>>;

impl Endpoint {
    /// Upper-cased HTTP verb
    pub fn verb(&self) -> String {
        self.method.to_uppercase()
    }

    /// Short label used in logs and errors, e.g. `GET /api/0/teams/`
    pub fn label(&self) -> String {
        format!("{} {}", self.verb(), self.api_path)
    }

    /// Page heading: the summary when present, otherwise the label
    pub fn title(&self) -> String {
        match self.summary.as_deref().map(str::trim) {
            Some(s) if !s.is_empty() => s.to_string(),
            _ => self.label(),
        }
    }

    /// Request body content type, if any
    pub fn content_type(&self) -> Option<&str> {
        self.request_body
            .as_ref()?
            .content
            .as_ref()?
            .content_type
            .as_deref()
    }

    /// Parse the request body schema text.
    ///
    /// Returns `Ok(None)` when the endpoint has no body schema.
    pub fn body_schema(&self) -> Result<Option<BodySchema>, RenderError> {
        let text = self
            .request_body
            .as_ref()
            .and_then(|b| b.content.as_ref())
            .and_then(|c| c.schema.as_deref());

        match text {
            None => Ok(None),
            Some(t) if t.trim().is_empty() => Ok(None),
            Some(t) => serde_json::from_str(t)
                .map(Some)
                .map_err(|e| RenderError::InvalidBodySchema(e.to_string())),
        }
    }
}

impl Response {
    /// Whether the schema tab can be shown for this response
    pub fn has_schema(&self) -> bool {
        self.schema().is_some()
    }

    /// Example payload text; blank text counts as absent
    pub fn example(&self) -> Option<&str> {
        self.content
            .as_ref()?
            .example
            .as_deref()
            .filter(|s| !s.trim().is_empty())
    }

    /// Schema text; blank text counts as absent
    pub fn schema(&self) -> Option<&str> {
        self.content
            .as_ref()?
            .schema
            .as_deref()
            .filter(|s| !s.trim().is_empty())
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn present_value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Accept either serialized text or an inline JSON/YAML value, which is
/// serialized to compact JSON text.
fn text_or_json<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(other) => serde_json::to_string(&other)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

/// Status codes arrive as strings from the collector but as integers from
/// hand-written YAML.
fn status_code<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "invalid status code: {}",
            other
        ))),
    }
}
