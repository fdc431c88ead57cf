//! Parameter grouping and definition-list rendering

use maud::{Markup, PreEscaped, html};

use super::inline::format_description;
use crate::record::{BodySchema, Parameter, ParameterLocation};

/// Path and query parameters, each in input order
#[derive(Debug, Default)]
pub struct ParameterGroups<'a> {
    pub path: Vec<&'a Parameter>,
    pub query: Vec<&'a Parameter>,
}

/// Split parameters by location. Header, cookie and unknown locations are
/// not listed on the page.
pub fn partition(params: &[Parameter]) -> ParameterGroups<'_> {
    let mut groups = ParameterGroups::default();
    for param in params {
        match param.location {
            ParameterLocation::Path => groups.path.push(param),
            ParameterLocation::Query => groups.query.push(param),
            ParameterLocation::Header | ParameterLocation::Cookie | ParameterLocation::Other => {}
        }
    }
    groups
}

/// One row of a parameter list
#[derive(Debug, Clone, PartialEq)]
pub struct ParamEntry {
    pub name: String,
    pub kind: Option<String>,
    pub required: bool,
    pub description: Option<String>,
}

impl From<&Parameter> for ParamEntry {
    fn from(param: &Parameter) -> Self {
        Self {
            name: param.name.clone(),
            kind: param
                .schema
                .as_ref()
                .and_then(|s| s.kind.clone())
                .filter(|k| !k.is_empty()),
            required: param.required,
            description: param.description.clone().filter(|d| !d.is_empty()),
        }
    }
}

/// Entries for each body property, in schema order
pub fn body_entries(schema: &BodySchema) -> Vec<ParamEntry> {
    schema
        .properties
        .iter()
        .map(|(name, prop)| ParamEntry {
            name: name.clone(),
            kind: prop.kind.clone().filter(|k| !k.is_empty()),
            required: schema.required.iter().any(|r| r == name),
            description: prop.description.clone().filter(|d| !d.is_empty()),
        })
        .collect()
}

/// Render entries as a definition list
pub fn render_params(entries: &[ParamEntry]) -> Markup {
    html! {
        dl.api-params {
            @for entry in entries {
                dt {
                    div {
                        code { (entry.name) }
                        @if let Some(kind) = &entry.kind {
                            em { " (" (kind) ")" }
                        }
                    }
                    @if entry.required {
                        div.required { "REQUIRED" }
                    }
                }
                @if let Some(description) = &entry.description {
                    dd { (PreEscaped(format_description(description))) }
                }
            }
        }
    }
}

/// Render a titled parameter section, or nothing when there are no entries
pub fn render_section(title: &str, entries: &[ParamEntry]) -> Option<Markup> {
    if entries.is_empty() {
        return None;
    }
    Some(html! {
        div.api-info-row {
            h3 { (title) }
            (render_params(entries))
        }
    })
}
