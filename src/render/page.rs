//! Full endpoint page

use maud::{DOCTYPE, Markup, PreEscaped, html};

use super::example::ExampleRequest;
use super::params::{ParamEntry, body_entries, partition, render_section};
use super::scopes::render_scopes;
use super::highlighter;
use super::view::{ResponseViewer, ViewState};
use crate::config::Config;
use crate::error::Result;
use crate::record::EndpointRecord;

/// Mirrors the viewer transitions in the browser: picking a status resets
/// the tab, picking a tab keeps the status.
const VIEWER_SCRIPT: &str = r#"
document.querySelectorAll('.api-block.response').forEach(function (block) {
  var state = { response: Number(block.dataset.response), tab: Number(block.dataset.tab) };
  function show() {
    block.querySelectorAll('.tabs-group').forEach(function (group) {
      group.hidden = Number(group.dataset.response) !== state.response;
    });
    block.querySelectorAll('.tab').forEach(function (tab) {
      tab.classList.toggle('selected', Number(tab.dataset.tab) === state.tab);
    });
    block.querySelectorAll('.response-status-btn').forEach(function (btn) {
      btn.classList.toggle('selected', Number(btn.dataset.response) === state.response);
    });
    block.querySelectorAll('pre[data-tab]').forEach(function (pre) {
      pre.hidden = !(Number(pre.dataset.response) === state.response &&
        Number(pre.dataset.tab) === state.tab);
    });
  }
  block.addEventListener('click', function (event) {
    var target = event.target.closest('[data-action]');
    if (!target) return;
    if (target.dataset.action === 'response') {
      state.response = Number(target.dataset.response);
      state.tab = 0;
    } else {
      state.tab = Number(target.dataset.tab);
    }
    show();
  });
});
"#;

const PAGE_STYLE: &str = "\
.api-params dt { display: flex; justify-content: space-between; }\
.api-params .required { font-size: 0.75em; font-weight: bold; }\
.api-block-example { white-space: pre-wrap; }\
.tab, .response-status-btn { cursor: pointer; }\
.tab.selected, .response-status-btn.selected { font-weight: bold; }";

/// A sidebar entry pointing at a sibling endpoint page
#[derive(Debug, Clone)]
pub struct SidebarLink {
    pub title: String,
    pub href: String,
    pub group: String,
    pub active: bool,
}

/// Page-level options
#[derive(Debug, Clone, Default)]
pub struct PageOptions {
    /// Initial viewer selection
    pub initial: ViewState,
    /// Sidebar links; no sidebar when empty
    pub sidebar: Vec<SidebarLink>,
}

/// Render a complete HTML document for one endpoint
pub fn render_page(
    record: &EndpointRecord,
    config: &Config,
    options: &PageOptions,
) -> Result<String> {
    let endpoint = &record.endpoint;
    log::debug!("Rendering page for {}", endpoint.label());

    let body_schema = endpoint.body_schema()?;
    let groups = partition(&endpoint.parameters);
    let path_entries: Vec<ParamEntry> = groups.path.into_iter().map(ParamEntry::from).collect();
    let query_entries: Vec<ParamEntry> = groups.query.into_iter().map(ParamEntry::from).collect();
    let body = body_schema.as_ref().map(body_entries).unwrap_or_default();
    let scopes = render_scopes(endpoint, config)?;
    let example = ExampleRequest::build(endpoint, body_schema.as_ref(), config);

    let mut viewer = ResponseViewer::new(&endpoint.responses, highlighter(config.highlight))?;
    viewer.select_response(options.initial.response)?;
    viewer.select_tab(options.initial.tab)?;
    let response_block = viewer.render_block();
    log::debug!(
        "Rendered {} response panel(s) with {} highlight run(s)",
        endpoint.responses.len(),
        viewer.highlight_runs()
    );

    let title = match &config.site_title {
        Some(site) => format!("{} | {}", endpoint.title(), site),
        None => endpoint.title(),
    };

    let content = html! {
        div.row {
            div."col-6" {
                @if let Some(summary) = &endpoint.summary {
                    p { (summary) }
                }
                @if let Some(description) = &endpoint.description {
                    div."pb-3".content-flush-bottom {
                        p { (description) }
                    }
                }
                @if let Some(section) = render_section("Path Parameters", &path_entries) {
                    (section)
                }
                @if let Some(section) = render_section("Query Parameters", &query_entries) {
                    (section)
                }
                @if let Some(section) = render_section("Body Parameters", &body) {
                    (section)
                }
                @if let Some(scopes) = &scopes {
                    (scopes)
                }
            }
            div."col-6" {
                div.api-block {
                    div.api-block-header.request {
                        span.api-request-block-verb { (endpoint.verb()) }
                        " "
                        span { (endpoint.api_path) }
                    }
                    pre.api-block-example.request { (example.command()) }
                }
                (response_block)
            }
        }
    };

    let document = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                @if let Some(url) = &endpoint.readable_url {
                    link rel="canonical" href=(url);
                }
                style { (PreEscaped(PAGE_STYLE)) }
            }
            body {
                @if !options.sidebar.is_empty() {
                    (render_sidebar(&options.sidebar))
                }
                main.api-page {
                    h1 { (endpoint.title()) }
                    (content)
                }
                script { (PreEscaped(VIEWER_SCRIPT)) }
            }
        }
    };

    Ok(document.into_string())
}

/// Links grouped by their first tag, in first-seen group order
fn render_sidebar(links: &[SidebarLink]) -> Markup {
    let mut groups: Vec<(&str, Vec<&SidebarLink>)> = Vec::new();
    for link in links {
        match groups.iter().position(|(name, _)| *name == link.group) {
            Some(i) => groups[i].1.push(link),
            None => groups.push((link.group.as_str(), vec![link])),
        }
    }

    html! {
        nav.api-sidebar {
            @for (name, members) in &groups {
                h4 { (name) }
                ul {
                    @for link in members {
                        li.active[link.active] {
                            a href=(link.href) { (link.title) }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, RenderError};
    use crate::record::parse_records;
    use crate::render::view::Tab;

    const ENDPOINT: &str = r#"{
        "method": "put",
        "apiPath": "/api/0/teams/{organization_slug}/{team_slug}/",
        "summary": "Update a Team",
        "readableUrl": "/api/teams/update-a-team/",
        "description": "Update various attributes & settings for the given team.",
        "parameters": [
            {"name": "organization_slug", "in": "path", "required": true,
             "schema": {"type": "string"}, "description": "The `slug` of the organization."},
            {"name": "team_slug", "in": "path", "required": true, "schema": {"type": "string"}},
            {"name": "detailed", "in": "query", "schema": {"type": "boolean"}}
        ],
        "requestBody": {"required": true, "content": {
            "content_type": "application/json",
            "schema": "{\"properties\": {\"slug\": {\"type\": \"string\", \"description\": \"Uniquely identifies a team.\", \"example\": \"the-obese-philosophers\"}}, \"required\": [\"slug\"]}"
        }},
        "responses": [
            {"status_code": "200", "description": "Success",
             "content": {"content_type": "application/json",
                         "example": "{\"slug\": \"the-obese-philosophers\"}",
                         "schema": "{\"type\": \"object\"}"}},
            {"status_code": "400", "description": "Bad Request"},
            {"status_code": "404", "description": "Team not found"}
        ],
        "security": [{"auth_token": ["team:write", "team:admin"]}]
    }"#;

    fn record() -> EndpointRecord {
        parse_records(ENDPOINT, false).unwrap().remove(0)
    }

    #[test]
    fn test_page_sections() {
        let html = render_page(&record(), &Config::default(), &PageOptions::default()).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Update a Team</title>"));
        assert!(html.contains("<h3>Path Parameters</h3>"));
        assert!(html.contains("<h3>Query Parameters</h3>"));
        assert!(html.contains("<h3>Body Parameters</h3>"));
        assert!(html.contains("<h3>Scopes</h3>"));
        assert!(html.contains("<code>team:admin</code>"));
        assert!(html.contains("Update various attributes &amp; settings"));
        assert!(html.contains("<span class=\"api-request-block-verb\">PUT</span>"));
        assert!(html.contains("<link rel=\"canonical\" href=\"/api/teams/update-a-team/\">"));
    }

    #[test]
    fn test_page_contains_example_request() {
        let html = render_page(&record(), &Config::default(), &PageOptions::default()).unwrap();

        assert!(html.contains(
            "curl https://sentry.io/api/0/teams/{organization_slug}/{team_slug}/ \\\n"
        ));
        assert!(html.contains(" -X PUT \\\n"));
        assert!(html.contains("-d '{&quot;slug&quot;:&quot;the-obese-philosophers&quot;}'"));
    }

    #[test]
    fn test_page_without_optional_sections() {
        let records = parse_records(
            r#"{"method": "get", "apiPath": "/api/0/", "responses": [{"description": "ok"}]}"#,
            false,
        )
        .unwrap();
        let html = render_page(&records[0], &Config::default(), &PageOptions::default()).unwrap();

        assert!(!html.contains("Path Parameters"));
        assert!(!html.contains("Query Parameters"));
        assert!(!html.contains("Body Parameters"));
        assert!(!html.contains("Scopes"));
        assert!(!html.contains("api-sidebar"));
        assert!(html.contains("<title>GET /api/0/</title>"));
    }

    #[test]
    fn test_page_missing_scheme_fails() {
        let mut config = Config::default();
        config.auth_scheme = "api_key".to_string();

        let err = render_page(&record(), &config, &PageOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            Error::Render(RenderError::MissingSecurityScheme(_))
        ));
    }

    #[test]
    fn test_page_initial_selection() {
        let options = PageOptions {
            initial: ViewState {
                response: 0,
                tab: Tab::Schema,
            },
            sidebar: Vec::new(),
        };
        let html = render_page(&record(), &Config::default(), &options).unwrap();
        assert!(html.contains("data-response=\"0\" data-tab=\"1\">"));
    }

    #[test]
    fn test_page_unavailable_initial_tab_fails() {
        let options = PageOptions {
            initial: ViewState {
                response: 1,
                tab: Tab::Schema,
            },
            sidebar: Vec::new(),
        };
        let err = render_page(&record(), &Config::default(), &options).unwrap_err();
        assert!(matches!(err, Error::Render(RenderError::TabUnavailable { .. })));
    }

    #[test]
    fn test_page_title_with_site() {
        let mut config = Config::default();
        config.site_title = Some("Sentry API".to_string());
        let html = render_page(&record(), &config, &PageOptions::default()).unwrap();
        assert!(html.contains("<title>Update a Team | Sentry API</title>"));
    }

    #[test]
    fn test_sidebar_groups_links() {
        let options = PageOptions {
            initial: ViewState::default(),
            sidebar: vec![
                SidebarLink {
                    title: "Update a Team".to_string(),
                    href: "update-a-team.html".to_string(),
                    group: "Teams".to_string(),
                    active: true,
                },
                SidebarLink {
                    title: "List Projects".to_string(),
                    href: "list-projects.html".to_string(),
                    group: "Projects".to_string(),
                    active: false,
                },
                SidebarLink {
                    title: "Delete a Team".to_string(),
                    href: "delete-a-team.html".to_string(),
                    group: "Teams".to_string(),
                    active: false,
                },
            ],
        };
        let html = render_page(&record(), &Config::default(), &options).unwrap();

        assert_eq!(html.matches("<h4>").count(), 2);
        assert!(html.contains("<li class=\"active\"><a href=\"update-a-team.html\">"));
        let teams = html.find("<h4>Teams</h4>").unwrap();
        let projects = html.find("<h4>Projects</h4>").unwrap();
        let delete = html.find("delete-a-team.html").unwrap();
        assert!(teams < delete && delete < projects);
    }
}
