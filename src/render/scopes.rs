//! Security scope lookup and rendering

use maud::{Markup, html};

use crate::config::Config;
use crate::error::RenderError;
use crate::record::{Endpoint, SecurityRequirement};

/// Scopes of the first requirement that names `scheme`
pub fn scopes_for<'a>(
    security: &'a [SecurityRequirement],
    scheme: &str,
) -> Result<&'a [String], RenderError> {
    security
        .iter()
        .find_map(|requirement| requirement.get(scheme).and_then(|s| s.as_deref()))
        .ok_or_else(|| RenderError::MissingSecurityScheme(scheme.to_string()))
}

/// Render the scopes section. Endpoints without security requirements get
/// no section.
pub fn render_scopes(
    endpoint: &Endpoint,
    config: &Config,
) -> Result<Option<Markup>, RenderError> {
    if endpoint.security.is_empty() {
        return Ok(None);
    }

    let scopes = scopes_for(&endpoint.security, &config.auth_scheme)?;

    Ok(Some(html! {
        div.api-info-row {
            h3 { "Scopes" }
            div {
                div {
                    "You need to "
                    a href=(config.auth_docs_link) { "authenticate via bearer auth token." }
                }
                code { (config.auth_token_placeholder) }
                " requires the following scopes:"
            }
            ul {
                @for scope in scopes {
                    li style="font-weight: bold" { code { (scope) } }
                }
            }
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn security(json: &str) -> Vec<SecurityRequirement> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_scopes_for_first_matching_entry() {
        let security = security(
            r#"[{"api_key": ["legacy"]},
                {"auth_token": ["org:read", "org:write"]},
                {"auth_token": ["org:admin"]}]"#,
        );
        let scopes = scopes_for(&security, "auth_token").unwrap();
        assert_eq!(scopes, &["org:read".to_string(), "org:write".to_string()]);
    }

    #[test]
    fn test_scopes_for_skips_null_entries() {
        let security = security(r#"[{"auth_token": null}, {"auth_token": ["team:read"]}]"#);
        let scopes = scopes_for(&security, "auth_token").unwrap();
        assert_eq!(scopes, &["team:read".to_string()]);
    }

    #[test]
    fn test_scopes_for_empty_list_still_matches() {
        let security = security(r#"[{"auth_token": []}]"#);
        assert!(scopes_for(&security, "auth_token").unwrap().is_empty());
    }

    #[test]
    fn test_scopes_for_missing_scheme() {
        let security = security(r#"[{"api_key": ["legacy"]}]"#);
        let err = scopes_for(&security, "auth_token").unwrap_err();
        assert!(matches!(err, RenderError::MissingSecurityScheme(ref s) if s == "auth_token"));
    }

    #[test]
    fn test_render_scopes_section() {
        let endpoint: Endpoint = serde_json::from_str(
            r#"{"method": "get", "apiPath": "/t/", "responses": [{"description": "ok"}],
                "security": [{"auth_token": ["team:read"]}]}"#,
        )
        .unwrap();
        let html = render_scopes(&endpoint, &Config::default())
            .unwrap()
            .unwrap()
            .into_string();

        assert!(html.contains("<h3>Scopes</h3>"));
        assert!(html.contains("<a href=\"/api/auth\">"));
        assert!(html.contains("<code>&lt;auth_token&gt;</code>"));
        assert!(html.contains("<li style=\"font-weight: bold\"><code>team:read</code></li>"));
    }

    #[test]
    fn test_render_scopes_none_without_security() {
        let endpoint: Endpoint = serde_json::from_str(
            r#"{"method": "get", "apiPath": "/t/", "responses": [{"description": "ok"}]}"#,
        )
        .unwrap();
        assert!(render_scopes(&endpoint, &Config::default()).unwrap().is_none());
    }
}
