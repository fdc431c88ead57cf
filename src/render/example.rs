//! Example curl request for an endpoint

use serde_json::{Map, Value};

use crate::config::Config;
use crate::record::{BodySchema, Endpoint};

/// Separator used when showing the example as one shell command
pub const LINE_SEPARATOR: &str = " \\\n";

const MULTIPART_FORM_DATA: &str = "multipart/form-data";

/// Methods that curl cannot infer from the other flags
const EXPLICIT_METHODS: [&str; 3] = ["PUT", "OPTIONS", "DELETE"];

/// Example request as an ordered list of command lines
#[derive(Debug, Clone, PartialEq)]
pub struct ExampleRequest {
    lines: Vec<String>,
}

impl ExampleRequest {
    /// Build the example for an endpoint and its parsed body schema
    pub fn build(endpoint: &Endpoint, body: Option<&BodySchema>, config: &Config) -> Self {
        let mut lines = vec![
            format!("curl {}{}", config.base_url, endpoint.api_path),
            format!(
                " -H 'Authorization: Bearer {}'",
                config.auth_token_placeholder
            ),
        ];

        let verb = endpoint.verb();
        if EXPLICIT_METHODS.contains(&verb.as_str()) {
            lines.push(format!(" -X {}", verb));
        }

        let content_type = endpoint.content_type();
        if let Some(ct) = content_type {
            lines.push(format!(" -H 'Content-Type: {}'", ct));
        }

        if let Some(schema) = body {
            let examples = schema
                .properties
                .iter()
                .filter_map(|(name, prop)| prop.example.as_ref().map(|ex| (name, ex)));

            if content_type == Some(MULTIPART_FORM_DATA) {
                for (name, example) in examples {
                    lines.push(format!(" -F {}={}", name, form_value(example)));
                }
            } else {
                let object: Map<String, Value> = examples
                    .map(|(name, example)| (name.clone(), example.clone()))
                    .collect();
                let json = Value::Object(object).to_string();
                lines.push(format!(" -d '{}'", json.replace('\'', r"'\''")));
            }
        }

        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The full command, one flag per line
    pub fn command(&self) -> String {
        self.lines.join(LINE_SEPARATOR)
    }
}

fn form_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoint(json: &str) -> Endpoint {
        serde_json::from_str(json).unwrap()
    }

    fn build(endpoint: &Endpoint) -> ExampleRequest {
        let schema = endpoint.body_schema().unwrap();
        ExampleRequest::build(endpoint, schema.as_ref(), &Config::default())
    }

    #[test]
    fn test_get_without_body_has_two_lines() {
        let ep = endpoint(
            r#"{"method": "get", "apiPath": "/api/0/organizations/",
                "responses": [{"status_code": "200", "description": "ok"}]}"#,
        );
        let example = build(&ep);

        assert_eq!(
            example.lines(),
            &[
                "curl https://sentry.io/api/0/organizations/".to_string(),
                " -H 'Authorization: Bearer <auth_token>'".to_string(),
            ]
        );
    }

    #[test]
    fn test_put_with_json_body() {
        let ep = endpoint(
            r#"{"method": "put", "apiPath": "/api/0/teams/{team}/",
                "requestBody": {"content": {
                    "content_type": "application/json",
                    "schema": "{\"properties\": {\"name\": {\"type\": \"string\", \"example\": \"Backend\"}, \"slug\": {\"type\": \"string\"}, \"size\": {\"type\": \"integer\", \"example\": 4}}}"
                }},
                "responses": [{"status_code": "200", "description": "ok"}]}"#,
        );
        let example = build(&ep);

        assert_eq!(
            example.lines(),
            &[
                "curl https://sentry.io/api/0/teams/{team}/".to_string(),
                " -H 'Authorization: Bearer <auth_token>'".to_string(),
                " -X PUT".to_string(),
                " -H 'Content-Type: application/json'".to_string(),
                r#" -d '{"name":"Backend","size":4}'"#.to_string(),
            ]
        );
    }

    #[test]
    fn test_post_method_is_implicit() {
        let ep = endpoint(
            r#"{"method": "POST", "apiPath": "/api/0/teams/",
                "responses": [{"status_code": "201", "description": "ok"}]}"#,
        );
        assert!(!build(&ep).lines().iter().any(|l| l.starts_with(" -X")));
    }

    #[test]
    fn test_delete_and_options_are_explicit() {
        for method in ["delete", "Options"] {
            let ep = endpoint(&format!(
                r#"{{"method": "{}", "apiPath": "/x/", "responses": [{{"description": "ok"}}]}}"#,
                method
            ));
            let lines = build(&ep).lines().to_vec();
            assert_eq!(lines.len(), 3);
            assert_eq!(lines[2], format!(" -X {}", method.to_uppercase()));
        }
    }

    #[test]
    fn test_multipart_skips_properties_without_example() {
        let ep = endpoint(
            r#"{"method": "post", "apiPath": "/api/0/files/",
                "requestBody": {"content": {
                    "content_type": "multipart/form-data",
                    "schema": "{\"properties\": {\"file\": {\"type\": \"string\", \"example\": \"a.png\"}, \"caption\": {\"type\": \"string\"}}}"
                }},
                "responses": [{"status_code": "201", "description": "ok"}]}"#,
        );
        let lines = build(&ep).lines().to_vec();

        let form_lines: Vec<_> = lines.iter().filter(|l| l.starts_with(" -F")).collect();
        assert_eq!(form_lines, vec![" -F file=a.png"]);
        assert!(!lines.iter().any(|l| l.starts_with(" -d")));
        assert!(lines.contains(&" -H 'Content-Type: multipart/form-data'".to_string()));
    }

    #[test]
    fn test_multipart_non_string_values_print_as_json() {
        let ep = endpoint(
            r#"{"method": "post", "apiPath": "/f/",
                "requestBody": {"content": {
                    "content_type": "multipart/form-data",
                    "schema": {"properties": {"count": {"example": 3}, "public": {"example": false}}}
                }},
                "responses": [{"description": "ok"}]}"#,
        );
        let lines = build(&ep).lines().to_vec();
        assert!(lines.contains(&" -F count=3".to_string()));
        assert!(lines.contains(&" -F public=false".to_string()));
    }

    #[test]
    fn test_explicit_null_example_is_kept() {
        let ep = endpoint(
            r#"{"method": "post", "apiPath": "/t/",
                "requestBody": {"content": {
                    "content_type": "application/json",
                    "schema": {"properties": {"team": {"example": null}, "name": {"type": "string"}}}
                }},
                "responses": [{"description": "ok"}]}"#,
        );
        let lines = build(&ep).lines().to_vec();
        assert_eq!(lines.last().unwrap(), r#" -d '{"team":null}'"#);
    }

    #[test]
    fn test_multipart_explicit_null_example() {
        let ep = endpoint(
            r#"{"method": "post", "apiPath": "/f/",
                "requestBody": {"content": {
                    "content_type": "multipart/form-data",
                    "schema": {"properties": {"file": {"example": null}, "caption": {}}}
                }},
                "responses": [{"description": "ok"}]}"#,
        );
        let form_lines: Vec<String> = build(&ep)
            .lines()
            .iter()
            .filter(|l| l.starts_with(" -F"))
            .cloned()
            .collect();
        assert_eq!(form_lines, vec![" -F file=null".to_string()]);
    }

    #[test]
    fn test_json_body_escapes_single_quotes() {
        let ep = endpoint(
            r#"{"method": "post", "apiPath": "/t/",
                "requestBody": {"content": {
                    "content_type": "application/json",
                    "schema": {"properties": {"name": {"example": "O'Brien"}}}
                }},
                "responses": [{"description": "ok"}]}"#,
        );
        let lines = build(&ep).lines().to_vec();
        assert_eq!(lines.last().unwrap(), r#" -d '{"name":"O'\''Brien"}'"#);
    }

    #[test]
    fn test_command_joins_with_continuation() {
        let ep = endpoint(
            r#"{"method": "get", "apiPath": "/a/", "responses": [{"description": "ok"}]}"#,
        );
        let mut config = Config::default();
        config.base_url = "http://localhost:8000".to_string();
        let example = ExampleRequest::build(&ep, None, &config);

        assert_eq!(
            example.command(),
            "curl http://localhost:8000/a/ \\\n -H 'Authorization: Bearer <auth_token>'"
        );
    }
}
