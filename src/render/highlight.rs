//! Syntax highlighting for example payloads and schemas
//!
//! Output uses Prism's `token` class names so existing site stylesheets
//! apply unchanged.

use super::escape;

/// Language of a highlighted block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Json,
}

impl Language {
    /// CSS class applied to the enclosing `<code>` element
    pub fn class(self) -> &'static str {
        match self {
            Language::Json => "language-json",
        }
    }
}

/// Turns source text into escaped HTML markup
pub trait Highlighter {
    fn highlight(&self, code: &str, language: Language) -> String;
}

/// Token-level JSON highlighter. Tolerates malformed input: anything it
/// cannot classify is emitted escaped and unstyled.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonHighlighter;

/// Escapes text without adding markup
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainHighlighter;

impl Highlighter for PlainHighlighter {
    fn highlight(&self, code: &str, _language: Language) -> String {
        escape(code)
    }
}

impl Highlighter for JsonHighlighter {
    fn highlight(&self, code: &str, language: Language) -> String {
        match language {
            Language::Json => highlight_json(code),
        }
    }
}

fn token(out: &mut String, class: &str, text: &str) {
    out.push_str("<span class=\"token ");
    out.push_str(class);
    out.push_str("\">");
    out.push_str(&escape(text));
    out.push_str("</span>");
}

fn highlight_json(code: &str) -> String {
    let chars: Vec<char> = code.chars().collect();
    let mut out = String::with_capacity(code.len() * 2);
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match c {
            '"' => {
                let start = i;
                i += 1;
                while i < chars.len() && chars[i] != '"' {
                    if chars[i] == '\\' {
                        i += 1;
                    }
                    i += 1;
                }
                i = (i + 1).min(chars.len());
                let text: String = chars[start..i].iter().collect();

                let mut k = i;
                while k < chars.len() && chars[k].is_whitespace() {
                    k += 1;
                }
                let class = if k < chars.len() && chars[k] == ':' {
                    "property"
                } else {
                    "string"
                };
                token(&mut out, class, &text);
            }
            '-' | '0'..='9' => {
                let start = i;
                i += 1;
                while i < chars.len()
                    && matches!(chars[i], '0'..='9' | '.' | 'e' | 'E' | '+' | '-')
                {
                    i += 1;
                }
                let text: String = chars[start..i].iter().collect();
                token(&mut out, "number", &text);
            }
            '{' | '}' | '[' | ']' | ',' => {
                token(&mut out, "punctuation", &c.to_string());
                i += 1;
            }
            ':' => {
                token(&mut out, "operator", ":");
                i += 1;
            }
            c if c.is_ascii_alphabetic() => {
                let start = i;
                while i < chars.len() && chars[i].is_ascii_alphabetic() {
                    i += 1;
                }
                let word: String = chars[start..i].iter().collect();
                match word.as_str() {
                    "true" | "false" => token(&mut out, "boolean", &word),
                    "null" => token(&mut out, "null keyword", &word),
                    _ => out.push_str(&escape(&word)),
                }
            }
            _ => {
                out.push_str(&escape(&c.to_string()));
                i += 1;
            }
        }
    }

    out
}

/// Pretty-print JSON text, or return it unchanged when it does not parse
pub fn pretty_json(text: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(text) {
        Ok(value) => serde_json::to_string_pretty(&value).unwrap_or_else(|_| text.to_string()),
        Err(_) => text.to_string(),
    }
}
