//! Inline text formatting for descriptions

use super::escape;

const CODE_OPEN: &str = "<code>";
const CODE_CLOSE: &str = "</code>";

/// Replace paired backticks with `<code>`/`</code>`.
///
/// Two cursors walk inward from both ends: the first backtick found from the
/// left opens a span and the first one found from the right closes it. With
/// an odd number of backticks the middle one is left as-is.
pub fn parse_backticks(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut marks: Vec<Option<&'static str>> = vec![None; chars.len()];

    // `lo` is inclusive, `hi` exclusive
    let mut lo = 0;
    let mut hi = chars.len();

    loop {
        while lo < hi && chars[lo] != '`' {
            lo += 1;
        }
        if lo >= hi {
            break;
        }

        let mut close = hi;
        while close > lo + 1 && chars[close - 1] != '`' {
            close -= 1;
        }
        if close <= lo + 1 {
            break;
        }

        marks[lo] = Some(CODE_OPEN);
        marks[close - 1] = Some(CODE_CLOSE);
        lo += 1;
        hi = close - 1;
    }

    let mut out = String::with_capacity(text.len() + 16);
    for (c, mark) in chars.iter().zip(&marks) {
        match mark {
            Some(tag) => out.push_str(tag),
            None => out.push(*c),
        }
    }
    out
}

/// Escape free text for HTML and then format its backtick spans
pub fn format_description(text: &str) -> String {
    parse_backticks(&escape(text))
}

/// Trim the text and make sure it ends with a period
pub fn ensure_period(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.ends_with('.') {
        trimmed.to_string()
    } else {
        format!("{}.", trimmed)
    }
}
