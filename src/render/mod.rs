//! HTML rendering of endpoint pages
//!
//! Pure formatting helpers live in `inline`, `params`, `example` and
//! `scopes`; `view` holds the response viewer state machine and `page`
//! assembles the full document.

pub mod example;
pub mod highlight;
pub mod inline;
pub mod page;
pub mod params;
pub mod scopes;
pub mod view;

use maud::Render;

pub use example::ExampleRequest;
pub use highlight::{Highlighter, JsonHighlighter, PlainHighlighter};
pub use page::{PageOptions, SidebarLink, render_page};
pub use params::{ParamEntry, partition};
pub use scopes::scopes_for;
pub use view::{PanelBody, ResponseViewer, Tab, ViewState};

/// HTML-escape text
pub fn escape(text: &str) -> String {
    text.render().into_string()
}

/// Pick the highlighter for the configured mode
pub fn highlighter(enabled: bool) -> &'static dyn Highlighter {
    if enabled { &JsonHighlighter } else { &PlainHighlighter }
}

#[cfg(test)]
mod tests {
    use super::*;
    use highlight::Language;

    #[test]
    fn test_escape() {
        assert_eq!(escape("<a href=\"x\">&</a>"), "&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_highlighter_selection() {
        assert!(highlighter(true).highlight("1", Language::Json).contains("token number"));
        assert_eq!(highlighter(false).highlight("1", Language::Json), "1");
    }
}
