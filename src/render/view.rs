//! Response viewer: which response and which tab are shown
//!
//! The viewer holds a `(response, tab)` selection over the endpoint's
//! responses. Selecting a response always resets the tab, and the schema tab
//! is only reachable when the selected response carries a schema. Each time
//! a payload or schema is rendered the highlighter runs over the new text.

use std::fmt;

use maud::{Markup, PreEscaped, html};

use super::highlight::{Highlighter, Language, pretty_json};
use super::inline::ensure_period;
use crate::error::RenderError;
use crate::record::Response;

/// Response panel tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Response,
    Schema,
}

impl Tab {
    pub fn label(self) -> &'static str {
        match self {
            Tab::Response => "RESPONSE",
            Tab::Schema => "SCHEMA",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::Response => 0,
            Tab::Schema => 1,
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

const RESPONSE_ONLY: &[Tab] = &[Tab::Response];
const RESPONSE_AND_SCHEMA: &[Tab] = &[Tab::Response, Tab::Schema];

/// Current selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    pub response: usize,
    pub tab: Tab,
}

/// What the panel shows for the current selection
#[derive(Debug, Clone, PartialEq)]
pub enum PanelBody {
    /// Example payload, pretty-printed when it is valid JSON
    Payload(String),
    /// Response schema text
    Schema(String),
    /// Description fallback, always ending with a period
    Description(String),
}

impl PanelBody {
    /// Raw text of the panel
    pub fn text(&self) -> &str {
        match self {
            PanelBody::Payload(t) | PanelBody::Schema(t) | PanelBody::Description(t) => t,
        }
    }
}

pub struct ResponseViewer<'a> {
    responses: &'a [Response],
    state: ViewState,
    highlighter: &'a dyn Highlighter,
    highlight_runs: usize,
}

impl<'a> ResponseViewer<'a> {
    /// Create a viewer at the initial `(0, RESPONSE)` selection
    pub fn new(
        responses: &'a [Response],
        highlighter: &'a dyn Highlighter,
    ) -> Result<Self, RenderError> {
        if responses.is_empty() {
            return Err(RenderError::ResponseOutOfRange { index: 0, len: 0 });
        }
        Ok(Self {
            responses,
            state: ViewState::default(),
            highlighter,
            highlight_runs: 0,
        })
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn current(&self) -> &'a Response {
        &self.responses[self.state.response]
    }

    /// Number of times the highlight hook has run
    pub fn highlight_runs(&self) -> usize {
        self.highlight_runs
    }

    /// Tabs offered for the current response
    pub fn available_tabs(&self) -> &'static [Tab] {
        tabs_for(self.current())
    }

    /// Select a response; the tab goes back to RESPONSE
    pub fn select_response(&mut self, index: usize) -> Result<(), RenderError> {
        if index >= self.responses.len() {
            return Err(RenderError::ResponseOutOfRange {
                index,
                len: self.responses.len(),
            });
        }
        self.state = ViewState {
            response: index,
            tab: Tab::Response,
        };
        Ok(())
    }

    /// Select a tab within the current response
    pub fn select_tab(&mut self, tab: Tab) -> Result<(), RenderError> {
        if !self.available_tabs().contains(&tab) {
            return Err(RenderError::TabUnavailable {
                tab: tab.label().to_string(),
                response: self.state.response,
            });
        }
        self.state.tab = tab;
        Ok(())
    }

    /// Panel content for the current selection, before highlighting
    pub fn panel_body(&self) -> PanelBody {
        let response = self.current();
        match self.state.tab {
            Tab::Response => match response.example() {
                Some(example) => PanelBody::Payload(pretty_json(example)),
                None => PanelBody::Description(ensure_period(&response.description)),
            },
            // select_tab only allows Schema when the response has one
            Tab::Schema => PanelBody::Schema(response.schema().unwrap_or_default().to_string()),
        }
    }

    /// Render the panel contents, running the highlight hook on payloads and
    /// schemas
    pub fn render_panel(&mut self) -> Markup {
        let body = self.panel_body();
        match body {
            PanelBody::Description(text) => html! { (text) },
            PanelBody::Payload(text) | PanelBody::Schema(text) => {
                let highlighted = self.after_render(&text);
                html! {
                    code class=(Language::Json.class()) { (PreEscaped(highlighted)) }
                }
            }
        }
    }

    fn after_render(&mut self, text: &str) -> String {
        self.highlight_runs += 1;
        log::debug!(
            "Highlighting {} bytes for response {} tab {}",
            text.len(),
            self.state.response,
            self.state.tab
        );
        self.highlighter.highlight(text, Language::Json)
    }

    /// Render the full response block: tab groups, status buttons and one
    /// pre-rendered panel per reachable selection. Only the current selection
    /// is visible; the page script switches between the others.
    pub fn render_block(&mut self) -> Markup {
        let initial = self.state;
        let responses = self.responses;
        let mut panels = Vec::new();

        for (index, response) in responses.iter().enumerate() {
            for &tab in tabs_for(response) {
                self.state = ViewState {
                    response: index,
                    tab,
                };
                panels.push((self.state, self.render_panel()));
            }
        }
        self.state = initial;

        html! {
            div.api-block.response data-response=(initial.response) data-tab=(initial.tab.index()) {
                div.api-block-header.response {
                    @for (index, response) in responses.iter().enumerate() {
                        div.tabs-group data-response=(index) hidden[index != initial.response] {
                            @for &tab in tabs_for(response) {
                                span.tab.selected[index == initial.response && tab == initial.tab]
                                    data-action="tab" data-tab=(tab.index()) {
                                    (tab.label())
                                }
                            }
                        }
                    }
                    div.response-status-btn-group {
                        @for (index, response) in responses.iter().enumerate() {
                            @if let Some(code) = &response.status_code {
                                button.response-status-btn.selected[index == initial.response]
                                    type="button" data-action="response" data-response=(index) {
                                    (code)
                                }
                            }
                        }
                    }
                }
                @for (state, panel) in &panels {
                    pre.api-block-example.response
                        data-response=(state.response) data-tab=(state.tab.index())
                        hidden[*state != initial] {
                        (panel)
                    }
                }
            }
        }
    }
}

fn tabs_for(response: &Response) -> &'static [Tab] {
    if response.has_schema() {
        RESPONSE_AND_SCHEMA
    } else {
        RESPONSE_ONLY
    }
}
