//! Responses command implementation

use std::path::Path;

use colored::Colorize;
use serde::Serialize;

use crate::cli::{CommandContext, OutputFormat, ViewArgs};
use crate::error::Result;
use crate::models::ResponseDisplay;
use crate::output::{Formattable, json, table};
use crate::record::load_single;
use crate::render::{PanelBody, ResponseViewer, highlighter};

#[derive(Serialize)]
struct PanelOutput<'a> {
    response: usize,
    status: Option<&'a str>,
    tab: &'static str,
    kind: &'static str,
    body: &'a str,
}

/// Run the responses command.
///
/// Without a selection every response is listed; with `--response` or
/// `--tab` the panel for that selection is printed.
pub fn run(ctx: &CommandContext, file: &Path, view: &ViewArgs) -> Result<()> {
    let record = load_single(file)?;
    let responses = &record.endpoint.responses;

    if !view.is_set() {
        let rows: Vec<ResponseDisplay> = responses
            .iter()
            .enumerate()
            .map(|(i, r)| ResponseDisplay::new(i, r))
            .collect();
        if ctx.format == OutputFormat::Pretty {
            println!("{}", table::format_captioned(&record.endpoint.label(), &rows));
            return Ok(());
        }
        return rows.print(ctx.format);
    }

    let requested = view.to_state();
    let mut viewer = ResponseViewer::new(responses, highlighter(false))?;
    viewer.select_response(requested.response)?;
    viewer.select_tab(requested.tab)?;

    let state = viewer.state();

    let body = viewer.panel_body();
    let response = viewer.current();

    match ctx.format {
        OutputFormat::Json => {
            let output = PanelOutput {
                response: state.response,
                status: response.status_code.as_deref(),
                tab: state.tab.label(),
                kind: match body {
                    PanelBody::Payload(_) => "payload",
                    PanelBody::Schema(_) => "schema",
                    PanelBody::Description(_) => "description",
                },
                body: body.text(),
            };
            println!(
                "{}",
                json::format_json_from(&output, &file.display().to_string())?
            );
        }
        OutputFormat::Table => println!("{}", body.text()),
        OutputFormat::Pretty => {
            let status = response.status_code.as_deref().unwrap_or("default");
            println!("{} {}\n", status.bold(), state.tab.to_string().dimmed());
            match &body {
                PanelBody::Description(text) => println!("{}", text.italic()),
                _ => println!("{}", body.text()),
            }
        }
    }

    Ok(())
}
