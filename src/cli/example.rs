//! Example command implementation

use std::path::Path;

use colored::Colorize;
use serde::Serialize;

use crate::cli::{CommandContext, OutputFormat};
use crate::error::Result;
use crate::output::json;
use crate::record::load_single;
use crate::render::ExampleRequest;

#[derive(Serialize)]
struct ExampleOutput<'a> {
    endpoint: String,
    lines: &'a [String],
    command: String,
}

/// Run the example command
pub fn run(ctx: &CommandContext, file: &Path) -> Result<()> {
    let record = load_single(file)?;
    let endpoint = &record.endpoint;
    let body = endpoint.body_schema()?;
    let example = ExampleRequest::build(endpoint, body.as_ref(), &ctx.config);

    match ctx.format {
        OutputFormat::Json => {
            let output = ExampleOutput {
                endpoint: endpoint.label(),
                lines: example.lines(),
                command: example.command(),
            };
            println!(
                "{}",
                json::format_json_from(&output, &file.display().to_string())?
            );
        }
        OutputFormat::Table => println!("{}", example.command()),
        OutputFormat::Pretty => {
            println!("{}\n", endpoint.label().bold());
            println!("{}", example.command().cyan());
        }
    }

    Ok(())
}
