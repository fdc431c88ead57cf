//! Params command implementation

use std::path::Path;

use colored::Colorize;

use crate::cli::{CommandContext, OutputFormat};
use crate::error::Result;
use crate::models::ParamDisplay;
use crate::output::Formattable;
use crate::record::load_single;
use crate::render::params::body_entries;
use crate::render::{ParamEntry, partition};

/// Run the params command
pub fn run(ctx: &CommandContext, file: &Path) -> Result<()> {
    let record = load_single(file)?;
    let endpoint = &record.endpoint;

    let groups = partition(&endpoint.parameters);
    let sections: [(&str, Vec<ParamEntry>); 3] = [
        ("path", groups.path.into_iter().map(ParamEntry::from).collect()),
        ("query", groups.query.into_iter().map(ParamEntry::from).collect()),
        (
            "body",
            endpoint
                .body_schema()?
                .as_ref()
                .map(body_entries)
                .unwrap_or_default(),
        ),
    ];

    match ctx.format {
        OutputFormat::Pretty => print_pretty(&endpoint.label(), &sections),
        OutputFormat::Table | OutputFormat::Json => {
            let rows: Vec<ParamDisplay> = sections
                .iter()
                .flat_map(|(location, entries)| {
                    entries.iter().map(move |e| ParamDisplay::new(location, e))
                })
                .collect();
            rows.print(ctx.format)?;
        }
    }

    Ok(())
}

fn print_pretty(label: &str, sections: &[(&str, Vec<ParamEntry>)]) {
    println!("{}", label.bold());

    let mut any = false;
    for (location, entries) in sections {
        if entries.is_empty() {
            continue;
        }
        any = true;
        println!("\n{}", format!("{} parameters", location).cyan().bold());
        for entry in entries {
            let kind = entry
                .kind
                .as_deref()
                .map(|k| format!(" ({})", k))
                .unwrap_or_default();
            let required = if entry.required {
                format!(" {}", "REQUIRED".yellow())
            } else {
                String::new()
            };
            println!("  {}{}{}", entry.name.bold(), kind.dimmed(), required);
            if let Some(description) = &entry.description {
                println!("      {}", description);
            }
        }
    }

    if !any {
        println!("\nNo parameters.");
    }
}
