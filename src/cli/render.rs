//! Render command implementation

use std::path::Path;

use colored::Colorize;

use crate::cli::{CommandContext, ViewArgs};
use crate::error::Result;
use crate::record::load_single;
use crate::render::{PageOptions, render_page};

/// Run the render command
pub fn run(
    ctx: &CommandContext,
    file: &Path,
    output: Option<&Path>,
    view: &ViewArgs,
    no_highlight: bool,
) -> Result<()> {
    let record = load_single(file)?;
    if let Some(id) = &record.id {
        log::debug!("Rendering node {}", id);
    }

    let mut config = ctx.config.clone();
    if no_highlight {
        config.highlight = false;
    }

    let options = PageOptions {
        initial: view.to_state(),
        sidebar: Vec::new(),
    };
    let html = render_page(&record, &config, &options)?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, html)?;
            println!(
                "{} Rendered {} to {}",
                "✓".green(),
                record.endpoint.label().bold(),
                path.display()
            );
        }
        None => print!("{}", html),
    }

    Ok(())
}
