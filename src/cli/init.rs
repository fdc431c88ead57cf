//! Init command implementation

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::config::Config;
use crate::error::{ConfigError, Result};

/// Run the init command
///
/// Writes the default configuration, with any `--base-url` override applied,
/// to the resolved config path.
pub fn run(opts: &GlobalOptions, force: bool) -> Result<()> {
    let path = Config::resolve_path(opts.config_ref())?;

    if path.exists() && !force {
        return Err(ConfigError::Invalid(format!(
            "{} already exists. Use --force to overwrite.",
            path.display()
        ))
        .into());
    }

    let config = Config::default().with_base_url(opts.base_url_ref());
    config.save_to(path.clone())?;

    println!(
        "{} Configuration saved to: {}",
        "✓".green(),
        path.display()
    );
    println!("\n{}", "Try running:".bold());
    println!(
        "  {} - Render an endpoint page",
        "apipage render endpoint.json -o endpoint.html".cyan()
    );
    println!(
        "  {} - Show the example request",
        "apipage example endpoint.json".cyan()
    );

    Ok(())
}
