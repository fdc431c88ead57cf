//! Command execution context
//!
//! Provides a unified context for command execution, eliminating boilerplate
//! for config loading and output format resolution.

use clap::ValueEnum;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::config::Config;
use crate::error::Result;

/// Context for command execution containing config and runtime options.
pub struct CommandContext {
    /// Loaded and validated configuration, with CLI overrides applied
    pub config: Config,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// This handles:
    /// - Loading config from path (or default location)
    /// - Applying the base URL override
    /// - Resolving the output format: flag, then config preference, then pretty
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_at(opts.config_ref())?.with_base_url(opts.base_url_ref());
        let format = resolve_format(opts.format, &config);

        Ok(Self { config, format })
    }
}

fn resolve_format(flag: Option<OutputFormat>, config: &Config) -> OutputFormat {
    if let Some(format) = flag {
        return format;
    }

    match config.preferences.format.as_deref() {
        Some(pref) => OutputFormat::from_str(pref, true).unwrap_or_else(|_| {
            log::warn!("Ignoring unknown format preference: {}", pref);
            OutputFormat::default()
        }),
        None => OutputFormat::default(),
    }
}
