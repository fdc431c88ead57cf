//! Options that apply to every command

use crate::cli::{Cli, OutputFormat};

/// Global flags after clap has merged in their `APIPAGE_*` environment
/// variables. Config file values are layered on top in `CommandContext`.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// `--format`; `None` defers to the config preference
    pub format: Option<OutputFormat>,

    /// `--config`; `None` means `~/.apipage/config.yaml`
    pub config: Option<String>,

    /// `--base-url`, replacing the configured host in example requests
    pub base_url: Option<String>,

    /// `--debug`
    pub debug: bool,
}

impl GlobalOptions {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            base_url: cli.base_url.clone(),
            debug: cli.debug,
        }
    }

    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    pub fn base_url_ref(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// Default `env_logger` filter when `RUST_LOG` is unset
    pub fn log_filter(&self) -> &'static str {
        if self.debug { "debug" } else { "warn" }
    }
}
