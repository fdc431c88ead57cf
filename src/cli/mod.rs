//! CLI command definitions and handlers

use std::path::PathBuf;

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

pub mod args;
pub mod build;
pub mod context;
pub mod example;
pub mod init;
pub mod params;
pub mod render;
pub mod responses;
pub mod scopes;

pub use args::{OutputFormat, ViewArgs};
pub use context::CommandContext;

/// apipage - Render API reference pages from endpoint records
#[derive(Parser, Debug)]
#[command(name = "apipage")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "APIPAGE_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "APIPAGE_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override the host used in example requests
    #[arg(long, global = true, env = "APIPAGE_BASE_URL", hide_env = true)]
    pub base_url: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "APIPAGE_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a default configuration file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Render one endpoint page as HTML
    Render {
        /// Endpoint record file (JSON or YAML)
        file: PathBuf,

        /// Write the page to this file instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        #[command(flatten)]
        view: ViewArgs,

        /// Skip syntax highlighting of payloads and schemas
        #[arg(long)]
        no_highlight: bool,
    },

    /// Render every endpoint of a collection into a directory
    Build {
        /// Endpoint collection file (JSON or YAML)
        file: PathBuf,

        /// Directory to write pages into
        #[arg(long, default_value = "site")]
        out_dir: PathBuf,
    },

    /// Print the example curl request
    Example {
        /// Endpoint record file (JSON or YAML)
        file: PathBuf,
    },

    /// List path, query and body parameters
    Params {
        /// Endpoint record file (JSON or YAML)
        file: PathBuf,
    },

    /// List responses, or show one response panel
    Responses {
        /// Endpoint record file (JSON or YAML)
        file: PathBuf,

        #[command(flatten)]
        view: ViewArgs,
    },

    /// List the scopes required by an endpoint
    Scopes {
        /// Endpoint record file (JSON or YAML)
        file: PathBuf,

        /// Security scheme to look up (defaults to the configured scheme)
        #[arg(long)]
        scheme: Option<String>,
    },

    /// Display version information
    Version,

    /// Generate shell completions
    #[command(after_help = "\
Examples:
  bash:   apipage completion bash > /etc/bash_completion.d/apipage
  zsh:    apipage completion zsh > \"${fpath[1]}/_apipage\"
  fish:   apipage completion fish > ~/.config/fish/completions/apipage.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_render_args() {
        let cli = Cli::parse_from([
            "apipage",
            "render",
            "endpoint.json",
            "-o",
            "out.html",
            "--response",
            "1",
            "--tab",
            "schema",
        ]);
        match cli.command {
            Commands::Render {
                file,
                output,
                view,
                no_highlight,
            } => {
                assert_eq!(file, PathBuf::from("endpoint.json"));
                assert_eq!(output, Some(PathBuf::from("out.html")));
                assert_eq!(view.response, Some(1));
                assert_eq!(view.tab, Some(args::TabArg::Schema));
                assert!(!no_highlight);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "apipage",
            "example",
            "endpoint.json",
            "--format",
            "json",
            "--base-url",
            "http://localhost:8000",
        ]);
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert_eq!(cli.base_url.as_deref(), Some("http://localhost:8000"));
    }

    #[test]
    fn test_build_default_out_dir() {
        let cli = Cli::parse_from(["apipage", "build", "endpoints.json"]);
        match cli.command {
            Commands::Build { out_dir, .. } => assert_eq!(out_dir, PathBuf::from("site")),
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
