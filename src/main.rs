//! apipage - Render API reference pages from endpoint records

use clap::{CommandFactory, Parser};

mod cli;
mod config;
mod error;
mod models;
mod output;
mod record;
mod render;

use cli::args::GlobalOptions;
use cli::{Cli, CommandContext, Commands};
use error::Result;

fn main() {
    let cli = Cli::parse();
    let opts = GlobalOptions::from_cli(&cli);
    init_logging(opts.log_filter());

    if let Err(err) = run(cli.command, &opts) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

/// `RUST_LOG` overrides the filter chosen from `--debug`
fn init_logging(default_filter: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn run(command: Commands, opts: &GlobalOptions) -> Result<()> {
    match command {
        Commands::Init { force } => cli::init::run(opts, force),
        Commands::Version => {
            println!("apipage version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "apipage", &mut std::io::stdout());
            Ok(())
        }
        Commands::Render {
            file,
            output,
            view,
            no_highlight,
        } => {
            let ctx = CommandContext::new(opts)?;
            cli::render::run(&ctx, &file, output.as_deref(), &view, no_highlight)
        }
        Commands::Build { file, out_dir } => {
            let ctx = CommandContext::new(opts)?;
            cli::build::run(&ctx, &file, &out_dir)
        }
        Commands::Example { file } => {
            let ctx = CommandContext::new(opts)?;
            cli::example::run(&ctx, &file)
        }
        Commands::Params { file } => {
            let ctx = CommandContext::new(opts)?;
            cli::params::run(&ctx, &file)
        }
        Commands::Responses { file, view } => {
            let ctx = CommandContext::new(opts)?;
            cli::responses::run(&ctx, &file, &view)
        }
        Commands::Scopes { file, scheme } => {
            let ctx = CommandContext::new(opts)?;
            cli::scopes::run(&ctx, &file, scheme.as_deref())
        }
    }
}
