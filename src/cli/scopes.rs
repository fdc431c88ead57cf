//! Scopes command implementation

use std::path::Path;

use crate::cli::{CommandContext, OutputFormat};
use crate::error::Result;
use crate::models::ScopeDisplay;
use crate::output::{Formattable, table};
use crate::record::load_single;
use crate::render::scopes_for;

/// Run the scopes command
pub fn run(ctx: &CommandContext, file: &Path, scheme: Option<&str>) -> Result<()> {
    let record = load_single(file)?;
    let scheme = scheme.unwrap_or(&ctx.config.auth_scheme);

    if record.endpoint.security.is_empty() {
        if ctx.format == OutputFormat::Json {
            return Vec::<ScopeDisplay>::new().print(ctx.format);
        }
        println!("{} has no security requirements.", record.endpoint.label());
        return Ok(());
    }

    let scopes = scopes_for(&record.endpoint.security, scheme)?;
    let rows = ScopeDisplay::rows(scheme, scopes);
    match ctx.format {
        OutputFormat::Pretty => {
            println!("{}", table::format_captioned(&record.endpoint.label(), &rows));
            Ok(())
        }
        _ => rows.print(ctx.format),
    }
}
