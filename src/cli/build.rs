//! Build command implementation

use std::collections::HashSet;
use std::path::Path;

use colored::Colorize;

use crate::cli::CommandContext;
use crate::error::{Error, Result};
use crate::record::{EndpointRecord, load_records};
use crate::render::{PageOptions, SidebarLink, render_page};

/// Sidebar group for endpoints without tags
const DEFAULT_GROUP: &str = "Endpoints";

/// Run the build command.
///
/// Pages are rendered twice: the first pass finds the records that render,
/// the second writes them with a sidebar that links only to those pages.
pub fn run(ctx: &CommandContext, file: &Path, out_dir: &Path) -> Result<()> {
    let records = load_records(file)?;
    let slugs = unique_slugs(&records);
    std::fs::create_dir_all(out_dir)?;

    let mut failed = 0;
    let mut pages: Vec<(&EndpointRecord, &String)> = Vec::new();
    for (record, slug) in records.iter().zip(&slugs) {
        match render_page(record, &ctx.config, &PageOptions::default()) {
            Ok(_) => pages.push((record, slug)),
            Err(e) => {
                log::error!("Failed to render {}: {}", record.endpoint.label(), e);
                eprintln!("{} {}: {}", "✗".red(), record.endpoint.label(), e);
                failed += 1;
            }
        }
    }

    let links: Vec<SidebarLink> = pages
        .iter()
        .map(|(record, slug)| SidebarLink {
            title: record.endpoint.title(),
            href: format!("{}.html", slug),
            group: record
                .endpoint
                .tags
                .first()
                .cloned()
                .unwrap_or_else(|| DEFAULT_GROUP.to_string()),
            active: false,
        })
        .collect();

    for (i, (record, slug)) in pages.iter().enumerate() {
        let sidebar = links
            .iter()
            .enumerate()
            .map(|(j, link)| SidebarLink {
                active: i == j,
                ..link.clone()
            })
            .collect();
        let options = PageOptions {
            initial: Default::default(),
            sidebar,
        };

        let html = render_page(record, &ctx.config, &options)?;
        let path = out_dir.join(format!("{}.html", slug));
        std::fs::write(&path, html)?;
        log::debug!("Wrote {}", path.display());
    }

    let written = pages.len();
    println!(
        "{} Wrote {} page(s) to {}",
        "✓".green(),
        written.to_string().bold(),
        out_dir.display()
    );

    if failed > 0 {
        return Err(Error::Other(format!("{} endpoint(s) failed to render", failed)));
    }
    Ok(())
}

/// Slugs for every record. A repeat gets the first free `-N` suffix, so it
/// never lands on a slug issued earlier or taken by another record.
fn unique_slugs(records: &[EndpointRecord]) -> Vec<String> {
    let base: Vec<String> = records.iter().map(EndpointRecord::slug).collect();
    let mut issued: HashSet<String> = HashSet::new();

    base.iter()
        .map(|slug| {
            let mut candidate = slug.clone();
            let mut n = 1;
            while issued.contains(&candidate) || (n > 1 && base.contains(&candidate)) {
                n += 1;
                candidate = format!("{}-{}", slug, n);
            }
            issued.insert(candidate.clone());
            candidate
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use crate::config::Config;
    use crate::record::parse_records;
    use tempfile::tempdir;

    #[test]
    fn test_unique_slugs() {
        let records = parse_records(
            r#"[
                {"method": "get", "apiPath": "/a/", "operationId": "List Teams", "responses": [{"description": "ok"}]},
                {"method": "get", "apiPath": "/b/", "operationId": "List Teams", "responses": [{"description": "ok"}]},
                {"method": "delete", "apiPath": "/api/0/teams/", "responses": [{"description": "ok"}]}
            ]"#,
            false,
        )
        .unwrap();

        assert_eq!(
            unique_slugs(&records),
            vec!["list-teams", "list-teams-2", "delete-api-0-teams"]
        );
    }

    #[test]
    fn test_unique_slugs_skip_taken_suffix() {
        let records = parse_records(
            r#"[
                {"method": "get", "apiPath": "/a/", "operationId": "List Teams", "responses": [{"description": "ok"}]},
                {"method": "get", "apiPath": "/b/", "operationId": "List Teams", "responses": [{"description": "ok"}]},
                {"method": "get", "apiPath": "/c/", "operationId": "List Teams 2", "responses": [{"description": "ok"}]},
                {"method": "get", "apiPath": "/d/", "operationId": "List Teams", "responses": [{"description": "ok"}]}
            ]"#,
            false,
        )
        .unwrap();
        let slugs = unique_slugs(&records);

        assert_eq!(
            slugs,
            vec!["list-teams", "list-teams-3", "list-teams-2", "list-teams-4"]
        );
        let distinct: HashSet<&String> = slugs.iter().collect();
        assert_eq!(distinct.len(), slugs.len());
    }

    #[test]
    fn test_failed_page_is_left_out_of_sidebar() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("endpoints.json");
        std::fs::write(
            &file,
            r#"[
                {"method": "get", "apiPath": "/a/", "operationId": "List Teams", "tags": ["Teams"],
                 "responses": [{"description": "ok"}],
                 "security": [{"auth_token": ["team:read"]}]},
                {"method": "get", "apiPath": "/b/", "operationId": "List Keys", "tags": ["Keys"],
                 "responses": [{"description": "ok"}],
                 "security": [{"api_key": ["key:read"]}]}
            ]"#,
        )
        .unwrap();
        let out_dir = dir.path().join("site");
        let ctx = CommandContext {
            config: Config::default(),
            format: OutputFormat::Pretty,
        };

        let err = run(&ctx, &file, &out_dir).unwrap_err();
        assert!(matches!(err, Error::Other(_)));

        assert!(!out_dir.join("list-keys.html").exists());
        let html = std::fs::read_to_string(out_dir.join("list-teams.html")).unwrap();
        assert!(html.contains("href=\"list-teams.html\""));
        assert!(!html.contains("list-keys.html"));
        assert!(!html.contains("<h4>Keys</h4>"));
    }
}
