//! Table output formatting

use tabled::{
    Table, Tabled,
    settings::{Alignment, Panel, Style, object::Rows},
};

const EMPTY_MESSAGE: &str = "No entries.";

/// Rows as a rounded table with a centered header row
pub fn format_table<T: Tabled>(rows: &[T]) -> String {
    build(rows, None)
}

/// Like `format_table`, with a caption spanning the top of the table.
/// Used by pretty output to name the endpoint the rows belong to.
pub fn format_captioned<T: Tabled>(caption: &str, rows: &[T]) -> String {
    build(rows, Some(caption))
}

fn build<T: Tabled>(rows: &[T], caption: Option<&str>) -> String {
    if rows.is_empty() {
        return match caption {
            Some(caption) => format!("{}\n{}", caption, EMPTY_MESSAGE),
            None => EMPTY_MESSAGE.to_string(),
        };
    }

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.modify(Rows::first(), Alignment::center());
    if let Some(caption) = caption {
        table.with(Panel::header(caption));
    }

    table.to_string()
}
