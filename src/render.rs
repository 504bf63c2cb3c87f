//! Terminal rendering of catalog rows.
//!
//! Rows are printed as an aligned `ID / Product / Category / User` table.
//! The category cell reads `"{icon} - {title}"`. Owner names are coloured
//! by sex marker (blue for `m`, green for `f`) when colour is enabled.
//! An empty row set prints the configured no-results message instead.
//!
//! Columns are aligned by terminal display width, so wide glyphs such as
//! category icons occupy two columns.

use anyhow::Result;
use catalog_core::models::{EnrichedProduct, Sex};
use crossterm::style::Stylize;
use std::io::Write;
use unicode_width::UnicodeWidthStr;

use crate::config::Config;

const HEADERS: [&str; 4] = ["ID", "Product", "Category", "User"];

/// How rows are written to the terminal.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub color: bool,
    pub no_results_message: String,
}

impl RenderOptions {
    /// Colour only when enabled in config and stdout is a TTY.
    pub fn from_config(config: &Config) -> Self {
        Self {
            color: config.display.color && atty::is(atty::Stream::Stdout),
            no_results_message: config.display.no_results_message.clone(),
        }
    }
}

/// `"{icon} - {title}"`, or empty when the category is unresolved.
pub fn category_cell(row: &EnrichedProduct) -> String {
    match &row.category {
        Some(c) => format!("{} - {}", c.icon, c.title),
        None => String::new(),
    }
}

/// Owner name, wrapped in the sex-marker colour when `color` is set.
pub fn user_cell(row: &EnrichedProduct, color: bool) -> String {
    let name = row.user_name.as_deref().unwrap_or("");
    match (color, row.user_sex) {
        (true, Some(Sex::Male)) => name.blue().to_string(),
        (true, Some(Sex::Female)) => name.green().to_string(),
        _ => name.to_string(),
    }
}

/// Write `rows` as a table, or the no-results message when empty.
pub fn write_table<W: Write>(
    out: &mut W,
    rows: &[EnrichedProduct],
    opts: &RenderOptions,
) -> Result<()> {
    if rows.is_empty() {
        writeln!(out, "{}", opts.no_results_message)?;
        return Ok(());
    }

    let cells: Vec<[String; 3]> = rows
        .iter()
        .map(|r| [r.id.to_string(), r.name.clone(), category_cell(r)])
        .collect();

    let mut widths = [HEADERS[0].width(), HEADERS[1].width(), HEADERS[2].width()];
    for row in &cells {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.width());
        }
    }

    write_line(out, [HEADERS[0], HEADERS[1], HEADERS[2]], &widths, HEADERS[3])?;
    for (row, [id, name, category]) in rows.iter().zip(cells.iter()) {
        let cells = [id.as_str(), name.as_str(), category.as_str()];
        write_line(out, cells, &widths, &user_cell(row, opts.color))?;
    }
    Ok(())
}

// `{:<w$}` pads by char count, which is wrong for double-width glyphs.
fn pad(cell: &str, width: usize) -> String {
    let mut padded = String::with_capacity(width + cell.len());
    padded.push_str(cell);
    padded.extend(std::iter::repeat(' ').take(width.saturating_sub(cell.width())));
    padded
}

fn write_line<W: Write>(
    out: &mut W,
    cells: [&str; 3],
    widths: &[usize; 3],
    user: &str,
) -> Result<()> {
    let line = format!(
        "{}  {}  {}  {}",
        pad(cells[0], widths[0]),
        pad(cells[1], widths[1]),
        pad(cells[2], widths[2]),
        user
    );
    writeln!(out, "{}", line.trim_end())?;
    Ok(())
}

/// Write `value` as pretty-printed JSON followed by a newline.
pub fn write_json<W: Write, T: serde::Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
