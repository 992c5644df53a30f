//! Terminal display utilities for books and recommendations.

use comfy_table::{presets::UTF8_FULL, Attribute, Cell, Table};
use std::io::{self, IsTerminal};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::models::{Book, Recommendation};

/// Widest title cell in table output
const TITLE_WIDTH: usize = 50;

/// Widest author cell in table output
const AUTHOR_WIDTH: usize = 30;

const ELLIPSIS: &str = "...";

/// Concrete output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayFormat {
    /// Human-readable table
    Table,
    /// Pretty-printed JSON
    Json,
    /// One line per item
    Plain,
}

impl DisplayFormat {
    /// Table on a terminal, JSON when piped
    pub fn detect() -> Self {
        if is_terminal() {
            DisplayFormat::Table
        } else {
            DisplayFormat::Json
        }
    }
}

/// Check if stdout is a terminal.
#[inline]
pub fn is_terminal() -> bool {
    io::stdout().is_terminal()
}

/// Shorten `text` to at most `max_width` terminal columns.
///
/// Wide characters count for two columns. Shortened text ends in `...`,
/// which is included in the width.
///
/// # Examples
///
/// ```
/// use bookworms::utils::truncate_with_ellipsis;
///
/// assert_eq!(truncate_with_ellipsis("The Handmaid's Tale", 10), "The Han...");
/// assert_eq!(truncate_with_ellipsis("Jane Eyre", 10), "Jane Eyre");
/// ```
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(text) <= max_width {
        return text.to_string();
    }
    if max_width < ELLIPSIS.len() {
        return ".".repeat(max_width);
    }

    let budget = max_width - ELLIPSIS.len();
    let mut used = 0;
    let mut kept = String::new();
    for c in text.chars() {
        let width = UnicodeWidthChar::width(c).unwrap_or(1);
        if used + width > budget {
            break;
        }
        used += width;
        kept.push(c);
    }

    kept + ELLIPSIS
}

/// Render books in the given format.
///
/// Plain output is one `- <title> by <author>` line per book.
pub fn render_books(books: &[Book], format: DisplayFormat) -> Result<String, serde_json::Error> {
    let rendered = match format {
        DisplayFormat::Json => format!("{}\n", serde_json::to_string_pretty(books)?),
        DisplayFormat::Plain => books
            .iter()
            .map(|book| format!("- {}\n", book))
            .collect(),
        DisplayFormat::Table => {
            let mut table = new_table(&["Title", "Author"]);
            for book in books {
                table.add_row(vec![
                    Cell::new(truncate_with_ellipsis(&book.title, TITLE_WIDTH))
                        .add_attribute(Attribute::Bold),
                    Cell::new(truncate_with_ellipsis(&book.author, AUTHOR_WIDTH)),
                ]);
            }
            format!("{table}\n")
        }
    };

    Ok(rendered)
}

/// Render recommendations in the given format, keeping their order.
pub fn render_recommendations(
    recommendations: &[Recommendation],
    format: DisplayFormat,
) -> Result<String, serde_json::Error> {
    let rendered = match format {
        DisplayFormat::Json => format!("{}\n", serde_json::to_string_pretty(recommendations)?),
        DisplayFormat::Plain => recommendations
            .iter()
            .map(|r| format!("- {} (score {:.2})\n", r.book, r.score))
            .collect(),
        DisplayFormat::Table => {
            let mut table = new_table(&["Title", "Author", "Score"]);
            for r in recommendations {
                table.add_row(vec![
                    Cell::new(truncate_with_ellipsis(&r.book.title, TITLE_WIDTH))
                        .add_attribute(Attribute::Bold),
                    Cell::new(truncate_with_ellipsis(&r.book.author, AUTHOR_WIDTH)),
                    Cell::new(format!("{:.2}", r.score)),
                ]);
            }
            format!("{table}\n")
        }
    };

    Ok(rendered)
}

fn new_table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(header.to_vec());
    table
}
