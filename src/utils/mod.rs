//! Utility modules supporting the command-line front end.
//!
//! - [`render_books`]: Render a list of books as a table, JSON, or plain text
//! - [`render_recommendations`]: Render recommendations with their scores
//! - [`truncate_with_ellipsis`]: Unicode-aware truncation for table cells
//! - [`DisplayFormat`]: The concrete output format, resolved from the terminal when automatic

mod display;

pub use display::{
    is_terminal, render_books, render_recommendations, truncate_with_ellipsis, DisplayFormat,
};
