//! Analyses over a population of bookworms.
//!
//! - [`find_common_books`]: Books found more than once across all shelves, sorted by author then title
//! - [`books_count`]: Occurrence count of every book across all shelves
//! - [`recommend`]: Similarity-weighted recommendations for a target reader
//! - [`top_recommendations`]: Keep only the best `n` recommendations
//!
//! Both analyses are pure functions of their input and never fail.
//!
//! ```rust
//! use bookworms::analysis::find_common_books;
//! use bookworms::models::{Book, Bookworm};
//!
//! let tale = Book::new("Margaret Atwood", "The Handmaid's Tale");
//! let bookworms = vec![
//!     Bookworm::new("Fadi", vec![tale.clone()]),
//!     Bookworm::new("Peggy", vec![tale.clone()]),
//! ];
//!
//! assert_eq!(find_common_books(&bookworms), vec![tale]);
//! ```

mod common;
mod recommend;

pub use common::{books_count, find_common_books, sort_books};
pub use recommend::{recommend, top_recommendations, BookSet};
