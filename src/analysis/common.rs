//! Books shared between bookworms.

use std::collections::HashMap;

use crate::models::{Book, Bookworm};

/// Count every book across all shelves.
///
/// A book owned twice by the same bookworm counts twice.
pub fn books_count(bookworms: &[Bookworm]) -> HashMap<Book, u32> {
    let mut counter: HashMap<Book, u32> = HashMap::new();

    for bookworm in bookworms {
        for book in &bookworm.books {
            *counter.entry(book.clone()).or_default() += 1;
        }
    }

    counter
}

/// Find the books that appear on shelves more than once.
///
/// # Arguments
/// * `bookworms` - The readers and their shelves
///
/// # Returns
/// Every book with an occurrence count above one, sorted by author then title.
/// Empty when nothing is shared.
pub fn find_common_books(bookworms: &[Bookworm]) -> Vec<Book> {
    let common: Vec<Book> = books_count(bookworms)
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(book, _)| book)
        .collect();

    sort_books(common)
}

/// Sort books by author, then by title for the same author.
///
/// Strings compare byte-wise, so accented and upper-case letters sort after
/// plain lower-case ASCII.
pub fn sort_books(mut books: Vec<Book>) -> Vec<Book> {
    books.sort_by(|a, b| a.author.cmp(&b.author).then_with(|| a.title.cmp(&b.title)));
    books
}
