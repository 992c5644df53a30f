//! Book and bookworm models as they appear in the JSON shelves file.

use serde::{Deserialize, Serialize};

/// A book, identified only by its author and title.
///
/// Equality, hashing and ordering are structural over `(author, title)`, in
/// that order, with no case folding or whitespace normalization. The derived
/// `Ord` therefore sorts by author first and title second.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Book {
    /// Author name
    pub author: String,

    /// Book title
    pub title: String,
}

impl Book {
    /// Create a new book
    pub fn new(author: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            title: title.into(),
        }
    }
}

impl std::fmt::Display for Book {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} by {}", self.title, self.author)
    }
}

/// A reader and the books on their shelves.
///
/// Names are not required to be unique. Books keep their file order and may
/// repeat; owning the same book twice counts twice everywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookworm {
    /// Reader name
    pub name: String,

    /// Books owned by the reader
    #[serde(default)]
    pub books: Vec<Book>,
}

impl Bookworm {
    /// Create a bookworm with the given shelf
    pub fn new(name: impl Into<String>, books: Vec<Book>) -> Self {
        Self {
            name: name.into(),
            books,
        }
    }

    /// Add a book to the end of the shelf
    pub fn with_book(mut self, book: Book) -> Self {
        self.books.push(book);
        self
    }

    /// Returns true if the bookworm owns at least one copy of `book`
    pub fn owns(&self, book: &Book) -> bool {
        self.books.iter().any(|b| b == book)
    }
}
