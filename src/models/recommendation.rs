//! Recommendation produced by the recommender.

use serde::Serialize;

use super::Book;

/// A book suggested to a reader together with its accumulated score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    /// The recommended book
    pub book: Book,

    /// Sum of `ln(similarity) + 1` over every contributing reader; always > 0
    pub score: f64,
}

impl Recommendation {
    pub fn new(book: Book, score: f64) -> Self {
        Self { book, score }
    }
}
