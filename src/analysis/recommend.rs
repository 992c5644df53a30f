//! Recommendations from readers with overlapping shelves.
//!
//! Every other reader who shares at least one book with the target votes for
//! the books the target has not read yet. A reader sharing `s` books casts a
//! vote worth `ln(s) + 1`, so large overlaps count more but with diminishing
//! returns.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use crate::models::{Book, Bookworm, Recommendation};

/// Set of books with membership by `(author, title)`
#[derive(Debug, Clone, Default)]
pub struct BookSet<'a> {
    books: HashSet<&'a Book>,
}

impl<'a> BookSet<'a> {
    /// Build a set from any sequence of books; repeats collapse
    pub fn new(books: impl IntoIterator<Item = &'a Book>) -> Self {
        Self {
            books: books.into_iter().collect(),
        }
    }

    pub fn contains(&self, book: &Book) -> bool {
        self.books.contains(book)
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

/// Recommend books to `target` from the shelves of the other bookworms.
///
/// Readers whose name equals the target's name are skipped, whether or not
/// they are the target itself. A reader sharing no book with the target
/// contributes nothing.
///
/// # Arguments
/// * `bookworms` - The whole population, the target may or may not be part of it
/// * `target` - The reader to recommend books to
/// * `n` - Number of recommendations asked for. It is not used to truncate the
///   result; use [`top_recommendations`] for that.
///
/// # Returns
/// One recommendation per unread book with a positive score, ordered by
/// descending score, then by author and title.
pub fn recommend(bookworms: &[Bookworm], target: &Bookworm, n: usize) -> Vec<Recommendation> {
    let read = BookSet::new(&target.books);
    let mut scores: HashMap<&Book, f64> = HashMap::new();

    for reader in bookworms {
        if reader.name == target.name {
            continue;
        }

        let similarity = reader.books.iter().filter(|b| read.contains(b)).count();
        if similarity == 0 {
            continue;
        }

        let score = (similarity as f64).ln() + 1.0;
        tracing::trace!(reader = %reader.name, similarity, score, "reader contributes");

        for book in reader.books.iter().filter(|b| !read.contains(b)) {
            *scores.entry(book).or_default() += score;
        }
    }

    let mut recommendations: Vec<Recommendation> = scores
        .into_iter()
        .filter(|(_, score)| *score > 0.0)
        .map(|(book, score)| Recommendation::new(book.clone(), score))
        .collect();
    recommendations.sort_by(by_score_then_book);

    tracing::debug!(
        reader = %target.name,
        requested = n,
        found = recommendations.len(),
        "computed recommendations"
    );

    recommendations
}

/// Keep the `n` best recommendations, highest score first.
pub fn top_recommendations(
    mut recommendations: Vec<Recommendation>,
    n: usize,
) -> Vec<Recommendation> {
    recommendations.sort_by(by_score_then_book);
    recommendations.truncate(n);
    recommendations
}

fn by_score_then_book(a: &Recommendation, b: &Recommendation) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.book.cmp(&b.book))
}
