//! Core data models for bookworms, their books, and recommendations.

mod book;
mod recommendation;

pub use book::{Book, Bookworm};
pub use recommendation::Recommendation;
