//! # Bookworms
//!
//! Find the books that several bookworms keep on their shelves, and recommend
//! new books to a reader based on what similar readers own.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`models`]: Core data structures (Book, Bookworm, Recommendation)
//! - [`analysis`]: Common-book aggregation and the recommender
//! - [`loader`]: Reading bookworms from JSON files
//! - [`utils`]: Terminal display helpers
//! - [`config`]: Configuration management

pub mod analysis;
pub mod config;
pub mod loader;
pub mod models;
pub mod utils;

// Re-export commonly used types
pub use analysis::{find_common_books, recommend};
pub use loader::{load_bookworms, LoadError};
pub use models::{Book, Bookworm, Recommendation};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
