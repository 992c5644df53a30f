//! Loading bookworms from JSON files.
//!
//! The expected format is a list of bookworms, each with a name and the
//! books on their shelves:
//!
//! ```json
//! [
//!   {
//!     "name": "Fadi",
//!     "books": [
//!       {"author": "Margaret Atwood", "title": "The Handmaid's Tale"},
//!       {"author": "Sylvia Plath", "title": "The Bell Jar"}
//!     ]
//!   }
//! ]
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::models::Bookworm;

/// Read buffer size for shelves files
const READ_BUFFER_SIZE: usize = 1024 * 1024;

/// Errors that can occur when loading bookworms
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The source could not be opened or read
    #[error("cannot read {}", .path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The source was read but is not a valid list of bookworms
    #[error("invalid bookworms in {}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    /// Path of the source that failed to load
    pub fn path(&self) -> &Path {
        match self {
            LoadError::Unavailable { path, .. } | LoadError::Malformed { path, .. } => path,
        }
    }
}

/// Load the bookworms stored in the JSON file at `path`.
pub fn load_bookworms(path: impl AsRef<Path>) -> Result<Vec<Bookworm>, LoadError> {
    let path = path.as_ref();

    let file = File::open(path).map_err(|source| LoadError::Unavailable {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::with_capacity(READ_BUFFER_SIZE, file);

    let bookworms: Vec<Bookworm> = serde_json::from_reader(reader).map_err(|source| {
        // An I/O failure mid-read is still an unavailable source
        if source.is_io() {
            LoadError::Unavailable {
                path: path.to_path_buf(),
                source: source.into(),
            }
        } else {
            LoadError::Malformed {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    tracing::debug!(
        path = %path.display(),
        count = bookworms.len(),
        "loaded bookworms"
    );

    Ok(bookworms)
}

/// Parse bookworms from an in-memory JSON document.
pub fn parse_bookworms(json: &str) -> Result<Vec<Bookworm>, LoadError> {
    serde_json::from_str(json).map_err(|source| LoadError::Malformed {
        path: PathBuf::from("<inline>"),
        source,
    })
}

/// Find the first bookworm with the given name
pub fn find_bookworm<'a>(bookworms: &'a [Bookworm], name: &str) -> Option<&'a Bookworm> {
    bookworms.iter().find(|b| b.name == name)
}
