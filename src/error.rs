//! Error taxonomy for the wordlist search
//!
//! "No compound word found" is a normal outcome, not an error, and is
//! therefore represented as `None` by the finder rather than a variant here.

use std::path::PathBuf;

/// Errors that abort a search run
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The word list has no usable entries, so no minimum word length
    /// can be derived and the indexes cannot be built.
    #[error("word list is empty: no minimum word length can be derived")]
    EmptyWordList,

    /// The input file could not be opened or read. Never retried: this
    /// is a one-shot batch tool.
    #[error("failed to read word list {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
