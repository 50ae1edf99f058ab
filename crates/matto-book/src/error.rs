//! Error types for opening-book loading.

/// Errors when loading opening books from disk.
///
/// Individual unreadable or malformed book files are skipped with a warning;
/// these errors cover failures that disable book loading entirely.
#[derive(Debug, thiserror::Error)]
pub enum BookError {
    /// The book directory could not be read.
    #[error("failed to read book directory {path}: {source}")]
    ReadDir {
        /// The directory that was being read.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
