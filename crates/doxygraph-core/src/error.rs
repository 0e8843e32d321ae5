//! Error types for batch processing.

use std::path::PathBuf;

/// Error that aborts a whole batch.
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    /// Target path is missing or not a directory.
    #[error("Directory does not exist: {}", .0.display())]
    InvalidTargetDirectory(PathBuf),

    /// Candidate file pattern could not be built.
    #[error("Invalid file pattern: {0}")]
    Pattern(#[from] glob::PatternError),
}

/// Error confined to a single file; the batch continues.
#[derive(Debug, thiserror::Error)]
pub enum FileError {
    /// File could not be read or is not valid UTF-8.
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Transformed text could not be written back.
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
