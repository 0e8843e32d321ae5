//! Directory driver: transforms every candidate XML file in place.
//!
//! Files are processed one at a time in lexicographic order. A file is only
//! rewritten when its content actually changes, so untouched files keep their
//! modification time.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{BatchError, FileError};
use crate::transform::{TransformOptions, transform};

/// Settings for [`process_directory`].
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Extension of candidate files, without the dot.
    pub extension: String,
    /// File name prefixes that are never processed (Doxygen index files).
    pub skip_prefixes: Vec<String>,
    /// Exact file names that are never processed.
    pub skip_names: Vec<String>,
    /// Settings passed to every file transform.
    pub transform: TransformOptions,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            extension: "xml".to_owned(),
            skip_prefixes: vec!["index".to_owned()],
            skip_names: vec!["combine.xslt".to_owned()],
            transform: TransformOptions::default(),
        }
    }
}

impl BatchOptions {
    fn is_skipped(&self, file_name: &str) -> bool {
        self.skip_prefixes
            .iter()
            .any(|prefix| file_name.starts_with(prefix.as_str()))
            || self.skip_names.iter().any(|name| name == file_name)
    }
}

/// Outcome of a batch run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    /// Candidate files after skip rules.
    pub total: usize,
    /// Files rewritten with new diagrams.
    pub modified: usize,
    /// Files that could not be read or written.
    pub failed: usize,
}

/// List candidate files of `dir` in lexicographic order.
///
/// Hidden files (leading dot) are never candidates.
///
/// # Errors
///
/// Returns [`BatchError::InvalidTargetDirectory`] if `dir` is not a directory.
pub fn candidate_files(dir: &Path, options: &BatchOptions) -> Result<Vec<PathBuf>, BatchError> {
    if !dir.is_dir() {
        return Err(BatchError::InvalidTargetDirectory(dir.to_path_buf()));
    }

    let pattern = format!(
        "{}/*.{}",
        glob::Pattern::escape(&dir.to_string_lossy()),
        options.extension
    );

    let match_options = glob::MatchOptions {
        require_literal_leading_dot: true,
        ..glob::MatchOptions::new()
    };

    let mut files: Vec<PathBuf> = glob::glob_with(&pattern, match_options)?
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read directory entry");
                None
            }
        })
        .filter(|path| path.is_file())
        .filter(|path| {
            path.file_name()
                .is_some_and(|name| !options.is_skipped(&name.to_string_lossy()))
        })
        .collect();
    files.sort();

    Ok(files)
}

/// Transform one file in place.
///
/// Returns `true` if the file was rewritten.
///
/// # Errors
///
/// Returns [`FileError`] if the file cannot be read, is not UTF-8, or cannot
/// be written back.
pub fn process_file(path: &Path, options: &TransformOptions) -> Result<bool, FileError> {
    let original = fs::read_to_string(path).map_err(|source| FileError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let result = transform(&original, options);
    for dropped in &result.warnings {
        tracing::warn!(
            path = %path.display(),
            member = %dropped.member,
            diagrams = dropped.diagrams,
            "Function has no description block; diagrams dropped"
        );
    }

    if result.text == original {
        return Ok(false);
    }

    fs::write(path, &result.text).map_err(|source| FileError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), diagrams = result.diagrams, "Inserted diagrams");

    Ok(true)
}

/// Transform every candidate file in `dir`.
///
/// Per-file failures are logged and counted; they never abort the batch.
///
/// # Errors
///
/// Returns [`BatchError`] only for directory-level problems.
pub fn process_directory(dir: &Path, options: &BatchOptions) -> Result<BatchSummary, BatchError> {
    let files = candidate_files(dir, options)?;
    let mut summary = BatchSummary {
        total: files.len(),
        ..BatchSummary::default()
    };

    for path in &files {
        match process_file(path, &options.transform) {
            Ok(true) => summary.modified += 1,
            Ok(false) => {}
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Skipping file");
                summary.failed += 1;
            }
        }
    }

    tracing::info!(
        total = summary.total,
        modified = summary.modified,
        failed = summary.failed,
        "Graph extraction completed"
    );

    Ok(summary)
}
