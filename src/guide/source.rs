//! Source file lookup and guide errors

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised while producing the conversion guide.
#[derive(Error, Debug)]
pub enum GuideError {
    /// The Markdown source is not present in the working directory.
    #[error("{} not found in current directory", .file.display())]
    SourceMissing {
        /// Source path as given by the user
        file: PathBuf,
        /// Directory the lookup was resolved against
        dir: PathBuf,
    },

    /// Writing the guide to its output stream failed.
    #[error("failed to write guide output: {0}")]
    Io(#[from] io::Error),
}

impl GuideError {
    /// True when the reader of the output stream has gone away.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, GuideError::Io(err) if err.kind() == io::ErrorKind::BrokenPipe)
    }
}

/// Check that `file` exists relative to `working_dir`.
///
/// Absolute paths are checked as-is. Only existence is inspected; the file
/// is never opened.
pub fn locate_source(working_dir: &Path, file: &Path) -> Result<PathBuf, GuideError> {
    let candidate = working_dir.join(file);
    let exists = candidate.exists();
    tracing::debug!(path = %candidate.display(), exists, "checked source file");

    if exists {
        Ok(candidate)
    } else {
        Err(GuideError::SourceMissing {
            file: file.to_path_buf(),
            dir: working_dir.to_path_buf(),
        })
    }
}
