//! The conversion guide: check for the Markdown source, then print the
//! manual conversion instructions.
//!
//! Nothing here converts anything. The guide only probes for the source
//! file and writes text, so the same filesystem state always yields the
//! same output.

pub mod methods;
pub mod source;

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

pub use methods::{conversion_methods, write_tips, ConversionMethod, Detail, MethodKind, Step};
pub use source::{locate_source, GuideError};

use crate::utils::{write_banner, write_error, write_field, write_success};

pub const DEFAULT_SOURCE: &str = "USER_MANUAL.md";
pub const DEFAULT_TARGET: &str = "USER_MANUAL.docx";
pub const DEFAULT_TITLE: &str = "MatriViz User Manual";

/// Names used by the guide
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuideConfig {
    /// Markdown source, resolved against the working directory
    pub source: PathBuf,
    /// DOCX name shown in the instructions (never written)
    pub target: PathBuf,
    /// Title shown in the banner
    pub title: String,
}

impl Default for GuideConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
            target: PathBuf::from(DEFAULT_TARGET),
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

/// How a guide run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuideOutcome {
    /// Source found and instructions printed
    Printed,
    /// Source absent; an error was printed instead
    SourceMissing,
}

impl GuideOutcome {
    /// Process status: 0 on success, 1 when the source is missing
    pub fn status(self) -> u8 {
        match self {
            GuideOutcome::Printed => 0,
            GuideOutcome::SourceMissing => 1,
        }
    }
}

impl From<GuideOutcome> for ExitCode {
    fn from(outcome: GuideOutcome) -> Self {
        ExitCode::from(outcome.status())
    }
}

/// Print the conversion guide for `config` to `out`.
///
/// `working_dir` is both where the source is looked up and the directory
/// echoed when it is missing. A missing source is a normal outcome; only
/// output write failures are returned as errors.
pub fn run_guide<W: Write>(
    config: &GuideConfig,
    working_dir: &Path,
    out: &mut W,
) -> Result<GuideOutcome, GuideError> {
    write_banner(out, &config.title)?;

    let source_name = config.source.display().to_string();
    let target_name = config.target.display().to_string();

    match locate_source(working_dir, &config.source) {
        Ok(found) => tracing::debug!(path = %found.display(), "source file found"),
        Err(err @ GuideError::SourceMissing { .. }) => {
            tracing::debug!(error = %err, dir = %working_dir.display(), "source file missing");
            write_error(out, &err.to_string())?;
            write_field(out, "Current directory", &working_dir.display().to_string())?;
            out.flush()?;
            return Ok(GuideOutcome::SourceMissing);
        }
        Err(err) => return Err(err),
    }

    write_success(out, &format!("Found {}", source_name))?;
    writeln!(out)?;

    for method in conversion_methods(&source_name, &target_name) {
        tracing::debug!(method = %method.heading(), "writing method");
        method.write(out)?;
    }
    write_tips(out)?;
    out.flush()?;

    Ok(GuideOutcome::Printed)
}
