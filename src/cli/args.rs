//! Command-line argument definitions using clap

use clap::Parser;
use std::path::{Path, PathBuf};

use crate::guide::{GuideConfig, DEFAULT_SOURCE, DEFAULT_TITLE};

/// docx-guide - Print instructions for converting a Markdown manual to DOCX
#[derive(Parser, Debug)]
#[command(name = "docx-guide")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Markdown source file, relative to the current directory
    #[arg(short, long, default_value = DEFAULT_SOURCE)]
    pub input: PathBuf,

    /// DOCX file name used in the printed instructions.
    /// Defaults to the input with a '.docx' extension (e.g., USER_MANUAL.md → USER_MANUAL.docx).
    /// Nothing is ever written to this path.
    #[arg(short, long, value_parser = validate_docx_path)]
    pub output: Option<PathBuf>,

    /// Document title shown in the banner
    #[arg(long, default_value = DEFAULT_TITLE)]
    pub title: String,

    /// Print debug diagnostics to stderr (RUST_LOG overrides)
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,
}

impl Cli {
    /// Get the output path, deriving it from the input if not explicitly provided.
    /// The derived path sits next to the input with the extension replaced by '.docx'.
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| derive_docx_path(&self.input))
    }

    /// Build the guide configuration from the parsed arguments
    pub fn guide_config(&self) -> GuideConfig {
        GuideConfig {
            source: self.input.clone(),
            target: self.output_path(),
            title: self.title.clone(),
        }
    }
}

/// Replace (or add) the extension of `input` with `docx`
fn derive_docx_path(input: &Path) -> PathBuf {
    input.with_extension("docx")
}

/// Validator for the output parameter
fn validate_docx_path(s: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(s);
    let is_docx = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("docx"));

    if is_docx {
        Ok(path)
    } else {
        Err(format!("output must be a .docx file, got '{}'", s))
    }
}
