//! Shared test utilities and fixture helpers

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const MANUAL: &str = "USER_MANUAL.md";

/// Create a temporary directory containing a small `USER_MANUAL.md`
pub fn create_manual_dir() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let manual_path = temp_dir.path().join(MANUAL);
    std::fs::write(&manual_path, "# User Manual\n\n## Getting Started\n").unwrap();
    (temp_dir, manual_path)
}

/// Create an empty temporary directory
pub fn create_empty_dir() -> TempDir {
    TempDir::new().unwrap()
}

/// Sorted file names in `dir`
pub fn list_dir(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// Decode captured bytes and drop any colour codes
pub fn plain_text(bytes: &[u8]) -> String {
    let text = String::from_utf8(bytes.to_vec()).expect("guide output should be UTF-8");
    console::strip_ansi_codes(&text).into_owned()
}

/// Assert that every needle appears in `text`, in the given order
pub fn assert_in_order(text: &str, needles: &[&str]) {
    let mut cursor = 0;
    for needle in needles {
        match text[cursor..].find(needle) {
            Some(pos) => cursor += pos + needle.len(),
            None => panic!(
                "Expected '{}' after byte {} in output:\n{}",
                needle, cursor, text
            ),
        }
    }
}
