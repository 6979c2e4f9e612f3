//! docx-guide: Markdown to DOCX Conversion Helper
//!
//! A library that checks for a Markdown user manual and prints
//! step-by-step instructions for converting it to DOCX with external tools.

pub mod cli;
pub mod guide;
pub mod utils;
