//! Terminal styling utilities for the conversion guide

use std::io::{self, Write};

use console::style;

// Markers are part of the fixed guide text and never depend on the locale
pub const CHECK: &str = "✅ ";
pub const CROSS: &str = "❌ ";

/// Width of the rule printed under the banner
pub const BANNER_RULE_WIDTH: usize = 50;

/// Width of the rule printed under each section heading
pub const SECTION_RULE_WIDTH: usize = 40;

/// Write the application banner
pub fn write_banner<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        style(format!("{} - DOCX Conversion Helper", title)).cyan().bold()
    )?;
    writeln!(out, "{}", style("=".repeat(BANNER_RULE_WIDTH)).dim())
}

/// Write a section heading followed by a rule
pub fn write_section_header<W: Write>(out: &mut W, heading: &str) -> io::Result<()> {
    writeln!(out, "{}", style(heading).white().bold())?;
    writeln!(out, "{}", style("-".repeat(SECTION_RULE_WIDTH)).dim())
}

/// Write a success message
pub fn write_success<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(out, "{}{}", CHECK, style(message).green())
}

/// Write an error message
pub fn write_error<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(
        out,
        "{}{}",
        CROSS,
        style(format!("Error: {}", message)).red().bold()
    )
}

/// Write a labelled value, e.g. `Current directory: /home/user`
pub fn write_field<W: Write>(out: &mut W, label: &str, value: &str) -> io::Result<()> {
    writeln!(out, "{}: {}", label, style(value).dim())
}

/// Write a numbered step
pub fn write_step<W: Write>(out: &mut W, number: usize, text: &str) -> io::Result<()> {
    writeln!(out, "{}. {}", style(number).cyan(), text)
}

/// Write a shell command indented under its step
pub fn write_command<W: Write>(out: &mut W, command: &str) -> io::Result<()> {
    writeln!(out, "   {}", style(command).yellow())
}

/// Write a web link indented under its step
pub fn write_link<W: Write>(out: &mut W, url: &str) -> io::Result<()> {
    writeln!(out, "   - {}", style(url).underlined())
}

/// Write a top-level bullet
pub fn write_bullet<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    writeln!(out, "- {}", text)
}
