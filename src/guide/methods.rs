//! The manual conversion methods and closing tips

use std::io::{self, Write};

use crate::utils::{
    write_bullet, write_command, write_link, write_section_header, write_step,
};

/// Online services that accept Markdown and return DOCX
pub const ONLINE_CONVERTERS: [&str; 3] = [
    "https://cloudconvert.com/markdown-to-docx",
    "https://www.markdowntodocx.com/",
    "https://www.online-convert.com/",
];

pub const PANDOC_INSTALL_URL: &str = "https://pandoc.org/installing.html";

/// General advice printed after the methods
pub const TIPS: [&str; 3] = [
    "The DOCX version will maintain the structure and formatting",
    "Table of Contents links will work in the DOCX file",
    "Images and code blocks will be properly formatted",
];

/// Which tool a method relies on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodKind {
    Pandoc,
    OnlineConverters,
    MicrosoftWord,
    LibreOffice,
}

impl MethodKind {
    pub const ALL: [MethodKind; 4] = [
        MethodKind::Pandoc,
        MethodKind::OnlineConverters,
        MethodKind::MicrosoftWord,
        MethodKind::LibreOffice,
    ];

    pub fn title(self) -> &'static str {
        match self {
            MethodKind::Pandoc => "Using Pandoc (Recommended)",
            MethodKind::OnlineConverters => "Online Converters",
            MethodKind::MicrosoftWord => "Using Microsoft Word",
            MethodKind::LibreOffice => "Using LibreOffice",
        }
    }
}

/// Extra line printed under a step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Detail {
    Command(String),
    Link(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub text: String,
    pub details: Vec<Detail>,
}

impl Step {
    fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            details: Vec::new(),
        }
    }

    fn with_detail(mut self, detail: Detail) -> Self {
        self.details.push(detail);
        self
    }
}

/// A titled list of numbered steps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionMethod {
    pub number: usize,
    pub kind: MethodKind,
    pub steps: Vec<Step>,
}

impl ConversionMethod {
    pub fn heading(&self) -> String {
        format!("Method {}: {}", self.number, self.kind.title())
    }

    /// Write the heading, steps and trailing blank line
    pub fn write<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write_section_header(out, &self.heading())?;
        for (idx, step) in self.steps.iter().enumerate() {
            write_step(out, idx + 1, &step.text)?;
            for detail in &step.details {
                match detail {
                    Detail::Command(cmd) => write_command(out, cmd)?,
                    Detail::Link(url) => write_link(out, url)?,
                }
            }
        }
        writeln!(out)
    }
}

/// Build the four methods for converting `source` into `target`.
///
/// Names are embedded exactly as given; they are expected to be display
/// strings of user-supplied paths.
pub fn conversion_methods(source: &str, target: &str) -> Vec<ConversionMethod> {
    MethodKind::ALL
        .iter()
        .enumerate()
        .map(|(idx, &kind)| ConversionMethod {
            number: idx + 1,
            kind,
            steps: steps_for(kind, source, target),
        })
        .collect()
}

fn steps_for(kind: MethodKind, source: &str, target: &str) -> Vec<Step> {
    match kind {
        MethodKind::Pandoc => vec![
            Step::new(format!("Install Pandoc: {}", PANDOC_INSTALL_URL)),
            Step::new("Run this command:").with_detail(Detail::Command(format!(
                "pandoc \"{}\" -o \"{}\"",
                source, target
            ))),
        ],
        MethodKind::OnlineConverters => {
            let tools = ONLINE_CONVERTERS
                .iter()
                .fold(Step::new("Use one of these online tools:"), |step, url| {
                    step.with_detail(Detail::Link(*url))
                });
            vec![Step::new(format!("Copy the content from {}", source)), tools]
        }
        MethodKind::MicrosoftWord => vec![
            Step::new("Open Microsoft Word"),
            Step::new("Go to File → Open"),
            Step::new(format!("Select '{}'", source)),
            Step::new("Word will automatically convert it to DOCX format"),
            Step::new("Save as DOCX file"),
        ],
        MethodKind::LibreOffice => vec![
            Step::new("Open LibreOffice Writer"),
            Step::new(format!("Open '{}'", source)),
            Step::new("Go to File → Save As"),
            Step::new("Choose 'Microsoft Word 2007-365 (.docx)' format"),
            Step::new(format!("Save as '{}'", target)),
        ],
    }
}

/// Write the closing tips section
pub fn write_tips<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Additional Tips:")?;
    for tip in TIPS {
        write_bullet(out, tip)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(method: &ConversionMethod) -> String {
        let mut buf = Vec::new();
        method.write(&mut buf).unwrap();
        console::strip_ansi_codes(&String::from_utf8(buf).unwrap()).into_owned()
    }

    #[test]
    fn test_four_methods_in_order() {
        let methods = conversion_methods("USER_MANUAL.md", "USER_MANUAL.docx");
        let headings: Vec<String> = methods.iter().map(|m| m.heading()).collect();

        assert_eq!(
            headings,
            vec![
                "Method 1: Using Pandoc (Recommended)",
                "Method 2: Online Converters",
                "Method 3: Using Microsoft Word",
                "Method 4: Using LibreOffice",
            ]
        );
    }

    #[test]
    fn test_pandoc_command_quotes_both_names() {
        let methods = conversion_methods("docs/guide.md", "docs/guide.docx");
        let text = plain(&methods[0]);

        assert!(text.contains("   pandoc \"docs/guide.md\" -o \"docs/guide.docx\"\n"));
        assert!(text.contains("1. Install Pandoc: https://pandoc.org/installing.html"));
    }

    #[test]
    fn test_online_converters_lists_every_link() {
        let methods = conversion_methods("USER_MANUAL.md", "USER_MANUAL.docx");
        let text = plain(&methods[1]);

        assert!(text.contains("1. Copy the content from USER_MANUAL.md"));
        for url in ONLINE_CONVERTERS {
            assert!(text.contains(&format!("   - {}", url)), "missing {url}");
        }
    }

    #[test]
    fn test_libreoffice_saves_to_target() {
        let methods = conversion_methods("a.md", "b.docx");
        let last = methods[3].steps.last().unwrap();

        assert_eq!(last.text, "Save as 'b.docx'");
        assert_eq!(methods[3].steps.len(), 5);
    }

    #[test]
    fn test_method_block_layout() {
        let methods = conversion_methods("USER_MANUAL.md", "USER_MANUAL.docx");
        let text = plain(&methods[2]);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Method 3: Using Microsoft Word");
        assert_eq!(lines[1], "-".repeat(40));
        assert_eq!(lines[4], "3. Select 'USER_MANUAL.md'");
        assert!(text.ends_with("5. Save as DOCX file\n\n"));
    }

    #[test]
    fn test_tips_section() {
        let mut buf = Vec::new();
        write_tips(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.starts_with("Additional Tips:\n"));
        assert_eq!(text.lines().filter(|l| l.starts_with("- ")).count(), 3);
    }
}
