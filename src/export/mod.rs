//! @acp:module "Export"
//! @acp:summary "Renders the answer set as Markdown, Text or PDF"
//! @acp:domain cli
//! @acp:layer output
//!
//! Renderers are pure functions of the form data and an [`ExportStamp`];
//! section order and titles come from [`crate::registry::SECTIONS`].

pub mod markdown;
pub mod pdf;
pub mod text;

use chrono::{DateTime, FixedOffset, Local, Utc};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::PdfConfig;
use crate::error::{QudError, Result};
use crate::form::FormData;

pub use pdf::{layout_pdf, PdfLayout, PdfOp};

pub const DOCUMENT_TITLE: &str = "Questions Up & Down - Responses";

/// Attribution lines closing every export
pub const ATTRIBUTION: [&str; 2] = [
    "Generated by Questions Up & Down Web App",
    "Monty Sharma and Maia Schlussel 2025",
];

const FILE_PREFIX: &str = "questions-up-down";

/// Export file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Markdown,
    Text,
    Pdf,
}

impl ExportFormat {
    pub fn all() -> &'static [ExportFormat] {
        &[ExportFormat::Markdown, ExportFormat::Text, ExportFormat::Pdf]
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Markdown => "md",
            ExportFormat::Text => "txt",
            ExportFormat::Pdf => "pdf",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ExportFormat::Markdown => "Markdown",
            ExportFormat::Text => "Text",
            ExportFormat::Pdf => "PDF",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = QudError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            "text" | "txt" => Ok(ExportFormat::Text),
            "pdf" => Ok(ExportFormat::Pdf),
            _ => Err(QudError::Export(format!("unknown export format: {}", s))),
        }
    }
}

/// The instant an export is generated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportStamp {
    at: DateTime<FixedOffset>,
}

impl ExportStamp {
    pub fn new(at: DateTime<FixedOffset>) -> Self {
        Self { at }
    }

    pub fn now() -> Self {
        Self::new(Local::now().fixed_offset())
    }

    /// Human-readable local time, e.g. `10/17/2026, 3:04:05 PM`
    pub fn display(&self) -> String {
        self.at.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
    }

    /// UTC time with colons replaced, safe for file names
    pub fn file_stamp(&self) -> String {
        self.at.with_timezone(&Utc).format("%Y-%m-%dT%H-%M-%S").to_string()
    }
}

/// `questions-up-down-<stamp>.<ext>`
pub fn file_name(format: ExportFormat, stamp: &ExportStamp) -> String {
    format!("{}-{}.{}", FILE_PREFIX, stamp.file_stamp(), format.extension())
}

/// Render the complete file contents for a format
pub fn render(
    format: ExportFormat,
    data: &FormData,
    stamp: &ExportStamp,
    page: &PdfConfig,
) -> Result<Vec<u8>> {
    match format {
        ExportFormat::Markdown => Ok(markdown::render_markdown(data, stamp).into_bytes()),
        ExportFormat::Text => Ok(text::render_text(data, stamp).into_bytes()),
        ExportFormat::Pdf => {
            page.validate()?;
            let layout = layout_pdf(data, stamp, page);
            pdf::writer::write_pdf(&layout)
        }
    }
}

/// Render and write one export file into `dir`, returning its path
///
/// Content goes to a `.part` file that is renamed into place, so a failed
/// export never leaves a partial file under the final name.
pub fn write_export(
    format: ExportFormat,
    data: &FormData,
    stamp: &ExportStamp,
    page: &PdfConfig,
    dir: &Path,
) -> Result<PathBuf> {
    let bytes = render(format, data, stamp, page)?;

    std::fs::create_dir_all(dir)?;
    let path = dir.join(file_name(format, stamp));
    let partial = path.with_extension(format!("{}.part", format.extension()));

    if let Err(e) = std::fs::write(&partial, &bytes).and_then(|_| std::fs::rename(&partial, &path)) {
        let _ = std::fs::remove_file(&partial);
        return Err(QudError::Export(format!("{}: {}", path.display(), e)));
    }

    tracing::info!("Exported {} ({} bytes) to {}", format, bytes.len(), path.display());
    Ok(path)
}

/// Value to print for a field, or the format's placeholder when empty
pub(crate) fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn stamp() -> ExportStamp {
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        ExportStamp::new(offset.with_ymd_and_hms(2026, 3, 7, 15, 4, 5).unwrap())
    }

    #[test]
    fn test_format_parse() {
        assert_eq!("md".parse::<ExportFormat>().unwrap(), ExportFormat::Markdown);
        assert_eq!("TXT".parse::<ExportFormat>().unwrap(), ExportFormat::Text);
        assert_eq!("pdf".parse::<ExportFormat>().unwrap(), ExportFormat::Pdf);
        assert!("docx".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_stamp_formats() {
        assert_eq!(stamp().display(), "3/7/2026, 3:04:05 PM");
        assert_eq!(stamp().file_stamp(), "2026-03-07T13-04-05");
    }

    #[test]
    fn test_file_names() {
        assert_eq!(
            file_name(ExportFormat::Markdown, &stamp()),
            "questions-up-down-2026-03-07T13-04-05.md"
        );
        assert_eq!(
            file_name(ExportFormat::Pdf, &stamp()),
            "questions-up-down-2026-03-07T13-04-05.pdf"
        );
    }

    #[test]
    fn test_write_export_leaves_only_final_file() {
        let temp = TempDir::new().unwrap();
        let path = write_export(
            ExportFormat::Text,
            &FormData::new(),
            &stamp(),
            &PdfConfig::default(),
            temp.path(),
        )
        .unwrap();

        assert!(path.exists());
        let entries: Vec<_> = std::fs::read_dir(temp.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_failed_pdf_render_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let page = PdfConfig { margin: 200.0, ..PdfConfig::default() };
        let result = write_export(ExportFormat::Pdf, &FormData::new(), &stamp(), &page, temp.path());

        assert!(result.is_err());
        assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
    }
}
