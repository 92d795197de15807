//! @acp:module "Export Command"
//! @acp:summary "Write the answers as Markdown, Text and/or PDF files"
//! @acp:domain cli
//! @acp:layer handler

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Result};

use crate::config::Config;
use crate::error::QudError;
use crate::export::{ExportFormat, ExportStamp};

use super::{open_session, output};

/// Which files to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportTarget {
    One(ExportFormat),
    All,
}

impl ExportTarget {
    pub fn formats(&self) -> Vec<ExportFormat> {
        match self {
            ExportTarget::One(format) => vec![*format],
            ExportTarget::All => ExportFormat::all().to_vec(),
        }
    }
}

impl FromStr for ExportTarget {
    type Err = QudError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(ExportTarget::All)
        } else {
            s.parse().map(ExportTarget::One)
        }
    }
}

/// Options for the export command
#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub target: ExportTarget,
    /// Output directory; the configured one when unset
    pub output: Option<PathBuf>,
}

/// Execute the export command
pub fn execute_export(options: ExportOptions, config: Config) -> Result<()> {
    let session = open_session(&config);
    let dir = options.output.unwrap_or_else(|| config.output_dir.clone());
    let stamp = ExportStamp::now();

    let mut failed = 0;
    for format in options.target.formats() {
        match session.export(format, &dir, &stamp) {
            Ok(path) => output::success(format!("Exported {} to {}", format, path.display())),
            Err(e) => {
                failed += 1;
                output::failure(format!("Error exporting {}: {}", format, e));
            }
        }
    }

    if failed > 0 {
        bail!("{} export(s) failed", failed);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_parse() {
        assert_eq!("all".parse::<ExportTarget>().unwrap(), ExportTarget::All);
        assert_eq!(
            "markdown".parse::<ExportTarget>().unwrap(),
            ExportTarget::One(ExportFormat::Markdown)
        );
        assert!("html".parse::<ExportTarget>().is_err());
        assert_eq!(ExportTarget::All.formats().len(), 3);
    }
}
