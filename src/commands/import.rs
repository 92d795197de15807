//! @acp:module "Import Command"
//! @acp:summary "Merge answers from a JSON or Text export file"
//! @acp:domain cli
//! @acp:layer handler

use std::path::PathBuf;

use anyhow::Result;

use crate::config::Config;

use super::{open_session, output};

/// Options for the import command
#[derive(Debug, Clone)]
pub struct ImportOptions {
    pub file: PathBuf,
}

/// Execute the import command
pub fn execute_import(options: ImportOptions, config: Config) -> Result<()> {
    let mut session = open_session(&config);
    let summary = session.import_file(&options.file)?;

    if summary.fields == 0 {
        output::warning(format!("No answers found in {}", summary.file_name));
    } else {
        output::success(format!(
            "Imported {} field(s) from {}",
            summary.fields, summary.file_name
        ));
    }
    Ok(())
}
