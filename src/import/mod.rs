//! @acp:module "Import"
//! @acp:summary "Loads answers from JSON or Text export files"
//! @acp:domain cli
//! @acp:layer parser
//!
//! JSON input is all-or-nothing: anything other than a well-formed object
//! fails the import. Text input is parsed field by field and never fails.

pub mod text;

use std::collections::HashMap;
use std::path::Path;

use serde_json::Value;

use crate::error::{QudError, Result};
use crate::form::{collect, FormData};

pub use text::parse_text;

/// Recognised import file kinds, chosen by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportKind {
    Json,
    Text,
}

impl ImportKind {
    /// Kind for a path; the extension comparison ignores case
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("json") => Ok(ImportKind::Json),
            Some("txt") => Ok(ImportKind::Text),
            _ => Err(QudError::UnsupportedImport(path.display().to_string())),
        }
    }
}

/// Outcome of a successful import
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSummary {
    pub file_name: String,
    /// Number of fields the file supplied
    pub fields: usize,
}

/// @acp:summary "Parse a JSON object of field id to value"
pub fn parse_json(input: &str) -> Result<FormData> {
    let parsed: Value =
        serde_json::from_str(input).map_err(|e| QudError::ImportParse(e.to_string()))?;

    let Value::Object(object) = parsed else {
        return Err(QudError::ImportParse(
            "expected a JSON object of field ids to answers".into(),
        ));
    };

    let mut raw: HashMap<String, String> = HashMap::with_capacity(object.len());
    for (key, value) in object {
        let value = match value {
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Null | Value::Array(_) | Value::Object(_) => {
                tracing::warn!("Skipping non-text value for '{}' in JSON import", key);
                continue;
            }
        };
        raw.insert(key, value);
    }

    Ok(collect(&raw))
}

/// Parse file contents according to their kind
pub fn parse(kind: ImportKind, input: &str) -> Result<FormData> {
    match kind {
        ImportKind::Json => parse_json(input),
        ImportKind::Text => Ok(parse_text(input)),
    }
}

/// @acp:summary "Read and parse an import file"
pub fn load_file(path: &Path) -> Result<FormData> {
    let kind = ImportKind::from_path(path)?;
    let content = std::fs::read_to_string(path)?;
    let data = parse(kind, &content)?;
    tracing::debug!("Parsed {} fields from {}", data.len(), path.display());
    Ok(data)
}
