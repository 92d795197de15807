//! @acp:module "Errors"
//! @acp:summary "Error taxonomy for storage, import, export and configuration"
//! @acp:domain cli
//! @acp:layer model

use thiserror::Error;

/// Errors raised by the QUD library
#[derive(Debug, Error)]
pub enum QudError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Persisted copy exists but cannot be read back
    #[error("Stored data is corrupt: {0}")]
    StorageCorrupt(String),

    /// Structured import input is malformed; nothing was imported
    #[error("Could not parse import file: {0}")]
    ImportParse(String),

    #[error("Unsupported import file '{0}' (expected .json or .txt)")]
    UnsupportedImport(String),

    #[error("Export failed: {0}")]
    Export(String),

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Unknown option: {0}")]
    UnknownOption(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, QudError>;
