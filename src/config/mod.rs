//! @acp:module "Configuration"
//! @acp:summary "Project configuration loading and defaults"
//! @acp:domain cli
//! @acp:layer config

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{QudError, Result};
use crate::registry::industry::Industry;
use crate::registry::FieldId;
use crate::session::InputMode;
use crate::storage::default_data_dir;

/// Default config file name, looked up in the working directory
pub const CONFIG_FILE: &str = ".qud.config.json";

/// @acp:summary "Main QUD configuration structure"
/// @acp:lock normal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory holding the persisted answers (platform data dir when unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// Directory export files are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Prompt template shown while answering
    #[serde(default)]
    pub industry: Industry,

    /// How how-fields are answered interactively
    #[serde(default)]
    pub input_mode: InputMode,

    /// Fields `qud validate` insists on
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required_fields: Vec<FieldId>,

    /// PDF page geometry
    #[serde(default)]
    pub pdf: PdfConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            output_dir: default_output_dir(),
            industry: Industry::default(),
            input_mode: InputMode::default(),
            required_fields: Vec::new(),
            pdf: PdfConfig::default(),
        }
    }
}

impl Config {
    /// @acp:summary "Load config from a .qud.config.json file"
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// @acp:summary "Save config to a file"
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load the file when it exists, defaults otherwise
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Resolved persistence directory
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(default_data_dir)
    }

    /// Reject values the renderers cannot work with
    pub fn validate(&self) -> Result<()> {
        self.pdf.validate()
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

/// @acp:summary "PDF page geometry in millimetres"
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PdfConfig {
    #[serde(default = "default_page_width")]
    pub page_width: f32,

    #[serde(default = "default_page_height")]
    pub page_height: f32,

    #[serde(default = "default_margin")]
    pub margin: f32,
}

fn default_page_width() -> f32 {
    210.0
}

fn default_page_height() -> f32 {
    297.0
}

fn default_margin() -> f32 {
    20.0
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            page_width: default_page_width(),
            page_height: default_page_height(),
            margin: default_margin(),
        }
    }
}

impl PdfConfig {
    pub fn validate(&self) -> Result<()> {
        if self.margin < 0.0 {
            return Err(QudError::Config("pdf margin must not be negative".into()));
        }
        // Room for at least one line of the largest font between the margins
        if self.page_width - 2.0 * self.margin < 20.0 || self.page_height - 2.0 * self.margin < 30.0 {
            return Err(QudError::Config(format!(
                "pdf margin {} leaves no room on a {}x{} page",
                self.margin, self.page_width, self.page_height
            )));
        }
        Ok(())
    }
}
