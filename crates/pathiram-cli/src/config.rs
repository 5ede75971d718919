//! Configuration
//!
//! Settings are loaded from `pathiram.toml` in the working directory:
//!
//! ```toml
//! [export]
//! output_dir = "out"
//! default_name = "pathiram-document"
//! formats = ["pdf", "docx"]
//!
//! [pdf]
//! font_paths = ["fonts/NotoSansTamil-Regular.ttf"]
//!
//! [store]
//! directory = "saved"
//! ```
//!
//! A missing file means defaults; a present but malformed file is an error.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Config file looked up in the working directory
pub const CONFIG_FILE: &str = "pathiram.toml";

/// Default download name, without extension
pub const DEFAULT_NAME: &str = "pathiram-document";

/// Export targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Pdf,
    Docx,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Docx => "docx",
        }
    }
}

/// Top-level settings structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub export: ExportSettings,
    pub pdf: PdfSettings,
    pub store: StoreSettings,
}

impl Settings {
    /// Parse settings from a TOML string
    pub fn from_toml_str(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Load from an explicit path, or from `pathiram.toml` if it exists
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let path = PathBuf::from(CONFIG_FILE);
                if !path.exists() {
                    return Ok(Self::default());
                }
                path
            }
        };
        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::from_toml_str(&text)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Directory export writes into
    pub output_dir: PathBuf,
    /// File name used when `--name` is not given
    pub default_name: String,
    /// Formats written by `export` without `--format`
    pub formats: Vec<ExportFormat>,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            default_name: DEFAULT_NAME.to_string(),
            formats: vec![ExportFormat::Pdf, ExportFormat::Docx],
        }
    }
}

/// Fonts handed to the Typst engine
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PdfSettings {
    pub font_paths: Vec<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSettings {
    pub directory: PathBuf,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("pathiram-store"),
        }
    }
}
