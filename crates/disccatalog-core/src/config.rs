/// Run configuration.
///
/// Everything has a built-in default, so a configuration file is optional.
/// When present it is JSON and may set any subset of the fields:
///
/// ```json
/// {
///   "image_cap": 3,
///   "format": "html",
///   "style": { "section_prefix": "Cara", "root_title": "Archivos en Raíz" }
/// }
/// ```
use crate::catalog::{AssemblyOptions, DEFAULT_IMAGE_CAP};
use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

pub const DEFAULT_ROOT_TITLE: &str = "Files in Root";
pub const DEFAULT_SECTION_PREFIX: &str = "Side";
pub const DEFAULT_HEADING: &str = "MUSIC ARCHIVE";

/// Output document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Html,
    Json,
    Csv,
}

impl OutputFormat {
    /// File extension (without dot) for documents in this format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "html" | "htm" => Ok(Self::Html),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(format!("unknown output format '{other}' (expected html, json or csv)")),
        }
    }
}

/// Text used by the HTML renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleOptions {
    /// Page heading above the volume/catalog line.
    pub heading: String,
    /// Word printed before each section label, e.g. "Side A".
    pub section_prefix: String,
    /// Title of the section listing files at the volume root.
    pub root_title: String,
    /// Free text shown in the footer before the date.
    pub footer_note: Option<String>,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            heading: DEFAULT_HEADING.to_string(),
            section_prefix: DEFAULT_SECTION_PREFIX.to_string(),
            root_title: DEFAULT_ROOT_TITLE.to_string(),
            footer_note: None,
        }
    }
}

/// Top-level configuration for one catalog run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Largest images kept per group.
    pub image_cap: usize,
    pub format: OutputFormat,
    pub style: StyleOptions,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            image_cap: DEFAULT_IMAGE_CAP,
            format: OutputFormat::default(),
            style: StyleOptions::default(),
        }
    }
}

impl CatalogConfig {
    /// Load a JSON configuration file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| CatalogError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        serde_json::from_str(&text).map_err(|e| CatalogError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// The subset of settings the assembler uses.
    pub fn assembly_options(&self) -> AssemblyOptions {
        AssemblyOptions {
            image_cap: self.image_cap,
            root_title: self.style.root_title.clone(),
        }
    }
}

/// Default output file name for a volume, e.g. `index_DVD_D.html`.
pub fn default_file_name(volume_tag: &str, format: OutputFormat) -> String {
    format!("index_DVD_{volume_tag}.{}", format.extension())
}
