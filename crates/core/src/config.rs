//! Theme config documents.
//!
//! A document mirrors the shape of a Tailwind config: the template globs the
//! class generator scans, the color table under `theme.extend.colors`, and a
//! list of plugin module names. The same document can be stored as JSON or
//! TOML.

use std::path::{Path, PathBuf};

use reduce_theme_tokens::ThemeTable;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::palette::BREEZE;

/// Template globs used when a document does not list any.
pub const DEFAULT_CONTENT: &str = "./templates/**/*.html";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid JSON theme document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid TOML theme document: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("failed to serialize TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
    #[error("unsupported theme document {} (expected .json or .toml)", .0.display())]
    UnsupportedFormat(PathBuf),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    /// Pick the format from the file extension, ignoring case.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json") => Ok(ConfigFormat::Json),
            Some("toml") => Ok(ConfigFormat::Toml),
            _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// A full theme document.
///
/// Plain values come before the `theme` table so the TOML serializer never
/// has to emit a value after a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    #[serde(default = "default_content")]
    pub content: Vec<String>,
    #[serde(default)]
    pub plugins: Vec<String>,
    pub theme: ThemeSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeSection {
    pub extend: ThemeExtension,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeExtension {
    pub colors: ThemeTable,
}

fn default_content() -> Vec<String> {
    vec![DEFAULT_CONTENT.to_string()]
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self::with_colors(BREEZE)
    }
}

impl ThemeConfig {
    pub fn with_colors(colors: ThemeTable) -> Self {
        Self {
            content: default_content(),
            plugins: Vec::new(),
            theme: ThemeSection {
                extend: ThemeExtension { colors },
            },
        }
    }

    pub fn colors(&self) -> &ThemeTable {
        &self.theme.extend.colors
    }

    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn parse(text: &str, format: ConfigFormat) -> Result<Self, ConfigError> {
        match format {
            ConfigFormat::Json => Self::from_json_str(text),
            ConfigFormat::Toml => Self::from_toml_str(text),
        }
    }

    /// Read a document from disk, choosing the format by extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::parse(&text, format).inspect_err(|err| {
            tracing::warn!(path = %path.display(), error = %err, "rejected theme document");
        })?;
        tracing::debug!(
            path = %path.display(),
            ?format,
            content = config.content.len(),
            plugins = config.plugins.len(),
            "loaded theme document"
        );
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }
}
