//! TOML configuration file support.
//!
//! Settings are layered with figment: built-in defaults, then an optional
//! TOML file, then whatever the user set on the command line.

use std::path::Path;

use figment::Figment;
use figment::providers::{Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::analysis::DEFAULT_PAIRS_LIMIT;
use crate::wcag::Level;

/// Error type for configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Layered extraction failed (bad value in file or override)
    #[error("configuration error: {0}")]
    Figment(#[from] Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        Self::Figment(Box::new(e))
    }
}

/// How results are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
    Table,
}

/// What the CLI computes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Accessible pairs for a target level
    #[default]
    Pairs,
    /// Full analysis: colors, matrix and criteria
    Matrix,
}

/// Root configuration structure for TOML files.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContrastConfig {
    pub analysis: AnalysisConfig,
    pub output: OutputConfig,
}

/// Analysis settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub mode: Mode,
    /// Target WCAG level for pair filtering
    pub level: Level,
    /// Maximum number of pairs to print (capped at 200)
    pub limit: usize,
    /// Compute the matrix diagonal instead of fixing it at 1
    pub include_self: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            level: Level::default(),
            limit: DEFAULT_PAIRS_LIMIT,
            include_self: false,
        }
    }
}

/// Output settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

/// Sparse overrides; unset fields are skipped so they do not shadow lower layers.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigOverrides {
    pub analysis: AnalysisOverrides,
    pub output: OutputOverrides,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AnalysisOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<Level>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_self: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct OutputOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,
}

impl ContrastConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Merge defaults, an optional TOML file and CLI overrides, in that order.
    pub fn layered(file: Option<&Path>, overrides: &ConfigOverrides) -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = file {
            if !path.exists() {
                return Err(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("config file not found: {}", path.display()),
                )
                .into());
            }
            figment = figment.merge(Toml::file(path));
        }
        let config = figment.merge(Serialized::defaults(overrides)).extract()?;
        Ok(config)
    }
}
