//! Planner configuration
//!
//! Holds the default layout parameters and output preferences used when a
//! room file does not set them. Stored as JSON or TOML, by default under the
//! platform config directory.

use crate::error::{SettingsError, SettingsResult};
use plankwise_core::LayoutParameters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Highest number of decimals printed in a cutting schedule
pub const MAX_PRECISION: usize = 6;

/// Planner configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Shuffle same-height columns after laying out
    pub shuffle: bool,
    /// Seed for reproducible shuffles; a fresh one is drawn when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Decimals printed in the cutting schedule
    pub precision: usize,
    /// Parameters used when the room file leaves them out
    pub parameters: LayoutParameters,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            shuffle: true,
            seed: None,
            precision: 1,
            parameters: LayoutParameters::default(),
        }
    }
}

enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> SettingsResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(SettingsError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

impl PlannerConfig {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// `<config dir>/plankwise/config.toml`, when the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("plankwise").join("config.toml"))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!("Loaded planner config from {}", path.display());
        Ok(config)
    }

    /// Load `path` when given, else the default path when it exists, else defaults
    pub fn load_or_default(path: Option<&Path>) -> SettingsResult<Self> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => Self::load_from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        self.parameters.validate()?;

        if self.precision > MAX_PRECISION {
            return Err(SettingsError::InvalidSetting {
                key: "precision".to_string(),
                reason: format!("must be at most {}", MAX_PRECISION),
            });
        }

        Ok(())
    }
}
