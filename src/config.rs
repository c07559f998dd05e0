//! Configuration loaded from `config.toml`.
//!
//! Looks in `$XDG_CONFIG_HOME/keycalc/config.toml` unless a path is given.
//! Every field has a default, so a missing file is not an error.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::calculator::{Evaluator, FastevalEngine};
use crate::items::ErrorDisplay;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Text shown in place of a result when evaluation fails
    pub error_marker: String,
    /// Show the error message instead of the marker
    pub detailed_errors: bool,
    /// Longest expression accepted, in characters
    pub max_length: Option<usize>,
    /// Default tracing filter, overridden by `KEYCALC_LOG`
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            error_marker: "err".to_string(),
            detailed_errors: false,
            max_length: Some(256),
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Default location of the config file.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("keycalc").join("config.toml"))
    }

    /// Load from `path`, or from the default location if `path` is `None`.
    ///
    /// An explicit path must exist. A missing default file yields defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        if config.max_length == Some(0) {
            anyhow::bail!("max_length must be at least 1");
        }
        Ok(config)
    }

    pub fn error_display(&self) -> ErrorDisplay {
        if self.detailed_errors {
            ErrorDisplay::Detailed
        } else {
            ErrorDisplay::Marker(self.error_marker.clone())
        }
    }

    pub fn evaluator(&self) -> Evaluator<FastevalEngine> {
        let evaluator = Evaluator::new(FastevalEngine::new());
        match self.max_length {
            Some(max) => evaluator.with_max_length(max),
            None => evaluator,
        }
    }
}
