use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Default cap on the number of transitions kept from one file.
pub const DEFAULT_MAX_TRANSITIONS: usize = 30_000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid value for '{parameter}': {reason}")]
    InvalidValue {
        parameter: &'static str,
        reason: String,
    },

    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderConfig {
    /// Directory holding the `JPL/` and `COLOGNE/` catalog folders.
    pub root: PathBuf,
    pub max_transitions: usize,
}

/// The optional settings of a TOML config file, before defaults are applied.
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct PartialReaderConfig {
    pub root: Option<PathBuf>,
    pub max_transitions: Option<usize>,
}

impl PartialReaderConfig {
    /// Reads `root` and `max-transitions` from a TOML file.
    ///
    /// A relative `root` is resolved against the directory containing the file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let mut partial: Self = toml::from_str(&content).map_err(|e| ConfigError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;

        partial.root = partial.root.map(|root| match path.parent() {
            Some(parent) if root.is_relative() => parent.join(root),
            _ => root,
        });
        Ok(partial)
    }
}

impl ReaderConfig {
    /// Loads a complete configuration from a TOML file; `root` is required.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let partial = PartialReaderConfig::from_file(path)?;
        let mut builder = ReaderConfigBuilder::new();
        if let Some(root) = partial.root {
            builder = builder.root(root);
        }
        if let Some(max) = partial.max_transitions {
            builder = builder.max_transitions(max);
        }
        builder.build()
    }
}

#[derive(Default)]
pub struct ReaderConfigBuilder {
    root: Option<PathBuf>,
    max_transitions: Option<usize>,
}

impl ReaderConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.root = Some(path.into());
        self
    }
    pub fn max_transitions(mut self, max: usize) -> Self {
        self.max_transitions = Some(max);
        self
    }

    pub fn build(self) -> Result<ReaderConfig, ConfigError> {
        let max_transitions = self.max_transitions.unwrap_or(DEFAULT_MAX_TRANSITIONS);
        validate_max_transitions(max_transitions)?;
        Ok(ReaderConfig {
            root: self.root.ok_or(ConfigError::MissingParameter("root"))?,
            max_transitions,
        })
    }
}

pub(crate) fn validate_max_transitions(max: usize) -> Result<(), ConfigError> {
    if max == 0 {
        return Err(ConfigError::InvalidValue {
            parameter: "max_transitions",
            reason: "must be at least 1".to_string(),
        });
    }
    Ok(())
}
