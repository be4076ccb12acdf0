use crate::error::{CliError, Result};
use directories::ProjectDirs;
use linecat::engine::config::DEFAULT_MAX_TRANSITIONS;
use std::path::PathBuf;

pub struct DefaultsConfig {
    pub max_transitions: usize,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            max_transitions: DEFAULT_MAX_TRANSITIONS,
        }
    }
}

impl DefaultsConfig {
    /// The per-user data directory, e.g. `~/.local/share/linecat` on Linux.
    pub fn catalog_root(&self) -> Result<PathBuf> {
        ProjectDirs::from("org", "linecat", "linecat")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or_else(|| {
                CliError::Other(anyhow::anyhow!(
                    "Could not determine default catalog directory. Use --root."
                ))
            })
    }
}
