use super::defaults::DefaultsConfig;
use crate::cli::Cli;
use crate::error::{CliError, Result};
use linecat::engine::config::{PartialReaderConfig, ReaderConfig, ReaderConfigBuilder};
use std::path::PathBuf;
use tracing::debug;

/// Resolves the reader configuration from command-line flags, `--set` values,
/// the config file and built-in defaults, in that order of precedence.
pub fn build_config(cli: &Cli) -> Result<ReaderConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &cli.config {
        PartialReaderConfig::from_file(config_path)?
    } else {
        PartialReaderConfig::default()
    };
    let file_config = apply_set_values(file_config, &cli.set_values)?;

    let root = match cli.root.clone().or(file_config.root) {
        Some(root) => root,
        None => defaults.catalog_root()?,
    };
    let max_transitions = cli
        .max_transitions
        .or(file_config.max_transitions)
        .unwrap_or(defaults.max_transitions);

    let config = ReaderConfigBuilder::new()
        .root(root)
        .max_transitions(max_transitions)
        .build()?;
    debug!("Resolved reader configuration: {:?}", config);
    Ok(config)
}

fn apply_set_values(
    mut config: PartialReaderConfig,
    set_values: &[String],
) -> Result<PartialReaderConfig> {
    for kv_pair in set_values {
        let (key, value_str) = kv_pair.split_once('=').ok_or_else(|| {
            CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            ))
        })?;

        match key.trim() {
            "root" => config.root = Some(PathBuf::from(value_str.trim())),
            "max-transitions" => {
                config.max_transitions = Some(value_str.trim().parse().map_err(|_| {
                    CliError::Config(format!(
                        "Invalid integer value for {}: {}",
                        key, value_str
                    ))
                })?);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unknown configuration key '{}'. Expected 'root' or 'max-transitions'.",
                    key
                )));
            }
        }
    }
    Ok(config)
}
