use super::FunctionsConfig;
use crate::errors::{Error, Result};
use std::fs;
use std::path::Path;

use tracing::info;

/// Loads and parses a functions configuration from a YAML or TOML file
///
/// The format is picked from the file extension: `.yaml`/`.yml` or `.toml`.
///
/// # Arguments
///
/// * `file_path` - Path to the configuration file
///
/// # Errors
///
/// Returns an error if:
/// * The file cannot be read
/// * The extension is neither YAML nor TOML
/// * The content cannot be parsed into a FunctionsConfig
pub fn load_functions_config(file_path: &str) -> Result<FunctionsConfig> {
    let extension = Path::new(file_path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    let config: FunctionsConfig = match extension.as_deref() {
        Some("yaml") | Some("yml") => {
            let yaml_str = fs::read_to_string(file_path)?;
            serde_yaml::from_str(&yaml_str)?
        }
        Some("toml") => {
            let toml_str = fs::read_to_string(file_path)?;
            toml::from_str(&toml_str)?
        }
        _ => return Err(Error::UnsupportedConfigFormat(file_path.to_string())),
    };

    info!(
        "Loaded functions configuration from {} ({} functions)",
        file_path,
        config.functions.len()
    );
    Ok(config)
}
