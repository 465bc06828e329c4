use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use std::path::Path;

/// Environment variable naming an optional configuration file
pub const CONFIG_ENV_VAR: &str = "FIGHTSTATS_CONFIG";

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    validate(&config)?;
    Ok(config)
}

/// Loads the file named by `FIGHTSTATS_CONFIG`, or the defaults when unset
pub fn load_config_from_env() -> Result<Config, ConfigError> {
    match std::env::var_os(CONFIG_ENV_VAR) {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", Path::new(&path).display());
            load_config(Path::new(&path))
        }
        None => {
            let config = Config::default();
            validate(&config)?;
            Ok(config)
        }
    }
}
