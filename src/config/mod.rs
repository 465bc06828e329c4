//! Configuration module for Fightstats
//!
//! Every setting has a default, so the importer runs without a config file.
//! A TOML file can override the listing host, the concurrency cap and the
//! HTTP timeouts.
//!
//! # Example
//!
//! ```no_run
//! use fightstats::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("fightstats.toml")).unwrap();
//! println!("Concurrency cap: {}", config.scheduler.max_concurrent_requests);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, HttpConfig, SchedulerConfig, SourceConfig};

// Re-export parser functions
pub use parser::{load_config, load_config_from_env, CONFIG_ENV_VAR};
pub use validation::validate;
