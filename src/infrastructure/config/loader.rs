use std::path::Path;

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::config::Config;
use crate::domain::models::Strategy;

/// Directory holding project configuration, relative to the working directory.
pub const CONFIG_DIR: &str = ".taskrank";

/// Prefix of environment variable overrides.
pub const ENV_PREFIX: &str = "TASKRANK_";

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    /// `max_tasks` is zero
    #[error("Invalid max_tasks: {0}. Must be at least 1")]
    InvalidMaxTasks(usize),

    /// `server.port` is zero
    #[error("Invalid server port: {0}. Must be non-zero")]
    InvalidPort(u16),

    /// `server.host` is empty
    #[error("Server host cannot be empty")]
    EmptyHost,

    /// Unknown log level
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// Unknown log format
    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    /// Unknown rotation policy
    #[error("Invalid log rotation: {0}. Must be one of: daily, hourly, never")]
    InvalidRotation(String),

    /// Unknown default strategy
    #[error("Invalid default_strategy: {0}. Must be one of: smart_balance, fastest_wins, high_impact, deadline_driven")]
    InvalidDefaultStrategy(String),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration relative to the current directory
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .taskrank/config.yaml
    /// 3. .taskrank/local.yaml (optional local overrides)
    /// 4. Environment variables (TASKRANK_* prefix, `__` separates nested keys)
    pub fn load() -> Result<Config> {
        Self::load_from_dir(".")
    }

    /// Load configuration using `root` as the project directory
    pub fn load_from_dir(root: impl AsRef<Path>) -> Result<Config> {
        let dir = root.as_ref().join(CONFIG_DIR);
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(dir.join("config.yaml")))
            .merge(Yaml::file(dir.join("local.yaml")))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .extract()
            .with_context(|| format!("Failed to load config from {}", path.as_ref().display()))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        if config.max_tasks == 0 {
            return Err(ConfigError::InvalidMaxTasks(config.max_tasks));
        }

        if config.default_strategy.parse::<Strategy>().is_err() {
            return Err(ConfigError::InvalidDefaultStrategy(
                config.default_strategy.clone(),
            ));
        }

        if config.server.host.trim().is_empty() {
            return Err(ConfigError::EmptyHost);
        }
        if config.server.port == 0 {
            return Err(ConfigError::InvalidPort(config.server.port));
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&config.logging.rotation.as_str()) {
            return Err(ConfigError::InvalidRotation(config.logging.rotation.clone()));
        }

        Ok(())
    }
}
