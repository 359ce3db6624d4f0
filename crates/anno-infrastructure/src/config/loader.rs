//! Configuration loader
//!
//! Loads configuration from defaults, an optional TOML file, and
//! environment variables, in that precedence order. Nested keys use a
//! double-underscore separator (e.g. `ANNO_SERVER__PORT`). The LLM API
//! key may also come from the conventional `OPENAI_API_KEY` variable.

use crate::config::AppConfig;
use crate::logging::parse_log_level;
use anno_domain::error::{Error, Result};
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use std::env;
use std::path::{Path, PathBuf};

/// Environment variable prefix for configuration overrides
pub const CONFIG_ENV_PREFIX: &str = "ANNO";

/// Default configuration filename looked up in the working directory
pub const DEFAULT_CONFIG_FILENAME: &str = "anno.toml";

/// Configuration loader service
#[derive(Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (if present)
    /// 3. Environment variables with prefix (e.g. `ANNO_SERVER__PORT`)
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(path) = self.resolved_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        // Double underscore separates nesting levels so two-word keys
        // like cors_origin survive the mapping
        figment = figment.merge(Env::prefixed(&format!("{}_", self.env_prefix)).split("__"));

        let mut app_config: AppConfig = figment.extract().map_err(|e| {
            Error::configuration_with_source("Failed to extract configuration", e)
        })?;

        // The API key conventionally lives in the process environment
        if app_config.llm.api_key.is_none() {
            app_config.llm.api_key = env::var("OPENAI_API_KEY").ok();
        }

        validate_app_config(&app_config)?;
        Ok(app_config)
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// The configuration file `load` reads, if one exists on disk.
    ///
    /// Loading happens before logging is initialized, so `load` cannot
    /// announce its source itself; callers log this path afterwards.
    pub fn resolved_config_path(&self) -> Option<PathBuf> {
        self.config_path
            .clone()
            .or_else(Self::find_default_config_path)
            .filter(|path| path.exists())
    }

    /// Default config file location: the working directory
    fn find_default_config_path() -> Option<PathBuf> {
        let candidate = env::current_dir().ok()?.join(DEFAULT_CONFIG_FILENAME);
        candidate.exists().then_some(candidate)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate application configuration
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_server_config(config)?;
    validate_logging_config(config)?;
    validate_storage_config(config)?;
    validate_llm_config(config)?;
    Ok(())
}

fn validate_server_config(config: &AppConfig) -> Result<()> {
    if config.server.port == 0 {
        return Err(Error::configuration("Server port cannot be 0"));
    }
    if config.server.cors_origin.is_empty() {
        return Err(Error::configuration("CORS origin cannot be empty"));
    }
    Ok(())
}

fn validate_logging_config(config: &AppConfig) -> Result<()> {
    parse_log_level(&config.logging.level)?;
    Ok(())
}

fn validate_storage_config(config: &AppConfig) -> Result<()> {
    if config.storage.annotations_dir.as_os_str().is_empty() {
        return Err(Error::configuration("Annotations directory cannot be empty"));
    }
    Ok(())
}

fn validate_llm_config(config: &AppConfig) -> Result<()> {
    if config.llm.provider.is_empty() {
        return Err(Error::configuration("LLM provider name cannot be empty"));
    }
    if !(0.0..=2.0).contains(&config.llm.temperature) {
        return Err(Error::configuration(format!(
            "LLM temperature must be between 0.0 and 2.0, got {}",
            config.llm.temperature
        )));
    }
    if config.llm.timeout_secs == 0 {
        return Err(Error::configuration("LLM request timeout cannot be 0"));
    }
    Ok(())
}
