//! Configuration module for the Mokulua compound-word analyzer.
//!
//! Settings load in three layers: built-in defaults, an optional
//! configuration file (TOML, YAML or JSON), and environment variable
//! overrides. The merged result is validated before use.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use config::{Config, ConfigError as ExternalConfigError, Environment, File};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::error::config::ConfigError;

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Default configuration location.
const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default environment variable prefix for configuration overrides.
const ENV_PREFIX: &str = "MOKULUA";

/// Initialize the default configuration for the analyzer.
///
/// Loads the default configuration file, merges environment overrides and
/// validates the result. A missing default file is not an error; the
/// built-in defaults are used instead.
pub fn init_default_config() -> ConfigResult<()> {
    let config_path = PathBuf::from(DEFAULT_CONFIG_PATH);
    let loader = ConfigLoader::new(Some(config_path), ENV_PREFIX);

    let config = match loader.load() {
        Ok(config) => config,
        Err(ConfigError::FileNotFound(_)) => {
            tracing::warn!(
                "Default configuration file not found at: {}",
                DEFAULT_CONFIG_PATH
            );
            MokuluaConfig::default()
        }
        Err(e) => return Err(e),
    };

    init_global_config(config);

    Ok(())
}

/// A trait for types that can be validated.
pub trait Validate {
    /// Validates that the configuration is correct.
    fn validate(&self) -> ConfigResult<()>;
}

/// Main configuration for the Mokulua analyzer.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MokuluaConfig {
    /// Word-list loading configuration
    pub lexicon: LexiconConfig,

    /// Log configuration
    pub log: LogConfig,
}

impl Validate for MokuluaConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.lexicon.validate()?;
        self.log.validate()?;
        Ok(())
    }
}

/// Word-list loading configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconConfig {
    /// Longest word accepted from the word list; longer entries are
    /// skipped. Also bounds the recursion depth of the segmentation
    /// search.
    pub max_word_length: usize,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            max_word_length: 128,
        }
    }
}

impl Validate for LexiconConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_word_length == 0 {
            return Err(ConfigError::ValidationError(
                "max_word_length must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Whether to log in JSON format
    pub json: bool,

    /// Whether to include source code locations in logs
    pub source_location: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            source_location: true,
        }
    }
}

impl Validate for LogConfig {
    fn validate(&self) -> ConfigResult<()> {
        match self.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(ConfigError::ValidationError(format!(
                    "Invalid log level: {}",
                    self.level
                )))
            }
        }
        Ok(())
    }
}

/// Configuration loader for the Mokulua analyzer.
#[derive(Debug)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_prefix: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// # Arguments
    ///
    /// * `config_path` - Optional path to the configuration file
    /// * `env_prefix` - Prefix for environment variables that override
    ///   configuration values
    pub fn new<P: AsRef<Path>>(config_path: Option<P>, env_prefix: &str) -> Self {
        Self {
            config_path: config_path.map(|p| p.as_ref().to_path_buf()),
            env_prefix: env_prefix.to_string(),
        }
    }

    /// Loads the configuration from defaults, file and environment.
    pub fn load(&self) -> ConfigResult<MokuluaConfig> {
        let mut builder = Config::builder();

        // Add default configuration values
        builder = builder.add_source(
            Config::try_from(&MokuluaConfig::default())
                .map_err(|e| ConfigError::ParseError(e.to_string()))?,
        );

        // Add configuration from file if provided
        if let Some(path) = &self.config_path {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.clone()));
            }

            builder = match path.extension().and_then(|ext| ext.to_str()) {
                Some("toml") => builder
                    .add_source(File::from(path.as_path()).format(config::FileFormat::Toml)),
                Some("json") => builder
                    .add_source(File::from(path.as_path()).format(config::FileFormat::Json)),
                Some("yaml" | "yml") => builder
                    .add_source(File::from(path.as_path()).format(config::FileFormat::Yaml)),
                _ => {
                    return Err(ConfigError::ParseError(format!(
                        "Unsupported file extension for: {path:?}"
                    )))
                }
            };
        }

        // Add environment variables with prefix
        builder = builder.add_source(
            Environment::with_prefix(&self.env_prefix)
                .separator("__")
                .try_parsing(true),
        );

        // Build the configuration
        let config = builder.build().map_err(|e| match e {
            ExternalConfigError::NotFound(path) => ConfigError::FileNotFound(PathBuf::from(path)),
            ExternalConfigError::Message(msg) => ConfigError::ParseError(msg),
            other => ConfigError::ParseError(other.to_string()),
        })?;

        // Deserialize the configuration
        let mokulua_config: MokuluaConfig = config
            .try_deserialize()
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        // Validate the configuration
        mokulua_config.validate()?;

        Ok(mokulua_config)
    }
}

/// Global configuration accessor.
#[derive(Debug, Clone)]
pub struct GlobalConfig {
    config: Arc<MokuluaConfig>,
}

impl GlobalConfig {
    /// Creates a new global configuration.
    pub fn new(config: MokuluaConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration.
    pub fn get(&self) -> &MokuluaConfig {
        &self.config
    }
}

/// Global analyzer configuration.
static GLOBAL_CONFIG: OnceCell<Mutex<GlobalConfig>> = OnceCell::new();

/// Initialize the global configuration.
pub fn init_global_config(config: MokuluaConfig) {
    if GLOBAL_CONFIG
        .set(Mutex::new(GlobalConfig::new(config)))
        .is_err()
    {
        tracing::warn!("Global configuration was already initialized, ignoring new configuration");
    }
}

/// Get the global analyzer configuration.
///
/// # Panics
///
/// Panics if the global configuration has not been initialized.
pub fn get_global_config() -> GlobalConfig {
    let mutex = GLOBAL_CONFIG
        .get()
        .expect("Global configuration not initialized");

    let guard = mutex.lock().unwrap_or_else(|poisoned| {
        tracing::error!("Global config lock was poisoned, recovering");
        poisoned.into_inner()
    });

    guard.clone()
}
