use std::path::Path;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};
use serde::Deserialize;

use crate::error::{CoreError, CoreResult};

/// Configuration file looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "cadence.toml";

/// Prefix for environment overrides, e.g. `CADENCE__SCHEDULE__MAX_SPAN_DAYS`.
pub const ENV_PREFIX: &str = "CADENCE";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub logging: LoggingConfig,
    pub schedule: ScheduleConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleConfig {
    /// Largest `end_day - start_day` span a request may ask for.
    pub max_span_days: u32,
    /// Naming template used when a request does not carry one.
    #[serde(default)]
    pub default_template: Option<String>,
}

impl ScheduleConfig {
    /// ## Summary
    /// Returns `true` if a range of `span` days is within the configured limit.
    #[must_use]
    pub fn allows_span(&self, span: u32) -> bool {
        span <= self.max_span_days
    }
}

impl Settings {
    fn with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("logging.level", "info")?
            .set_default("schedule.max_span_days", 3650)
    }

    fn environment() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .ignore_empty(true)
            .try_parsing(true)
    }

    /// ## Summary
    /// Loads configuration from defaults, a TOML file and `CADENCE__*` environment variables.
    /// Environment variables take precedence over file values.
    ///
    /// When `path` is `None`, `cadence.toml` in the working directory is used if present.
    ///
    /// ## Errors
    /// Returns an error if an explicitly named file is missing, if building or
    /// deserializing the configuration fails, or if the result is invalid.
    pub fn load(path: Option<&Path>) -> CoreResult<Self> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let settings = Self::with_defaults()
            .and_then(|builder| {
                builder
                    .add_source(file)
                    .add_source(Self::environment())
                    .build()
            })
            .and_then(Config::try_deserialize::<Self>)
            .map_err(|err| CoreError::ConfigError(err.to_string()))?;

        settings.validate()?;
        tracing::debug!(path = ?path, "Configuration loaded");
        Ok(settings)
    }

    /// ## Summary
    /// Builds settings from defaults overlaid with an in-memory TOML document.
    ///
    /// ## Errors
    /// Returns an error if the document does not parse or the result is invalid.
    pub fn from_toml_str(contents: &str) -> CoreResult<Self> {
        let settings = Self::with_defaults()
            .and_then(|builder| {
                builder
                    .add_source(config::File::from_str(contents, config::FileFormat::Toml))
                    .build()
            })
            .and_then(Config::try_deserialize::<Self>)
            .map_err(|err| CoreError::ConfigError(err.to_string()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// ## Summary
    /// Checks values that deserialize fine but make no sense.
    ///
    /// ## Errors
    /// Returns `InvalidConfiguration` for a zero span limit or an empty log level.
    pub fn validate(&self) -> CoreResult<()> {
        if self.schedule.max_span_days == 0 {
            return Err(CoreError::InvalidConfiguration(
                "schedule.max_span_days must be at least 1".to_string(),
            ));
        }
        if self.logging.level.trim().is_empty() {
            return Err(CoreError::InvalidConfiguration(
                "logging.level must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// ## Summary
/// Loads `.env` into the process environment, then loads `Settings`.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config(path: Option<&Path>) -> CoreResult<Settings> {
    dotenvy::dotenv().ok();

    Settings::load(path)
}
