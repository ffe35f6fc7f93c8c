//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `CEA_FRONTIER` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use cea_frontier::config::AppConfig;
//!
//! let config = AppConfig::load()
//!     .and_then(|config| config.with_overrides(None, None))
//!     .expect("Invalid configuration");
//!
//! println!("Reports are written as {}", config.report.format);
//! ```

mod error;
mod logging;
mod report;

pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use report::{ReportConfig, ReportFormat, MAX_PRECISION};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable
/// configuration. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Report output (format, precision)
    #[serde(default)]
    pub report: ReportConfig,

    /// Logging (filter directive, JSON output)
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `CEA_FRONTIER` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `CEA_FRONTIER__REPORT__FORMAT=json` -> `report.format = json`
    /// - `CEA_FRONTIER__LOGGING__LEVEL=warn` -> `logging.level = warn`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CEA_FRONTIER")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Apply command-line overrides and validate the result
    ///
    /// `None` leaves the loaded value in place.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValidationFailed` if the merged configuration is invalid.
    pub fn with_overrides(
        mut self,
        format: Option<ReportFormat>,
        precision: Option<usize>,
    ) -> Result<Self, ConfigError> {
        if let Some(format) = format {
            self.report.format = format;
        }
        if let Some(precision) = precision {
            self.report.precision = precision;
        }
        self.validate()?;
        Ok(self)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.report.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("CEA_FRONTIER__REPORT__FORMAT");
        env::remove_var("CEA_FRONTIER__REPORT__PRECISION");
        env::remove_var("CEA_FRONTIER__LOGGING__LEVEL");
        env::remove_var("CEA_FRONTIER__LOGGING__JSON");
    }

    #[test]
    fn test_load_defaults_from_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.report, ReportConfig::default());
        assert_eq!(config.logging, LoggingConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("CEA_FRONTIER__REPORT__FORMAT", "json");
        env::set_var("CEA_FRONTIER__REPORT__PRECISION", "4");
        env::set_var("CEA_FRONTIER__LOGGING__JSON", "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.report.format, ReportFormat::Json);
        assert_eq!(config.report.precision, 4);
        assert!(config.logging.json);
    }

    #[test]
    fn test_invalid_format_fails_to_load() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("CEA_FRONTIER__REPORT__FORMAT", "csv");
        let result = AppConfig::load();
        clear_env();

        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn test_validate_rejects_large_precision() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("CEA_FRONTIER__REPORT__PRECISION", "40");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(
            config.validate(),
            Err(ValidationError::PrecisionTooLarge(40))
        );
    }

    #[test]
    fn test_overrides_replace_loaded_values() {
        let config = AppConfig::default()
            .with_overrides(Some(ReportFormat::Yaml), Some(6))
            .unwrap();

        assert_eq!(config.report.format, ReportFormat::Yaml);
        assert_eq!(config.report.precision, 6);
    }

    #[test]
    fn test_missing_overrides_keep_loaded_values() {
        let mut loaded = AppConfig::default();
        loaded.report.format = ReportFormat::Json;

        let config = loaded.with_overrides(None, None).unwrap();
        assert_eq!(config.report.format, ReportFormat::Json);
        assert_eq!(config.report.precision, ReportConfig::default().precision);
    }

    #[test]
    fn test_override_is_validated() {
        let result = AppConfig::default().with_overrides(None, Some(MAX_PRECISION + 1));

        assert!(matches!(
            result,
            Err(ConfigError::ValidationFailed(ValidationError::PrecisionTooLarge(13)))
        ));
    }
}
