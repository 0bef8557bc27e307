use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::error::BenchError;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub logging: LoggingConfig,
    pub bench: BenchConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BenchConfig {
    pub iterations: u32,
    pub warmup_iterations: u32,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from environment variables and an optional
    /// `config.toml`, falling back to built-in defaults.
    /// Nested keys use a double underscore, e.g. `BENCH__WARMUP_ITERATIONS`.
    ///
    /// ## Errors
    /// Returns an error if building the configuration, deserializing it, or
    /// validating it fails.
    pub fn load() -> Result<Self> {
        let settings = Config::builder()
            .set_default("logging.level", "info")?
            .set_default("bench.iterations", 100_000)?
            .set_default("bench.warmup_iterations", 1_000)?
            .add_source(
                config::Environment::default()
                    .convert_case(config::Case::Snake)
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .add_source(config::File::with_name("config.toml").required(false))
            .build()?
            .try_deserialize::<Self>()?;

        settings.validate()?;
        Ok(settings)
    }

    /// ## Summary
    /// Checks values the type system cannot express.
    ///
    /// ## Errors
    /// Returns `InvalidConfiguration` when `bench.iterations` is zero or the
    /// log level is blank.
    pub fn validate(&self) -> Result<(), BenchError> {
        if self.bench.iterations == 0 {
            return Err(BenchError::InvalidConfiguration(
                "bench.iterations must be greater than zero".to_string(),
            ));
        }
        if keystone_core::util::text::is_blank(&self.logging.level) {
            return Err(BenchError::InvalidConfiguration(
                "logging.level cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
