//! Application configuration module.
//!
//! Type-safe configuration loading from environment variables using
//! the `config` and `dotenvy` crates. Variables carry the `MIRAIM_`
//! prefix, e.g. `MIRAIM_TYPING_DELAY_MS=800`.
//!
//! # Example
//!
//! ```no_run
//! use miraim_onboarding::config::ChatConfig;
//!
//! let config = ChatConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod error;

pub use error::ConfigError;

use serde::Deserialize;
use std::time::Duration;

const ENV_PREFIX: &str = "MIRAIM";

/// Chat behavior configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatConfig {
    /// Simulated typing delay before each bot message, in milliseconds.
    #[serde(default = "default_typing_delay_ms")]
    pub typing_delay_ms: u64,

    /// Rust log filter directive.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ChatConfig {
    /// Loads configuration from environment variables.
    ///
    /// Reads a `.env` file first when present (development), then
    /// `MIRAIM_`-prefixed variables.
    ///
    /// # Errors
    ///
    /// - `ConfigError::Load` if the environment cannot be parsed
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let settings = config::Config::builder()
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .separator("__"),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Validates the loaded values.
    ///
    /// # Errors
    ///
    /// - `ConfigError::InvalidTypingDelay` if the delay exceeds 10s
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.typing_delay_ms > 10_000 {
            return Err(ConfigError::InvalidTypingDelay(self.typing_delay_ms));
        }
        Ok(())
    }

    /// Returns the typing delay as a [`Duration`].
    pub fn typing_delay(&self) -> Duration {
        Duration::from_millis(self.typing_delay_ms)
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            typing_delay_ms: default_typing_delay_ms(),
            log_level: default_log_level(),
        }
    }
}

fn default_typing_delay_ms() -> u64 {
    800
}

fn default_log_level() -> String {
    "info".to_string()
}
