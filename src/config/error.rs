//! Configuration error types.

use thiserror::Error;

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The environment could not be read or deserialized.
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// The typing delay is implausibly long.
    #[error("Typing delay of {0}ms exceeds the 10s limit")]
    InvalidTypingDelay(u64),
}
