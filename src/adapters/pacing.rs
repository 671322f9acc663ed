//! Response pacer implementations.

use async_trait::async_trait;
use std::time::Duration;

use crate::config::ChatConfig;
use crate::ports::ResponsePacer;

/// Pacer that sleeps for a fixed duration, giving the chat UI its
/// "bot is typing" window.
#[derive(Debug, Clone)]
pub struct TypingDelayPacer {
    delay: Duration,
}

impl TypingDelayPacer {
    /// Creates a pacer with an explicit delay.
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Creates a pacer from the chat configuration.
    pub fn from_config(config: &ChatConfig) -> Self {
        Self::new(config.typing_delay())
    }

    /// Returns the configured delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[async_trait]
impl ResponsePacer for TypingDelayPacer {
    async fn pause(&self) {
        tracing::trace!(delay_ms = self.delay.as_millis() as u64, "pacing response");
        tokio::time::sleep(self.delay).await;
    }
}

/// Pacer that returns immediately. Used in tests and headless runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantPacer;

#[async_trait]
impl ResponsePacer for InstantPacer {
    async fn pause(&self) {}
}
