//! Port for pacing bot responses.

use async_trait::async_trait;

/// Controls the pause between a user submission and the bot's reply.
///
/// The controller awaits one `pause` before appending each bot
/// message, so the user message is always visible first and delays
/// never overlap. Implementations must not block the runtime.
#[async_trait]
pub trait ResponsePacer: Send + Sync {
    /// Waits for the simulated typing delay to elapse.
    async fn pause(&self);
}
