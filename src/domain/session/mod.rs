//! Session module - one onboarding conversation.
//!
//! The `Session` aggregate owns every piece of per-conversation mutable
//! state (current step, accumulated answers, transcript, lifecycle),
//! so partial updates cannot drift apart.

mod message;
mod session;

pub use message::{Message, Role};
pub use session::{Session, SessionState};
