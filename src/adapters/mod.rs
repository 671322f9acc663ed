//! Adapters - concrete implementations of the ports.

mod pacing;

pub use pacing::{InstantPacer, TypingDelayPacer};
