//! Application layer - orchestrates the conversation flow.

mod controller;

pub use controller::{ConversationController, SubmitOutcome};
