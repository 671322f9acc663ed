//! Message entity for the conversation transcript.
//!
//! Messages are immutable records of bot/user exchanges. Each carries a
//! globally unique id plus a per-session sequence number that gives the
//! transcript its total order.

use crate::domain::foundation::{DomainError, MessageId, Timestamp};
use serde::{Deserialize, Serialize};

/// Sender of a transcript message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Wizard utterances (questions, acknowledgements, error texts).
    Bot,

    /// Raw user input, appended verbatim.
    User,

    /// Lifecycle notices such as the completion banner.
    System,
}

impl Role {
    /// Returns true if the presentation layer renders this as a chat
    /// bubble (system notices get their own banner treatment).
    pub fn is_chat_bubble(&self) -> bool {
        matches!(self, Self::Bot | Self::User)
    }
}

/// An immutable message within a session transcript.
///
/// # Invariants
///
/// - `id` is globally unique
/// - `seq` is strictly increasing within one session
/// - `text` is non-empty (validated at construction)
/// - `created_at` is set at construction and never changes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    id: MessageId,
    seq: u64,
    role: Role,
    text: String,
    created_at: Timestamp,
}

impl Message {
    /// Creates a new message with the given sequence number, role, and
    /// text.
    ///
    /// # Errors
    ///
    /// - `EmptyMessage` if the text is empty or whitespace-only
    pub fn new(seq: u64, role: Role, text: impl Into<String>) -> Result<Self, DomainError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(DomainError::EmptyMessage);
        }

        Ok(Self {
            id: MessageId::new(),
            seq,
            role,
            text,
            created_at: Timestamp::now(),
        })
    }

    /// Returns the message id.
    pub fn id(&self) -> &MessageId {
        &self.id
    }

    /// Returns the position of this message within its session.
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// Returns the sender role.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Returns the message text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns when the message was created.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Returns true if this message came from the user.
    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }

    /// Returns true if this message came from the bot.
    pub fn is_bot(&self) -> bool {
        self.role == Role::Bot
    }
}
