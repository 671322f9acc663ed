//! Session aggregate entity.
//!
//! One session covers one run of the onboarding conversation in one
//! mode. The aggregate owns the transcript, the current step, and the
//! accumulated answers; all mutation goes through it.
//!
//! # Aggregate Boundary
//!
//! - Messages are created and appended only through the session, which
//!   assigns their sequence numbers
//! - The transcript is append-only; messages are never edited or
//!   removed
//! - Once the session completes, transcript and answers are frozen

use crate::domain::flow::{Answers, Mode, Step, WELCOME_MESSAGE};
use crate::domain::foundation::{DomainError, SessionId, Timestamp};

use super::message::{Message, Role};

use serde::{Deserialize, Serialize};

/// Lifecycle state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// The conversation is running and accepts input.
    #[default]
    Active,

    /// Terminal: the flow finished and the session is read-only.
    Complete,
}

impl SessionState {
    /// Returns true if this is the terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Complete)
    }
}

/// One onboarding conversation.
///
/// # Invariants
///
/// - `id` is globally unique
/// - `mode` is immutable; a mode switch creates a fresh session
/// - message `seq` values are assigned in strictly increasing order
/// - answers only accumulate; they are never partially cleared
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    id: SessionId,
    mode: Mode,
    current_step: Step,
    answers: Answers,
    messages: Vec<Message>,
    next_seq: u64,
    state: SessionState,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Session {
    /// Creates a new session in the given mode, seeded with the
    /// welcome message and positioned at [`Step::Start`].
    pub fn new(mode: Mode) -> Self {
        let now = Timestamp::now();
        let mut session = Self {
            id: SessionId::new(),
            mode,
            current_step: Step::Start,
            answers: Answers::default(),
            messages: Vec::new(),
            next_seq: 0,
            state: SessionState::Active,
            created_at: now,
            updated_at: now,
        };
        // Seeding cannot fail: the welcome text is a non-empty const.
        let _ = session.append(Role::Bot, WELCOME_MESSAGE);
        session
    }

    // ─────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────

    /// Returns the session id.
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Returns the mode governing this session.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the current step.
    pub fn current_step(&self) -> Step {
        self.current_step
    }

    /// Returns the answers accumulated so far.
    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    /// Returns the transcript in order.
    pub fn transcript(&self) -> &[Message] {
        &self.messages
    }

    /// Returns the most recent message, if any.
    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Returns the lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Returns true if the session reached its terminal step.
    pub fn is_complete(&self) -> bool {
        self.state.is_terminal()
    }

    /// Returns when the session was created.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Returns when the session was last updated.
    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    // ─────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────

    /// Appends a user message, verbatim.
    ///
    /// # Errors
    ///
    /// - `SessionComplete` if the session is frozen
    /// - `EmptyMessage` if the text is empty
    pub fn append_user(&mut self, text: impl Into<String>) -> Result<&Message, DomainError> {
        self.append(Role::User, text)
    }

    /// Appends a bot message.
    ///
    /// # Errors
    ///
    /// - `SessionComplete` if the session is frozen
    /// - `EmptyMessage` if the text is empty
    pub fn append_bot(&mut self, text: impl Into<String>) -> Result<&Message, DomainError> {
        self.append(Role::Bot, text)
    }

    /// Appends a system message.
    ///
    /// # Errors
    ///
    /// - `SessionComplete` if the session is frozen
    /// - `EmptyMessage` if the text is empty
    pub fn append_system(&mut self, text: impl Into<String>) -> Result<&Message, DomainError> {
        self.append(Role::System, text)
    }

    /// Records a validated answer for `step`.
    ///
    /// # Errors
    ///
    /// - `SessionComplete` if the answers are frozen
    pub fn record_answer(&mut self, step: Step, input: &str) -> Result<(), DomainError> {
        if self.is_complete() {
            return Err(DomainError::SessionComplete);
        }
        self.answers.record(step, input);
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Moves the conversation to `step`.
    ///
    /// # Errors
    ///
    /// - `SessionComplete` if the session is frozen
    pub fn advance_to(&mut self, step: Step) -> Result<(), DomainError> {
        if self.is_complete() {
            return Err(DomainError::SessionComplete);
        }
        tracing::debug!(from = ?self.current_step, to = ?step, "advancing step");
        self.current_step = step;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Freezes the session at the terminal step. Idempotent.
    pub fn complete(&mut self) {
        if self.is_complete() {
            return;
        }
        tracing::debug!(session = %self.id, "session complete");
        self.current_step = Step::Complete;
        self.state = SessionState::Complete;
        self.updated_at = Timestamp::now();
    }

    fn append(&mut self, role: Role, text: impl Into<String>) -> Result<&Message, DomainError> {
        if self.is_complete() {
            return Err(DomainError::SessionComplete);
        }
        let message = Message::new(self.next_seq, role, text)?;
        self.next_seq += 1;
        self.messages.push(message);
        self.updated_at = Timestamp::now();
        Ok(self.messages.last().expect("message just pushed"))
    }
}
