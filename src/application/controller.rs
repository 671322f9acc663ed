//! Conversation controller.
//!
//! Drives one onboarding session: opens the conversation, takes user
//! submissions through validate/record/respond/advance, and handles
//! mode switches. The controller owns the session aggregate and a
//! pacer that spaces bot replies; every bot message is preceded by one
//! `pause` so replies land after the user's own message.

use std::sync::Arc;

use crate::domain::flow::{
    response_for, validate, Answers, Mode, Step, StepProgress, StepSequence, ValidationResult,
    COMPLETION_NOTICE, LOGIN_GREETING, REGISTRATION_OPENING,
};
use crate::domain::foundation::DomainError;
use crate::domain::session::{Message, Session};
use crate::ports::ResponsePacer;

/// Result of handing one user submission to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The input was dropped without touching the session: it was
    /// blank, a previous submission is still in flight, or the
    /// conversation already finished.
    Ignored,

    /// Validation failed; the transcript gained the user message and
    /// the bot's error reply. The step did not change.
    Rejected {
        /// Validation error text shown to the user.
        message: String,
    },

    /// The answer was accepted and the conversation moved on.
    Advanced {
        /// The step now awaiting input.
        next: Step,
    },

    /// The answer was accepted and the flow reached its terminal step.
    Completed,
}

/// Orchestrates one onboarding conversation.
pub struct ConversationController<P: ResponsePacer> {
    session: Session,
    pacer: Arc<P>,
    busy: bool,
}

impl<P: ResponsePacer> ConversationController<P> {
    /// Creates a controller over a fresh session in `mode`.
    pub fn new(mode: Mode, pacer: Arc<P>) -> Self {
        Self {
            session: Session::new(mode),
            pacer,
            busy: false,
        }
    }

    // ─────────────────────────────────────────────────────────────────
    // Read surface
    // ─────────────────────────────────────────────────────────────────

    /// Returns the transcript in order.
    pub fn transcript(&self) -> &[Message] {
        self.session.transcript()
    }

    /// Returns the step currently awaiting input.
    pub fn current_step(&self) -> Step {
        self.session.current_step()
    }

    /// Returns the mode governing the session.
    pub fn mode(&self) -> Mode {
        self.session.mode()
    }

    /// Returns the progress indicator for the current step, if it is
    /// one of the visible numbered steps.
    pub fn progress(&self) -> Option<StepProgress> {
        StepSequence::progress(self.session.current_step(), self.session.mode())
    }

    /// Returns the answers accumulated so far.
    pub fn answers(&self) -> &Answers {
        self.session.answers()
    }

    /// Returns true while a submission is being processed.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Returns true once the flow reached its terminal step.
    pub fn is_complete(&self) -> bool {
        self.session.is_complete()
    }

    // ─────────────────────────────────────────────────────────────────
    // Flow
    // ─────────────────────────────────────────────────────────────────

    /// Opens the conversation: posts the mode's opening prompt and
    /// moves off [`Step::Start`]. Does nothing if the session already
    /// left the start step.
    ///
    /// # Errors
    ///
    /// - `SessionComplete` if the session is frozen
    pub async fn begin(&mut self) -> Result<(), DomainError> {
        if self.session.current_step() != Step::Start {
            return Ok(());
        }
        let (opening, entry) = match self.session.mode() {
            Mode::Registration => (REGISTRATION_OPENING, Mode::Registration.entry_step()),
            Mode::Login => (LOGIN_GREETING, Mode::Login.entry_step()),
        };
        self.pacer.pause().await;
        self.session.append_bot(opening)?;
        self.session.advance_to(entry)?;
        Ok(())
    }

    /// Handles one user submission.
    ///
    /// Blank input, a submission already in flight, and a finished
    /// session are all silently ignored. Otherwise the raw text joins
    /// the transcript verbatim, the trimmed text is validated against
    /// the current step, and the flow either rejects with an error
    /// reply or records the answer, responds, and advances.
    ///
    /// # Errors
    ///
    /// - `SessionComplete` if the session froze mid-flight
    pub async fn submit(&mut self, raw: &str) -> Result<SubmitOutcome, DomainError> {
        if raw.trim().is_empty() || self.busy || self.session.is_complete() {
            return Ok(SubmitOutcome::Ignored);
        }
        self.busy = true;
        let outcome = self.submit_inner(raw).await;
        self.busy = false;
        outcome
    }

    async fn submit_inner(&mut self, raw: &str) -> Result<SubmitOutcome, DomainError> {
        let step = self.session.current_step();
        let trimmed = raw.trim();

        self.session.append_user(raw)?;

        if let ValidationResult::Invalid { message } = validate(step, raw) {
            self.pacer.pause().await;
            self.session.append_bot(&message)?;
            return Ok(SubmitOutcome::Rejected { message });
        }

        self.session.record_answer(step, trimmed)?;

        let reply = response_for(step, trimmed, self.session.answers());
        self.pacer.pause().await;
        self.session.append_bot(reply)?;

        match StepSequence::next(step, self.session.mode()) {
            Some(next) if !next.is_terminal() => {
                self.session.advance_to(next)?;
                Ok(SubmitOutcome::Advanced { next })
            }
            _ => {
                self.session.append_system(COMPLETION_NOTICE)?;
                self.session.complete();
                Ok(SubmitOutcome::Completed)
            }
        }
    }

    /// Discards the current session and starts over in `mode`.
    ///
    /// The transcript, answers, and busy flag are all reset. A login
    /// session opens immediately with its greeting; a registration
    /// session waits for [`begin`](Self::begin).
    ///
    /// # Errors
    ///
    /// - `SessionComplete` cannot occur on a fresh session; propagated
    ///   for uniformity with the other mutations
    pub async fn switch_mode(&mut self, mode: Mode) -> Result<(), DomainError> {
        tracing::debug!(from = ?self.session.mode(), to = ?mode, "switching mode");
        self.session = Session::new(mode);
        self.busy = false;
        if mode == Mode::Login {
            self.pacer.pause().await;
            self.session.append_bot(LOGIN_GREETING)?;
            self.session.advance_to(Mode::Login.entry_step())?;
        }
        Ok(())
    }
}
