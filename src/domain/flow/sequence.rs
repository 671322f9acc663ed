//! StepSequence - Centralized ordering logic for onboarding steps.
//!
//! Each mode has one fixed linear chain; the only dynamic input is
//! which chain applies. This module consolidates all ordering logic
//! (transitions and progress) into a single location.
//!
//! # Step order
//!
//! - Registration: Start → Name → Email → Password → Age → Occupation →
//!   KonkatsuStatus → Complete
//! - Login: EmailConfirm (entry) → Password → Complete, with Email
//!   transition-equivalent to EmailConfirm

use serde::{Deserialize, Serialize};

use super::{Mode, Step};

/// 1-based position of the current step within the mode's visible
/// sequence.
///
/// # Invariants
///
/// - `current >= 1` and `current <= total`
/// - `total > 0`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepProgress {
    current: u8,
    total: u8,
}

impl StepProgress {
    fn new(current: u8, total: u8) -> Self {
        Self {
            current: current.min(total),
            total,
        }
    }

    /// Returns the 1-based position within the sequence.
    pub fn current(&self) -> u8 {
        self.current
    }

    /// Returns the number of visible steps in the sequence.
    pub fn total(&self) -> u8 {
        self.total
    }

    /// Returns true if this is the final visible step.
    pub fn is_last(&self) -> bool {
        self.current == self.total
    }
}

/// Central location for step ordering logic.
pub struct StepSequence;

impl StepSequence {
    /// The visible registration steps, in canonical order.
    pub const REGISTRATION: [Step; 6] = [
        Step::Name,
        Step::Email,
        Step::Password,
        Step::Age,
        Step::Occupation,
        Step::KonkatsuStatus,
    ];

    /// The visible login steps, in canonical order.
    pub const LOGIN: [Step; 2] = [Step::Email, Step::Password];

    /// Returns the visible steps for a mode, in order.
    pub fn visible_steps(mode: Mode) -> &'static [Step] {
        match mode {
            Mode::Registration => &Self::REGISTRATION,
            Mode::Login => &Self::LOGIN,
        }
    }

    /// Returns the step that follows `step` in the mode's chain, or
    /// `None` when the chain ends.
    ///
    /// Total and deterministic: any step outside the chain (including
    /// the terminal step itself) yields `None`. `EmailConfirm` is the
    /// login entry point and transitions exactly like `Email`.
    pub fn next(step: Step, mode: Mode) -> Option<Step> {
        match mode {
            Mode::Login => match step {
                Step::Email | Step::EmailConfirm => Some(Step::Password),
                Step::Password => Some(Step::Complete),
                _ => None,
            },
            Mode::Registration => match step {
                Step::Start => Some(Step::Name),
                Step::Name => Some(Step::Email),
                Step::Email => Some(Step::Password),
                Step::Password => Some(Step::Age),
                Step::Age => Some(Step::Occupation),
                Step::Occupation => Some(Step::KonkatsuStatus),
                Step::KonkatsuStatus => Some(Step::Complete),
                _ => None,
            },
        }
    }

    /// Returns the 1-based progress of `step` within the mode's visible
    /// sequence, clamped to the total.
    ///
    /// Returns `None` for steps outside the visible sequence (`Start`,
    /// `Complete`, `EmailConfirm`, reserved steps): the presentation
    /// layer hides its progress indicator for those.
    pub fn progress(step: Step, mode: Mode) -> Option<StepProgress> {
        let steps = Self::visible_steps(mode);
        steps
            .iter()
            .position(|&s| s == step)
            .map(|idx| StepProgress::new(idx as u8 + 1, steps.len() as u8))
    }
}
