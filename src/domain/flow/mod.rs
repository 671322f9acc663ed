//! Flow engine module - the onboarding step state machine.
//!
//! Pure decision logic: which step sequence applies per mode, whether a
//! submitted input is acceptable at the current step, what comes next,
//! and how far along the user is. Nothing in here mutates state or
//! performs I/O; the session aggregate and controller sequence these
//! functions.

mod answers;
mod mode;
mod sequence;
mod step;
mod templates;
mod validation;

pub use answers::{Answers, KonkatsuStatus};
pub use mode::Mode;
pub use sequence::{StepProgress, StepSequence};
pub use step::Step;
pub use templates::{
    response_for, COMPLETION_NOTICE, LOGIN_GREETING, REGISTRATION_OPENING, WELCOME_MESSAGE,
};
pub use validation::{validate, ValidationResult};
