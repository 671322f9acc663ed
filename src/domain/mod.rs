//! Domain layer - pure onboarding flow logic.
//!
//! No I/O, no async, no framework types. The flow engine lives in
//! [`flow`], the session aggregate in [`session`], and shared primitives
//! in [`foundation`].

pub mod flow;
pub mod foundation;
pub mod session;
