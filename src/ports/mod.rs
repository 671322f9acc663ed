//! Ports - traits the application layer depends on.
//!
//! The onboarding core has a single outward seam: the response pacer
//! that simulates the bot's typing delay.

mod response_pacer;

pub use response_pacer::ResponsePacer;
