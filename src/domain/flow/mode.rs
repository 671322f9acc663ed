//! Onboarding modes.

use serde::{Deserialize, Serialize};

use super::Step;

/// Which step sequence governs the session.
///
/// Immutable once a session starts; switching mode resets the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// New account sign-up: collects the full profile.
    #[default]
    Registration,

    /// Returning user: collects email and password only.
    Login,
}

impl Mode {
    /// The first question-bearing step the conversation moves to after
    /// the seeded welcome.
    pub fn entry_step(&self) -> Step {
        match self {
            Self::Registration => Step::Name,
            Self::Login => Step::EmailConfirm,
        }
    }

    /// Header label shown by the presentation layer.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Registration => "新規登録",
            Self::Login => "ログイン",
        }
    }
}
