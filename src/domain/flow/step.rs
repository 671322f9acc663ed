//! Onboarding steps.
//!
//! Each step gates exactly one requested field in the conversation.
//! `Location` and `Hobbies` are reserved for a later profile flow; they
//! keep a display title but have no transitions in the active flows.

use serde::{Deserialize, Serialize};

/// One discrete stage of the onboarding conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// Session seeded, nothing asked yet.
    #[default]
    Start,

    /// Asking for the user's name.
    Name,

    /// Asking for the login email address.
    Email,

    /// Asking for the account password.
    Password,

    /// Asking for the user's age.
    Age,

    /// Asking for the user's occupation.
    Occupation,

    /// Asking for the konkatsu activity status (beginner / experienced
    /// / retry).
    KonkatsuStatus,

    /// Reserved: asking where the user lives.
    Location,

    /// Reserved: asking about hobbies.
    Hobbies,

    /// Login entry point; collects the email address.
    EmailConfirm,

    /// Terminal step; the session is frozen here.
    Complete,
}

impl Step {
    /// Returns true if no further step follows this one.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Complete)
    }

    /// Display title for the field this step collects, used by the
    /// presentation layer for placeholders and keyboard hints.
    pub fn title(&self) -> Option<&'static str> {
        match self {
            Self::Name => Some("お名前"),
            Self::Email | Self::EmailConfirm => Some("メールアドレス"),
            Self::Password => Some("パスワード"),
            Self::Age => Some("年齢"),
            Self::Occupation => Some("ご職業"),
            Self::KonkatsuStatus => Some("婚活状況"),
            Self::Location => Some("お住まい"),
            Self::Hobbies => Some("ご趣味"),
            Self::Start | Self::Complete => None,
        }
    }

    /// Returns true if this step stores a typed answer when passed.
    pub fn collects_answer(&self) -> bool {
        matches!(
            self,
            Self::Name
                | Self::Email
                | Self::EmailConfirm
                | Self::Password
                | Self::Age
                | Self::Occupation
                | Self::KonkatsuStatus
                | Self::Location
                | Self::Hobbies
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_step_is_start() {
        assert_eq!(Step::default(), Step::Start);
    }

    #[test]
    fn only_complete_is_terminal() {
        assert!(Step::Complete.is_terminal());
        assert!(!Step::Start.is_terminal());
        assert!(!Step::KonkatsuStatus.is_terminal());
    }

    #[test]
    fn serializes_to_snake_case() {
        let json = serde_json::to_string(&Step::KonkatsuStatus).unwrap();
        assert_eq!(json, "\"konkatsu_status\"");

        let json = serde_json::to_string(&Step::EmailConfirm).unwrap();
        assert_eq!(json, "\"email_confirm\"");
    }

    #[test]
    fn deserializes_from_snake_case() {
        let step: Step = serde_json::from_str("\"email_confirm\"").unwrap();
        assert_eq!(step, Step::EmailConfirm);
    }

    #[test]
    fn collecting_steps_have_titles() {
        for step in [
            Step::Name,
            Step::Email,
            Step::Password,
            Step::Age,
            Step::Occupation,
            Step::KonkatsuStatus,
            Step::Location,
            Step::Hobbies,
            Step::EmailConfirm,
        ] {
            assert!(step.title().is_some(), "{:?} should have a title", step);
        }
    }

    #[test]
    fn boundary_steps_have_no_title() {
        assert_eq!(Step::Start.title(), None);
        assert_eq!(Step::Complete.title(), None);
    }

    #[test]
    fn email_confirm_shares_email_title() {
        assert_eq!(Step::EmailConfirm.title(), Step::Email.title());
    }
}
