//! Accumulated user answers.
//!
//! Answers accumulate monotonically as steps are passed: once a field
//! is set it is never cleared except by a full session reset. Freezing
//! at completion is enforced by the session aggregate, which owns the
//! only mutable handle.

use serde::{Deserialize, Serialize};

use super::validation::parse_leading_int;
use super::Step;

/// The user's stated konkatsu activity status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KonkatsuStatus {
    /// First time doing konkatsu ("1" / 初心者).
    Beginner,

    /// Has tried konkatsu before ("2" / 経験).
    Experienced,

    /// Coming back for another attempt ("3" / 再チャレンジ).
    Retry,
}

impl KonkatsuStatus {
    const BEGINNER_TOKENS: [&'static str; 2] = ["1", "初心者"];
    const EXPERIENCED_TOKENS: [&'static str; 2] = ["2", "経験"];
    const RETRY_TOKENS: [&'static str; 2] = ["3", "再チャレンジ"];

    /// Returns true if the trimmed input equals or contains any of the
    /// accepted tokens. This is the validation predicate.
    pub fn token_matches(input: &str) -> bool {
        let input = input.trim();
        Self::BEGINNER_TOKENS
            .iter()
            .chain(&Self::EXPERIENCED_TOKENS)
            .chain(&Self::RETRY_TOKENS)
            .any(|token| matched(input, token))
    }

    /// Classifies a validated input into a status.
    ///
    /// Mirrors the response branching of the original flow: the
    /// numeric shortcuts compare by equality, the word tokens by
    /// containment, and anything else (the "3"/再チャレンジ family)
    /// reads as a retry.
    pub fn classify(input: &str) -> Self {
        let input = input.trim();
        if input == "1" || input.contains("初心者") {
            Self::Beginner
        } else if input == "2" || input.contains("経験") {
            Self::Experienced
        } else {
            Self::Retry
        }
    }
}

fn matched(input: &str, token: &str) -> bool {
    input == token || input.contains(token)
}

/// The attributes collected so far in one session.
///
/// Fields are optional until their step has been passed. `location`
/// and `hobbies` back the reserved steps and stay unset in the active
/// flows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answers {
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
    age: Option<u32>,
    occupation: Option<String>,
    konkatsu_status: Option<String>,
    location: Option<String>,
    hobbies: Option<String>,
}

impl Answers {
    /// Records a validated input under the field keyed by `step`.
    ///
    /// Input is trimmed and, for the age step, parsed to its leading
    /// integer. Steps without a backing field are a no-op.
    pub fn record(&mut self, step: Step, input: &str) {
        let value = input.trim();
        match step {
            Step::Name => self.name = Some(value.to_string()),
            Step::Email | Step::EmailConfirm => self.email = Some(value.to_string()),
            Step::Password => self.password = Some(value.to_string()),
            Step::Age => {
                if let Some(age) = parse_leading_int(value) {
                    self.age = Some(age as u32);
                }
            }
            Step::Occupation => self.occupation = Some(value.to_string()),
            Step::KonkatsuStatus => self.konkatsu_status = Some(value.to_string()),
            Step::Location => self.location = Some(value.to_string()),
            Step::Hobbies => self.hobbies = Some(value.to_string()),
            Step::Start | Step::Complete => {}
        }
    }

    /// Returns the recorded name.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the recorded email address.
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Returns the recorded password.
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    /// Returns the recorded age.
    pub fn age(&self) -> Option<u32> {
        self.age
    }

    /// Returns the recorded occupation.
    pub fn occupation(&self) -> Option<&str> {
        self.occupation.as_deref()
    }

    /// Returns the recorded konkatsu status, as entered.
    pub fn konkatsu_status(&self) -> Option<&str> {
        self.konkatsu_status.as_deref()
    }

    /// Returns the recorded location (reserved flow).
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Returns the recorded hobbies (reserved flow).
    pub fn hobbies(&self) -> Option<&str> {
        self.hobbies.as_deref()
    }

    /// Returns true if nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
