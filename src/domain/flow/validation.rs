//! Per-step input validation.
//!
//! Validation never mutates state: it is called once per submitted
//! input and the result fully determines whether the session advances.
//! Failures are ordinary retryable outcomes, not errors; every message
//! is user-facing product text.

use serde::{Deserialize, Serialize};

use super::{KonkatsuStatus, Step};

const NAME_EMPTY: &str = "お名前を入力してください。";
const NAME_LENGTH: &str = "お名前は1文字以上50文字以下で入力してください。";
const EMAIL_EMPTY: &str = "メールアドレスを入力してください。";
const EMAIL_MALFORMED: &str =
    "メールアドレスには「@」マークが必要です。\n\n例：tanaka@example.com のような形式でお願いします 📧";
const PASSWORD_EMPTY: &str = "パスワードを入力してください。";
const PASSWORD_TOO_SHORT: &str = "あら、少し短いようですね 😅\nパスワードは8文字以上必要です。\n\nもう少し長めのパスワードをお願いします。\n例：「password123」のような感じです。";
const PASSWORD_MISSING_CLASS: &str = "もう少しですね！\n今度は英字と数字の両方を含めてください。\n\n例えば「mypass123」のように数字も入れていただけますか？";
const AGE_NOT_A_NUMBER: &str = "年齢は数字で入力してください。";
const AGE_UNDER_MINIMUM: &str = "ありがとうございます。\n申し訳ございませんが、Miraimは18歳以上の方にご利用いただいております。\n\n18歳になられましたら、ぜひまたお越しください。\nお待ちしております！";
const AGE_OUT_OF_RANGE: &str = "年齢を正しく入力してください。";
const OCCUPATION_EMPTY: &str = "ご職業を入力してください。";
const KONKATSU_STATUS_UNRECOGNIZED: &str = "1️⃣、2️⃣、3️⃣のいずれかの番号、または\n「初心者」「経験あり」「再チャレンジ」で教えてください。";

/// Minimum age for using the service.
pub const MINIMUM_AGE: i64 = 18;

/// Maximum age accepted as plausible input.
pub const MAXIMUM_AGE: i64 = 100;

const MAX_NAME_CHARS: usize = 50;
const MIN_PASSWORD_CHARS: usize = 8;

/// Outcome of validating one submitted input against one step.
///
/// A result is either valid or carries exactly one user-facing error
/// message; the sum type makes the "never both" invariant structural.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum ValidationResult {
    /// The input is acceptable; the flow may advance.
    Valid,

    /// The input was rejected; the step stays current and the message
    /// is shown as the next bot utterance.
    Invalid { message: String },
}

impl ValidationResult {
    fn invalid(message: &str) -> Self {
        Self::Invalid {
            message: message.to_string(),
        }
    }

    /// Returns true if the input was accepted.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Returns the rejection message, if any.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Valid => None,
            Self::Invalid { message } => Some(message),
        }
    }
}

/// Validates raw input against the rules of `step`.
///
/// Input is trimmed before checking. Steps without a rule of their own
/// (including the reserved location/hobbies steps) accept anything:
/// the step enumeration is closed, so an unmatched arm in a live flow
/// indicates a coverage bug rather than bad input, and the policy is
/// to fail open.
pub fn validate(step: Step, raw_input: &str) -> ValidationResult {
    let input = raw_input.trim();

    match step {
        Step::Name => validate_name(input),
        Step::Email => validate_email(input),
        Step::Password => validate_password(input),
        Step::Age => validate_age(input),
        Step::Occupation => validate_occupation(input),
        Step::KonkatsuStatus => validate_konkatsu_status(input),
        _ => {
            tracing::debug!(?step, "no validation rule for step; accepting input");
            ValidationResult::Valid
        }
    }
}

fn validate_name(input: &str) -> ValidationResult {
    if input.is_empty() {
        return ValidationResult::invalid(NAME_EMPTY);
    }
    if input.chars().count() > MAX_NAME_CHARS {
        return ValidationResult::invalid(NAME_LENGTH);
    }
    ValidationResult::Valid
}

fn validate_email(input: &str) -> ValidationResult {
    if input.is_empty() {
        return ValidationResult::invalid(EMAIL_EMPTY);
    }
    if !has_email_shape(input) {
        return ValidationResult::invalid(EMAIL_MALFORMED);
    }
    ValidationResult::Valid
}

fn validate_password(input: &str) -> ValidationResult {
    if input.is_empty() {
        return ValidationResult::invalid(PASSWORD_EMPTY);
    }
    if input.chars().count() < MIN_PASSWORD_CHARS {
        return ValidationResult::invalid(PASSWORD_TOO_SHORT);
    }
    let has_letter = input.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = input.chars().any(|c| c.is_ascii_digit());
    if !has_letter || !has_digit {
        return ValidationResult::invalid(PASSWORD_MISSING_CLASS);
    }
    ValidationResult::Valid
}

fn validate_age(input: &str) -> ValidationResult {
    let Some(age) = parse_leading_int(input) else {
        return ValidationResult::invalid(AGE_NOT_A_NUMBER);
    };
    if age < MINIMUM_AGE {
        // Soft block: the user is told about the minimum-age policy
        // but the step stays retryable.
        return ValidationResult::invalid(AGE_UNDER_MINIMUM);
    }
    if age > MAXIMUM_AGE {
        return ValidationResult::invalid(AGE_OUT_OF_RANGE);
    }
    ValidationResult::Valid
}

fn validate_occupation(input: &str) -> ValidationResult {
    if input.is_empty() {
        return ValidationResult::invalid(OCCUPATION_EMPTY);
    }
    ValidationResult::Valid
}

fn validate_konkatsu_status(input: &str) -> ValidationResult {
    if !KonkatsuStatus::token_matches(input) {
        return ValidationResult::invalid(KONKATSU_STATUS_UNRECOGNIZED);
    }
    ValidationResult::Valid
}

/// Checks the `local@domain.tld` shape: no whitespace anywhere, exactly
/// one `@` with a non-empty local part, and a domain containing a dot
/// with non-empty parts on both sides.
fn has_email_shape(input: &str) -> bool {
    if input.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = input.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Parses the leading integer of a string, mirroring the lenient
/// number handling users get away with in the chat UI: an optional
/// sign followed by ASCII digits, ignoring any trailing text such as
/// `"25歳"`.
pub(crate) fn parse_leading_int(input: &str) -> Option<i64> {
    let rest = input.strip_prefix(['+', '-']).unwrap_or(input);
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    let value: i64 = digits.parse().ok()?;
    Some(if input.starts_with('-') { -value } else { value })
}
