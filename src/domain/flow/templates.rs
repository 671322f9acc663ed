//! Bot utterance templates for the onboarding conversation.
//!
//! All user-facing Japanese product texts live here: the seeded
//! welcome, per-mode opening prompts, per-step acknowledgements, and
//! the completion notice. Validation error texts live next to the
//! rules in the validation module.

use super::{Answers, KonkatsuStatus, Step};

/// Seeded bot message every new session starts with.
pub const WELCOME_MESSAGE: &str =
    "こんにちは！Miraimへようこそ 🎉\n婚活を頑張るあなたを全力でサポートします！";

/// Opening prompt that moves a registration session to the name step.
pub const REGISTRATION_OPENING: &str = "まずはお名前を教えてください。\n（例：山田太郎）";

/// Greeting appended when a session (re)starts in login mode.
pub const LOGIN_GREETING: &str =
    "おかえりなさい！👋\nMiraimにログインしましょう。\n\nメールアドレスを教えてください。";

/// System message appended once the flow reaches its terminal step.
pub const COMPLETION_NOTICE: &str = "登録完了 - メイン画面に移動";

const NAME_RESPONSE_SUFFIX: &str = "さん、よろしくお願いします！\n素敵なお名前ですね ✨\n\n次に、ログインで使用するメールアドレスを教えてください。";

const EMAIL_RESPONSE: &str = "ありがとうございます！\nメールアドレスを確認しました 📧\n\n続いて、安全なパスワードを設定しましょう。\n以下の条件を満たすパスワードをお願いします：\n• 8文字以上\n• 英字と数字を含む";

const PASSWORD_RESPONSE: &str = "とても良いパスワードです！セキュリティもばっちりですね 🔒\n\n年齢を教えていただけますか？\n（マッチングの参考にさせていただきます）";

const OCCUPATION_RESPONSE_SUFFIX: &str = "のお仕事、素晴らしいですね！👨‍💻\n\n最後に、現在の婚活状況を教えてください：\n1️⃣ 婚活初心者です\n2️⃣ 婚活経験があります\n3️⃣ 再チャレンジです\n\n番号または内容で答えてください。";

const EMAIL_CONFIRM_RESPONSE: &str = "メールアドレスを確認しました。\n\nパスワードを入力してください。";

const GENERIC_RESPONSE: &str = "ありがとうございます！";

const BEGINNER_REMARK: &str =
    "婚活初心者の方ですね！🔰\n一緒に素敵な出会いを見つけていきましょう 💪";

const EXPERIENCED_REMARK: &str =
    "婚活経験がおありなんですね！\n今度こそ素敵な出会いを見つけましょう ✨";

const RETRY_REMARK: &str = "再チャレンジですね！\n新しい気持ちで頑張りましょう 🌟";

impl KonkatsuStatus {
    /// Closing remark matching the user's stated activity status.
    pub fn closing_remark(&self) -> &'static str {
        match self {
            Self::Beginner => BEGINNER_REMARK,
            Self::Experienced => EXPERIENCED_REMARK,
            Self::Retry => RETRY_REMARK,
        }
    }
}

/// Builds the bot utterance acknowledging a valid answer at `step`.
///
/// Echoes the user's own input back for name, age, and occupation. For
/// the konkatsu status step the text branches on which token matched
/// and appends the completion announcement referencing the stored
/// name; the accumulated answers are an explicit input so this stays a
/// pure function.
pub fn response_for(step: Step, input: &str, answers: &Answers) -> String {
    match step {
        Step::Name => format!("{input}{NAME_RESPONSE_SUFFIX}"),
        Step::Email => EMAIL_RESPONSE.to_string(),
        Step::Password => PASSWORD_RESPONSE.to_string(),
        Step::Age => format!(
            "{input}歳ですね！\n\nお仕事は何をされていますか？\n（例：会社員、エンジニア、営業など）"
        ),
        Step::Occupation => format!("{input}{OCCUPATION_RESPONSE_SUFFIX}"),
        Step::KonkatsuStatus => {
            let remark = KonkatsuStatus::classify(input).closing_remark();
            let name = answers.name().unwrap_or_default();
            format!(
                "{remark}\n\n登録が完了しました！🎊\n{name}さんの婚活成功を心から応援しています。\n\n早速、Miraimの機能を使ってみませんか？"
            )
        }
        Step::EmailConfirm => EMAIL_CONFIRM_RESPONSE.to_string(),
        _ => GENERIC_RESPONSE.to_string(),
    }
}
