//! End-to-end tests for the onboarding conversation flow.

use std::sync::Arc;

use miraim_onboarding::adapters::InstantPacer;
use miraim_onboarding::application::{ConversationController, SubmitOutcome};
use miraim_onboarding::domain::flow::{Mode, Step};
use miraim_onboarding::domain::session::Role;

fn controller(mode: Mode) -> ConversationController<InstantPacer> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
    ConversationController::new(mode, Arc::new(InstantPacer))
}

#[tokio::test]
async fn full_registration_walks_every_step_and_freezes_answers() {
    let mut ctl = controller(Mode::Registration);
    ctl.begin().await.unwrap();
    assert_eq!(ctl.current_step(), Step::Name);

    let outcome = ctl.submit("山田太郎").await.unwrap();
    assert_eq!(outcome, SubmitOutcome::Advanced { next: Step::Email });

    // A bad email is rejected and the step stays put.
    let outcome = ctl.submit("not-an-email").await.unwrap();
    assert!(matches!(outcome, SubmitOutcome::Rejected { .. }));
    assert_eq!(ctl.current_step(), Step::Email);

    let outcome = ctl.submit("tanaka@example.com").await.unwrap();
    assert_eq!(
        outcome,
        SubmitOutcome::Advanced {
            next: Step::Password
        }
    );

    // Too short, then acceptable.
    let outcome = ctl.submit("short1").await.unwrap();
    assert!(matches!(outcome, SubmitOutcome::Rejected { .. }));
    let outcome = ctl.submit("mypass123").await.unwrap();
    assert_eq!(outcome, SubmitOutcome::Advanced { next: Step::Age });

    // Under the minimum age, then acceptable.
    let outcome = ctl.submit("17").await.unwrap();
    assert!(matches!(outcome, SubmitOutcome::Rejected { .. }));
    let outcome = ctl.submit("25").await.unwrap();
    assert_eq!(
        outcome,
        SubmitOutcome::Advanced {
            next: Step::Occupation
        }
    );

    let outcome = ctl.submit("エンジニア").await.unwrap();
    assert_eq!(
        outcome,
        SubmitOutcome::Advanced {
            next: Step::KonkatsuStatus
        }
    );

    let outcome = ctl.submit("1").await.unwrap();
    assert_eq!(outcome, SubmitOutcome::Completed);
    assert!(ctl.is_complete());
    assert_eq!(ctl.current_step(), Step::Complete);

    let answers = ctl.answers();
    assert_eq!(answers.name(), Some("山田太郎"));
    assert_eq!(answers.email(), Some("tanaka@example.com"));
    assert_eq!(answers.password(), Some("mypass123"));
    assert_eq!(answers.age(), Some(25));
    assert_eq!(answers.occupation(), Some("エンジニア"));
    assert!(answers.konkatsu_status().is_some());
    assert_eq!(answers.location(), None);
    assert_eq!(answers.hobbies(), None);
}

#[tokio::test]
async fn completed_registration_transcript_ends_with_the_banner() {
    let mut ctl = controller(Mode::Registration);
    ctl.begin().await.unwrap();
    for input in ["山田太郎", "tanaka@example.com", "mypass123", "25", "エンジニア", "1"] {
        ctl.submit(input).await.unwrap();
    }

    let last = ctl.transcript().last().unwrap();
    assert_eq!(last.role(), Role::System);
    assert_eq!(last.text(), "登録完了 - メイン画面に移動");

    // The konkatsu acknowledgement mentions the registered name.
    let closing = ctl
        .transcript()
        .iter()
        .rev()
        .find(|m| m.is_bot())
        .unwrap();
    assert!(closing.text().contains("山田太郎さんの婚活成功"));

    // Sequence numbers are strictly increasing across the transcript.
    let seqs: Vec<u64> = ctl.transcript().iter().map(|m| m.seq()).collect();
    assert!(seqs.windows(2).all(|w| w[0] < w[1]));
}

#[tokio::test]
async fn full_login_reaches_completion_in_two_steps() {
    let mut ctl = controller(Mode::Login);
    ctl.begin().await.unwrap();
    assert_eq!(ctl.current_step(), Step::EmailConfirm);
    assert!(ctl.progress().is_none());

    let outcome = ctl.submit("tanaka@example.com").await.unwrap();
    assert_eq!(
        outcome,
        SubmitOutcome::Advanced {
            next: Step::Password
        }
    );
    let progress = ctl.progress().unwrap();
    assert_eq!((progress.current(), progress.total()), (2, 2));

    let outcome = ctl.submit("mypass123").await.unwrap();
    assert_eq!(outcome, SubmitOutcome::Completed);
    assert_eq!(ctl.answers().email(), Some("tanaka@example.com"));
}

#[tokio::test]
async fn switching_mode_discards_partial_registration() {
    let mut ctl = controller(Mode::Registration);
    ctl.begin().await.unwrap();
    ctl.submit("山田太郎").await.unwrap();
    ctl.submit("tanaka@example.com").await.unwrap();
    assert_eq!(ctl.answers().name(), Some("山田太郎"));

    ctl.switch_mode(Mode::Login).await.unwrap();

    assert_eq!(ctl.mode(), Mode::Login);
    assert_eq!(ctl.current_step(), Step::EmailConfirm);
    assert!(ctl.answers().is_empty());
    assert!(!ctl.is_busy());
    // Fresh transcript: welcome seed plus the login greeting.
    assert_eq!(ctl.transcript().len(), 2);

    ctl.submit("suzuki@example.com").await.unwrap();
    let outcome = ctl.submit("newpass456").await.unwrap();
    assert_eq!(outcome, SubmitOutcome::Completed);
    assert_eq!(ctl.answers().email(), Some("suzuki@example.com"));
}

#[tokio::test]
async fn resubmitting_invalid_input_repeats_the_error_without_moving() {
    let mut ctl = controller(Mode::Registration);
    ctl.begin().await.unwrap();
    ctl.submit("山田太郎").await.unwrap();
    let before = ctl.transcript().len();

    let first = ctl.submit("bad").await.unwrap();
    let second = ctl.submit("bad").await.unwrap();
    assert_eq!(first, second);
    assert_eq!(ctl.current_step(), Step::Email);

    // Each attempt adds exactly one user message and one bot error.
    assert_eq!(ctl.transcript().len(), before + 4);
    let errors: Vec<&str> = ctl.transcript()[before..]
        .iter()
        .filter(|m| m.is_bot())
        .map(|m| m.text())
        .collect();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0], errors[1]);
}

#[tokio::test]
async fn blank_and_post_completion_input_leave_no_trace() {
    let mut ctl = controller(Mode::Login);
    ctl.begin().await.unwrap();

    assert_eq!(ctl.submit("").await.unwrap(), SubmitOutcome::Ignored);
    assert_eq!(ctl.submit("  \n ").await.unwrap(), SubmitOutcome::Ignored);

    ctl.submit("tanaka@example.com").await.unwrap();
    ctl.submit("mypass123").await.unwrap();
    assert!(ctl.is_complete());

    let len = ctl.transcript().len();
    assert_eq!(
        ctl.submit("anything else").await.unwrap(),
        SubmitOutcome::Ignored
    );
    assert_eq!(ctl.transcript().len(), len);
}
