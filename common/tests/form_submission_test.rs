//! 問い合わせ送信テスト
//!
//! メモリ上の送信先で通信回数と状態遷移を検証

use floating_common::{
    FieldUpdate, FormController, FormDraft, InquiryTransport, SubmissionFailure,
    SubmissionState, SubmitBlocked,
};
use futures::executor::block_on;
use std::cell::RefCell;

/// 受け取った下書きを記録し、決められた結果を返す
struct RecordingTransport {
    calls: RefCell<Vec<FormDraft>>,
    outcome: Result<(), SubmissionFailure>,
}

impl RecordingTransport {
    fn succeeding() -> Self {
        Self { calls: RefCell::new(Vec::new()), outcome: Ok(()) }
    }

    fn failing(failure: SubmissionFailure) -> Self {
        Self { calls: RefCell::new(Vec::new()), outcome: Err(failure) }
    }

    fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl InquiryTransport for RecordingTransport {
    async fn send(&self, draft: &FormDraft) -> Result<(), SubmissionFailure> {
        self.calls.borrow_mut().push(draft.clone());
        self.outcome.clone()
    }
}

fn form_with(name: &str, email: &str, message: &str) -> FormController {
    let mut form = FormController::new();
    form.set_field(FieldUpdate::Name(name.to_string()));
    form.set_field(FieldUpdate::Email(email.to_string()));
    form.set_field(FieldUpdate::Message(message.to_string()));
    form
}

/// 成功: 1回だけ送信し、下書きは初期化される
#[test]
fn test_submit_success_sends_once_and_resets() {
    let mut form = FormController::new();
    form.set_field(FieldUpdate::Email("a@b.com".to_string()));
    form.set_field(FieldUpdate::Name("Robert Chen".to_string()));
    form.set_field(FieldUpdate::Message("Corporate gala, 200 guests".to_string()));

    let transport = RecordingTransport::succeeding();
    let state = block_on(form.submit(&transport)).expect("送信が開始されない");

    assert_eq!(state, SubmissionState::Succeeded);
    assert_eq!(transport.call_count(), 1);
    assert_eq!(transport.calls.borrow()[0].email, "a@b.com");
    assert_eq!(form.draft(), &FormDraft::default());
    assert!(!form.is_submitting());
}

/// 名前が空なら送信しない
#[test]
fn test_submit_with_empty_name_sends_nothing() {
    let mut form = form_with("", "a@b.com", "Pond refresh");
    let transport = RecordingTransport::succeeding();

    let result = block_on(form.submit(&transport));

    assert!(matches!(result, Err(SubmitBlocked::MissingFields(_))));
    assert_eq!(transport.call_count(), 0);
    assert_eq!(form.state(), SubmissionState::Idle);
}

/// 通信失敗: Failed になり、下書きは残る
#[test]
fn test_transport_fault_keeps_draft() {
    let mut form = form_with("Sarah", "sarah@example.com", "Wedding in May");
    let before = form.draft().clone();
    let transport =
        RecordingTransport::failing(SubmissionFailure::Transport("network unreachable".to_string()));

    let state = block_on(form.submit(&transport)).unwrap();

    assert_eq!(state, SubmissionState::Failed);
    assert_eq!(form.draft(), &before);
    assert_eq!(transport.call_count(), 1);
}

/// 送信先の拒否も同じ扱い
#[test]
fn test_rejection_handled_like_transport_fault() {
    let mut form = form_with("Sarah", "sarah@example.com", "Wedding in May");
    let transport = RecordingTransport::failing(SubmissionFailure::Rejected { status: 422 });

    let state = block_on(form.submit(&transport)).unwrap();

    assert_eq!(state, SubmissionState::Failed);
    assert_eq!(form.draft().name, "Sarah");
}

/// Pending 中の再送信は通信しない
#[test]
fn test_second_submit_while_pending_is_ignored() {
    let mut form = form_with("Sarah", "sarah@example.com", "Wedding in May");
    let transport = RecordingTransport::succeeding();

    let in_flight = form.begin_submit().expect("送信開始失敗");
    assert!(form.is_submitting());

    let second = block_on(form.submit(&transport));
    assert_eq!(second, Err(SubmitBlocked::InFlight));
    assert_eq!(transport.call_count(), 0);

    let outcome = block_on(transport.send(&in_flight));
    assert_eq!(form.finish_submit(outcome), SubmissionState::Succeeded);
    assert_eq!(transport.call_count(), 1);
}

/// 失敗後は再送信できる
#[test]
fn test_retry_after_failure_succeeds() {
    let mut form = form_with("Sarah", "sarah@example.com", "Wedding in May");

    let failing = RecordingTransport::failing(SubmissionFailure::Rejected { status: 503 });
    assert_eq!(block_on(form.submit(&failing)).unwrap(), SubmissionState::Failed);

    let succeeding = RecordingTransport::succeeding();
    assert_eq!(block_on(form.submit(&succeeding)).unwrap(), SubmissionState::Succeeded);
    assert_eq!(succeeding.calls.borrow()[0].message, "Wedding in May");
}
