//! 問い合わせフォームの状態機械
//!
//! 下書き（FormDraft）と送信状態（SubmissionState）を持つ。
//! 送信は `begin_submit` → 通信 → `finish_submit` の2段階で、
//! 描画層はシグナルの借用を await 越しに保持せずに済む。

use crate::error::SubmissionFailure;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::future::Future;

/// 問い合わせ種別
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InquiryType {
    #[default]
    #[serde(rename = "Event Decor")]
    EventDecor,
    #[serde(rename = "Home & Garden")]
    HomeAndGarden,
    #[serde(rename = "Custom/Bespoke Design")]
    CustomBespoke,
    #[serde(rename = "General Inquiry")]
    GeneralInquiry,
}

impl InquiryType {
    pub const ALL: [InquiryType; 4] = [
        InquiryType::EventDecor,
        InquiryType::HomeAndGarden,
        InquiryType::CustomBespoke,
        InquiryType::GeneralInquiry,
    ];

    /// 表示ラベル（送信値と同じ）
    pub fn label(&self) -> &'static str {
        match self {
            InquiryType::EventDecor => "Event Decor",
            InquiryType::HomeAndGarden => "Home & Garden",
            InquiryType::CustomBespoke => "Custom/Bespoke Design",
            InquiryType::GeneralInquiry => "General Inquiry",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.label() == label)
    }
}

impl fmt::Display for InquiryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// フォームの下書き（送信ペイロードそのもの）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormDraft {
    pub name: String,
    pub email: String,
    pub inquiry_type: InquiryType,
    pub message: String,
}

impl FormDraft {
    /// 未入力の必須項目（空白のみも未入力扱い）
    pub fn missing_fields(&self) -> Vec<RequiredField> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push(RequiredField::Name);
        }
        if self.email.trim().is_empty() {
            missing.push(RequiredField::Email);
        }
        if self.message.trim().is_empty() {
            missing.push(RequiredField::Message);
        }
        missing
    }
}

/// 1項目の更新
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Name(String),
    Email(String),
    InquiryType(InquiryType),
    Message(String),
}

/// 必須項目
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Name,
    Email,
    Message,
}

impl RequiredField {
    pub fn label(&self) -> &'static str {
        match self {
            RequiredField::Name => "name",
            RequiredField::Email => "email",
            RequiredField::Message => "message",
        }
    }
}

/// 送信状態
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed,
}

impl SubmissionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionState::Idle => "idle",
            SubmissionState::Pending => "pending",
            SubmissionState::Succeeded => "succeeded",
            SubmissionState::Failed => "failed",
        }
    }
}

/// 利用者向け通知
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Success,
    Failure,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::Success => "Thank you for your inquiry! We'll be in touch shortly.",
            Notice::Failure => "Sorry, your inquiry could not be sent. Please try again.",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Notice::Success => "success",
            Notice::Failure => "error",
        }
    }
}

/// 送信を開始しなかった理由
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitBlocked {
    MissingFields(Vec<RequiredField>),
    InFlight,
}

impl fmt::Display for SubmitBlocked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitBlocked::MissingFields(fields) => {
                let names: Vec<&str> = fields.iter().map(|f| f.label()).collect();
                write!(f, "missing required fields: {}", names.join(", "))
            }
            SubmitBlocked::InFlight => f.write_str("a submission is already in flight"),
        }
    }
}

impl SubmitBlocked {
    /// フォーム上に出す案内。送信中の二重押しは表示しない
    pub fn user_message(&self) -> Option<String> {
        match self {
            SubmitBlocked::MissingFields(fields) => {
                let names: Vec<&str> = fields.iter().map(|f| f.label()).collect();
                Some(format!("Please fill in: {}.", names.join(", ")))
            }
            SubmitBlocked::InFlight => None,
        }
    }
}

/// 問い合わせの送信先
///
/// Web版は fetch、テストではメモリ上の実装を使う。
pub trait InquiryTransport {
    fn send(&self, draft: &FormDraft) -> impl Future<Output = Result<(), SubmissionFailure>>;
}

/// フォームコントローラ
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormController {
    draft: FormDraft,
    state: SubmissionState,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &FormDraft {
        &self.draft
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Pending
    }

    pub fn notice(&self) -> Option<Notice> {
        match self.state {
            SubmissionState::Succeeded => Some(Notice::Success),
            SubmissionState::Failed => Some(Notice::Failure),
            SubmissionState::Idle | SubmissionState::Pending => None,
        }
    }

    /// 1項目だけ上書きする。成功/失敗の通知は編集で消える
    pub fn set_field(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::Name(value) => self.draft.name = value,
            FieldUpdate::Email(value) => self.draft.email = value,
            FieldUpdate::InquiryType(value) => self.draft.inquiry_type = value,
            FieldUpdate::Message(value) => self.draft.message = value,
        }
        if matches!(self.state, SubmissionState::Succeeded | SubmissionState::Failed) {
            self.state = SubmissionState::Idle;
        }
    }

    /// 送信開始: Pending に遷移し、送るべき下書きのスナップショットを返す
    pub fn begin_submit(&mut self) -> Result<FormDraft, SubmitBlocked> {
        if self.is_submitting() {
            return Err(SubmitBlocked::InFlight);
        }
        let missing = self.draft.missing_fields();
        if !missing.is_empty() {
            return Err(SubmitBlocked::MissingFields(missing));
        }
        self.state = SubmissionState::Pending;
        Ok(self.draft.clone())
    }

    /// 通信結果を反映する
    ///
    /// 成功なら下書きを初期値に戻す。失敗なら下書きは保持する。
    /// Pending 以外で呼ばれた場合は何もしない。
    pub fn finish_submit(&mut self, outcome: Result<(), SubmissionFailure>) -> SubmissionState {
        if self.state != SubmissionState::Pending {
            return self.state;
        }
        self.state = match outcome {
            Ok(()) => {
                self.draft = FormDraft::default();
                SubmissionState::Succeeded
            }
            Err(_) => SubmissionState::Failed,
        };
        self.state
    }

    /// 送信を1回実行する
    pub async fn submit<T: InquiryTransport>(
        &mut self,
        transport: &T,
    ) -> Result<SubmissionState, SubmitBlocked> {
        let draft = self.begin_submit()?;
        let outcome = transport.send(&draft).await;
        Ok(self.finish_submit(outcome))
    }
}
