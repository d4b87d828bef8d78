//! エラー型定義

use thiserror::Error;

/// 問い合わせ送信の失敗
///
/// 利用者にはどちらも同じ通知を出す。区別はログ用。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionFailure {
    #[error("transport failure: {0}")]
    Transport(String),

    #[error("rejected by endpoint: HTTP {status}")]
    Rejected { status: u16 },
}

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("image index {index} out of range (gallery has {len} images)")]
    InvalidIndex { index: usize, len: usize },

    #[error("gallery must contain at least one image")]
    EmptyGallery,

    #[error(transparent)]
    Submission(#[from] SubmissionFailure),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
