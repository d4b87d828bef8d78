//! 問い合わせ送信（フォーム中継サービスへの POST）
//!
//! レスポンス本文は読まない。2xx なら成功、それ以外と fetch 例外は失敗。

use floating_common::{FormDraft, InquiryTransport, SubmissionFailure};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// fetch による送信先
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTransport {
    endpoint: String,
}

impl FetchTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl InquiryTransport for FetchTransport {
    async fn send(&self, draft: &FormDraft) -> Result<(), SubmissionFailure> {
        let body = inquiry_body(draft)?;
        let status = post_json(&self.endpoint, &body)
            .await
            .map_err(|e| SubmissionFailure::Transport(describe_js_error(&e)))?;
        status_outcome(status)
    }
}

/// 送信するJSON本文
pub fn inquiry_body(draft: &FormDraft) -> Result<String, SubmissionFailure> {
    serde_json::to_string(draft).map_err(|e| SubmissionFailure::Transport(e.to_string()))
}

/// HTTPステータスを送信結果に変換
pub fn status_outcome(status: u16) -> Result<(), SubmissionFailure> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(SubmissionFailure::Rejected { status })
    }
}

fn describe_js_error(error: &JsValue) -> String {
    error.as_string().unwrap_or_else(|| format!("{:?}", error))
}

/// JSON を POST してステータスコードを返す
async fn post_json(url: &str, body: &str) -> Result<u16, JsValue> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(body));

    let request = Request::new_with_str_and_init(url, &opts)?;
    request.headers().set("Content-Type", "application/json")?;
    request.headers().set("Accept", "application/json")?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    Ok(resp.status())
}
