//! サイト設定
//!
//! index.html に埋め込んだ JSON（`site-config`）から読み込む。
//! 省略した項目は既定値になる。

use crate::carousel::{Carousel, DEFAULT_TRANSITION};
use crate::error::{Error, Result};
use crate::gallery::{default_images, Gallery, ImageDescriptor};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 既定の問い合わせ送信先（フォーム中継サービス）
pub const DEFAULT_INQUIRY_ENDPOINT: &str = "https://formspree.io/f/floating-arrangements";

/// 遷移時間の上限（これ以上はUIが固まって見える）
const MAX_TRANSITION_MS: u64 = 10_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteConfig {
    pub inquiry_endpoint: String,
    /// 0 ならロックなし
    pub transition_ms: u64,
    pub images: Vec<ImageDescriptor>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            inquiry_endpoint: DEFAULT_INQUIRY_ENDPOINT.into(),
            transition_ms: DEFAULT_TRANSITION.as_millis() as u64,
            images: default_images(),
        }
    }
}

impl SiteConfig {
    /// JSON文字列から読み込み、検証する
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SiteConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let endpoint = self.inquiry_endpoint.trim();
        if !(endpoint.starts_with("https://") || endpoint.starts_with("http://")) {
            return Err(Error::Config(format!(
                "inquiryEndpoint must be an http(s) URL: {:?}",
                self.inquiry_endpoint
            )));
        }
        if self.transition_ms > MAX_TRANSITION_MS {
            return Err(Error::Config(format!(
                "transitionMs must be at most {}: {}",
                MAX_TRANSITION_MS, self.transition_ms
            )));
        }
        if self.images.is_empty() {
            return Err(Error::EmptyGallery);
        }
        Ok(())
    }

    /// ロック時間（0ならNone）
    pub fn transition(&self) -> Option<Duration> {
        Some(Duration::from_millis(self.transition_ms)).filter(|d| !d.is_zero())
    }

    pub fn gallery(&self) -> Result<Gallery> {
        Gallery::new(self.images.clone())
    }

    /// 設定どおりのカルーセルを作成
    pub fn carousel(&self) -> Result<Carousel> {
        Ok(Carousel::with_transition(self.gallery()?, self.transition()))
    }
}
