//! ギャラリー画像の型定義
//!
//! - ImageDescriptor: 画像1枚分（パスと代替テキスト）
//! - Gallery: 空でない画像列。カルーセルはこれを前提に剰余計算する

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// 画像1枚分の記述子
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageDescriptor {
    pub source: String,
    pub alt_text: String,
}

impl ImageDescriptor {
    pub fn new(source: impl Into<String>, alt_text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            alt_text: alt_text.into(),
        }
    }
}

/// 既定のポートフォリオ画像（ページ初期表示用）
const DEFAULT_IMAGES: [(&str, &str); 7] = [
    (
        "/images/wedding-rose-arrangement.jpg",
        "Wedding ceremony with floating rose arrangement in pool",
    ),
    (
        "/images/modern-home-pool.jpg",
        "Modern home pool with artistic floating arrangements",
    ),
    (
        "/images/corporate-event-colorful.jpg",
        "Corporate event with colorful floating arrangements",
    ),
    (
        "/images/evening-party-elegant.jpg",
        "Evening party with elegant floating centerpieces",
    ),
    (
        "/images/daytime-lily-arrangements.jpg",
        "Daytime pool with beautiful lily arrangements",
    ),
    (
        "/images/party-artistic-pieces.jpg",
        "Party with artistic floating pieces and gold accents",
    ),
    (
        "/images/evening-wreath-arrangements.jpg",
        "Evening pool with elegant wreath arrangements",
    ),
];

/// 既定の画像列
pub fn default_images() -> Vec<ImageDescriptor> {
    DEFAULT_IMAGES
        .iter()
        .map(|(source, alt)| ImageDescriptor::new(*source, *alt))
        .collect()
}

/// 空でない固定順の画像列
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gallery {
    images: Vec<ImageDescriptor>,
}

impl Gallery {
    /// 画像列からギャラリーを作成（空ならエラー）
    pub fn new(images: Vec<ImageDescriptor>) -> Result<Self> {
        if images.is_empty() {
            return Err(Error::EmptyGallery);
        }
        Ok(Self { images })
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// 常にfalse（空のGalleryは作れない）
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn images(&self) -> &[ImageDescriptor] {
        &self.images
    }
}

impl Default for Gallery {
    fn default() -> Self {
        Self {
            images: default_images(),
        }
    }
}
