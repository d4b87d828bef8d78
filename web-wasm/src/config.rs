//! サイト設定の読み込み
//!
//! `<script type="application/json" id="site-config">` の中身を読む。
//! 要素がなければ既定値、不正なら警告を出して既定値。

use floating_common::SiteConfig;
use gloo::console;

pub const SITE_CONFIG_ELEMENT_ID: &str = "site-config";

pub fn load_site_config() -> SiteConfig {
    let Some(text) = site_config_text() else {
        console::debug!("site-config not found; using built-in defaults");
        return SiteConfig::default();
    };

    match SiteConfig::from_json(&text) {
        Ok(config) => {
            console::debug!(format!(
                "site-config loaded: endpoint={} transitionMs={} images={}",
                config.inquiry_endpoint,
                config.transition_ms,
                config.images.len()
            ));
            config
        }
        Err(e) => {
            console::warn!(format!("invalid site-config, using defaults: {}", e));
            SiteConfig::default()
        }
    }
}

fn site_config_text() -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id(SITE_CONFIG_ELEMENT_ID)?
        .text_content()
}
