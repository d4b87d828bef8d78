//! ヘッダー（固定ナビゲーション）コンポーネント

use leptos::prelude::*;

/// ページ内リンク (アンカー, 表示名)
pub const SECTION_LINKS: [(&str, &str); 4] = [
    ("#services", "Services"),
    ("#portfolio", "Portfolio"),
    ("#testimonials", "Testimonials"),
    ("#contact", "Contact"),
];

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <nav class="navbar">
            <div class="navbar-inner">
                <a href="#" class="navbar-logo">
                    <img
                        src="/images/Main_Logo.png"
                        alt="Floating Arrangements - Elevate Your Waterscape"
                        width="200"
                        height="60"
                    />
                </a>
                <div class="navbar-links">
                    {SECTION_LINKS
                        .into_iter()
                        .map(|(href, label)| view! { <a href=href>{label}</a> })
                        .collect_view()}
                </div>
            </div>
        </nav>
    }
}
