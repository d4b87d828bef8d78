//! フッターコンポーネント

use leptos::prelude::*;
use crate::components::header::SECTION_LINKS;

const SOCIAL_LINKS: [&str; 3] = ["Instagram", "Pinterest", "Facebook"];

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="footer">
            <div class="footer-grid">
                <div>
                    <img
                        class="footer-logo"
                        src="/images/Main_Logo.png"
                        alt="Floating Arrangements"
                        width="180"
                        height="54"
                    />
                    <p>
                        "Transforming water features into artistic focal points with sustainable, \
                         floating floral designs and art pieces."
                    </p>
                </div>
                <div>
                    <h3>"Quick Links"</h3>
                    <ul>
                        {SECTION_LINKS
                            .into_iter()
                            .map(|(href, label)| view! { <li><a href=href>{label}</a></li> })
                            .collect_view()}
                    </ul>
                </div>
                <div>
                    <h3>"Follow Us"</h3>
                    <div class="social-links">
                        {SOCIAL_LINKS
                            .into_iter()
                            .map(|name| view! { <a href="#" aria-label=name>{name}</a> })
                            .collect_view()}
                    </div>
                </div>
            </div>
            <p class="copyright">
                {format!("© {} Floating Arrangements. All rights reserved.", year)}
            </p>
        </footer>
    }
}
