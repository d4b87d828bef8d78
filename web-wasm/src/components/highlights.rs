//! 「選ばれる理由」セクション

use leptos::prelude::*;

const HIGHLIGHTS: [(&str, &str); 3] = [
    (
        "Expert Craftsmanship",
        "Each arrangement is meticulously designed and handcrafted by expert florists and artisans, \
         ensuring breathtaking beauty and durability.",
    ),
    (
        "Seamless Execution",
        "From concept to installation, our dedicated team handles every detail, providing a stress-free \
         and spectacular experience for your event or property.",
    ),
    (
        "Personalized Service",
        "Your vision is our inspiration. We work closely with you to create arrangements that perfectly \
         reflect your style and event's theme.",
    ),
];

#[component]
pub fn Highlights() -> impl IntoView {
    view! {
        <section class="section section-stone">
            <h3 class="section-title">"Experience the Art of Waterborne Beauty"</h3>
            <div class="card-grid">
                {HIGHLIGHTS
                    .into_iter()
                    .map(|(title, body)| {
                        view! {
                            <div class="highlight">
                                <h4>{title}</h4>
                                <p>{body}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
