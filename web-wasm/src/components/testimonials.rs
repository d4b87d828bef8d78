//! お客様の声

use leptos::prelude::*;

/// (引用, 名前, イベント種別)
const TESTIMONIALS: [(&str, &str, &str); 3] = [
    (
        "Floating Arrangements transformed our wedding reception into a fairytale! The pool was absolutely stunning. \
         Every guest was in awe.",
        "Sarah & Michael",
        "Wedding Reception",
    ),
    (
        "Our annual garden party has never looked so elegant. The floating florals were the talk of the evening. \
         Simply exquisite!",
        "Jennifer Thompson",
        "Private Event",
    ),
    (
        "Professional, creative, and utterly beautiful. Highly recommend for anyone looking to add that 'wow' factor \
         to their event.",
        "Robert Chen",
        "Corporate Event",
    ),
];

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section id="testimonials" class="section section-white">
            <h3 class="section-title">"What Our Clients Say"</h3>
            <div class="card-grid">
                {TESTIMONIALS
                    .into_iter()
                    .map(|(quote, author, event)| {
                        view! {
                            <figure class="testimonial">
                                <blockquote>{format!("\u{201c}{}\u{201d}", quote)}</blockquote>
                                <figcaption>
                                    <p class="testimonial-author">{format!("— {}", author)}</p>
                                    <p class="testimonial-event">{event}</p>
                                </figcaption>
                            </figure>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
