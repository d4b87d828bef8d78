//! サービス紹介カード

use leptos::prelude::*;

struct Service {
    title: &'static str,
    image: &'static str,
    alt: &'static str,
    body: &'static str,
    link_href: &'static str,
    link_label: &'static str,
}

const SERVICES: [Service; 3] = [
    Service {
        title: "Event Decor",
        image: "/images/corporate-event-colorful.jpg",
        alt: "Event decor with floating arrangements",
        body: "Weddings, private parties, corporate events – make a statement with our custom-designed \
               floral and artistic floating centerpieces. We create the perfect ambiance for any occasion.",
        link_href: "#portfolio",
        link_label: "View Event Gallery →",
    },
    Service {
        title: "Home & Garden",
        image: "/images/modern-home-pool.jpg",
        alt: "Home and garden floating arrangements",
        body: "Enhance your backyard oasis, pond, or water feature with our elegant and low-maintenance \
               floating decor. Enjoy year-round beauty and tranquility.",
        link_href: "#portfolio",
        link_label: "Discover Home Collections →",
    },
    Service {
        title: "Seasonal & Bespoke",
        image: "/images/party-artistic-pieces.jpg",
        alt: "Bespoke custom floating arrangements",
        body: "Looking for something truly unique? Our bespoke design service brings your vision to life, \
               crafting one-of-a-kind installations for any theme or season.",
        link_href: "#contact",
        link_label: "Get a Custom Quote →",
    },
];

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section id="services" class="section section-white">
            <h3 class="section-title">"Our Signature Floating Experiences"</h3>
            <div class="card-grid">
                {SERVICES
                    .iter()
                    .map(|s| {
                        view! {
                            <div class="service-card">
                                <div class="service-image">
                                    <img src=s.image alt=s.alt />
                                </div>
                                <div class="service-body">
                                    <h4>{s.title}</h4>
                                    <p>{s.body}</p>
                                    <a href=s.link_href>{s.link_label}</a>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
