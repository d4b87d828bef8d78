//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use crate::api::FetchTransport;
use crate::components::{
    contact_form::ContactSection,
    footer::Footer,
    header::Header,
    hero::Hero,
    highlights::Highlights,
    image_gallery::ImageGallery,
    services::Services,
    testimonials::Testimonials,
};
use crate::config::load_site_config;
use floating_common::{Carousel, FormController, Gallery};
use gloo::console;

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let config = load_site_config();

    // コントローラはこのビューの寿命に閉じる
    let carousel = config.carousel().unwrap_or_else(|e| {
        console::warn!(format!("gallery config unusable, using default images: {}", e));
        Carousel::with_transition(Gallery::default(), config.transition())
    });
    let carousel = RwSignal::new(carousel);
    let form = RwSignal::new(FormController::new());
    let transport = FetchTransport::new(config.inquiry_endpoint.clone());

    view! {
        <div class="page">
            <Header />
            <Hero />
            <Services />
            <Highlights />
            <Testimonials />

            <section id="portfolio" class="section section-stone">
                <h3 class="section-title">"A Glimpse of Our Creations"</h3>
                <ImageGallery carousel=carousel />
            </section>

            <ContactSection form=form transport=transport />
            <Footer />
        </div>
    }
}
