//! ヒーローバナー

use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <img
                class="hero-background"
                src="/images/hero-party-artistic.jpg"
                alt="Elegant event with floating arrangements and artistic pieces"
            />
            <div class="hero-overlay"></div>
            <div class="hero-content">
                <h2>"Elevate Your Event with Exquisite" <br /> "Floating Arrangements"</h2>
                <p>
                    "Specializing in stunning floral and artistic installations for pools, ponds, and water features"
                </p>
                <div class="hero-actions">
                    <a href="#portfolio" class="btn btn-primary">"Explore Our Designs"</a>
                    <a href="#contact" class="btn btn-secondary">"Request a Consultation"</a>
                </div>
            </div>
        </section>
    }
}
