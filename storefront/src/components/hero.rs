//! Hero banner with the two primary calls to action

use leptos::prelude::*;
use super::{Icon, ICON_ARROW_RIGHT};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero-backdrop"></div>
            <div class="container hero-content">
                <h1 class="hero-title">
                    "Sleep Better,"
                    <br />
                    <span class="hero-title-accent">"Wake Refreshed!!"</span>
                </h1>
                <p class="hero-description">
                    "Discover scientifically designed sleep products that transform your rest. "
                    "From premium pillows to natural supplements, find your perfect sleep setup."
                </p>
                <div class="hero-actions">
                    <button class="btn btn-primary btn-lg" data-scroll-to="sleep-quiz">
                        "Find Your Setup"
                        <Icon path=ICON_ARROW_RIGHT class="btn-icon" />
                    </button>
                    <button class="btn btn-outline btn-lg" data-scroll-to="products">
                        "Shop Products"
                    </button>
                </div>
            </div>
        </section>
    }
}
