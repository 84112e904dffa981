//! Closing call-to-action band

use leptos::prelude::*;

#[component]
pub fn CallToAction() -> impl IntoView {
    view! {
        <section class="cta band-dreamy">
            <div class="container narrow center">
                <h2 class="section-title">"Ready to Transform Your Sleep?"</h2>
                <p class="section-description">
                    "Join thousands of satisfied customers who have improved their sleep quality with our products."
                </p>
                <button class="btn btn-primary btn-lg" data-scroll-to="sleep-quiz">
                    "Find Your Setup"
                </button>
            </div>
        </section>
    }
}
