//! Newsletter signup form

use leptos::prelude::*;

/// Email signup posting to `action`
#[component]
pub fn Newsletter(#[prop(into)] action: String) -> impl IntoView {
    let action = if action.is_empty() { "#".to_string() } else { action };
    view! {
        <section id="newsletter" class="newsletter">
            <div class="container narrow center">
                <h2 class="section-title">"Sleep Tips in Your Inbox"</h2>
                <p class="section-description">
                    "Get product news, offers and evidence-based advice for better rest."
                </p>
                <form class="newsletter-form" method="post" action=action>
                    <input
                        type="email"
                        name="email"
                        required="required"
                        placeholder="you@example.com"
                        aria-label="Email address"
                    />
                    <button class="btn btn-primary" type="submit">"Subscribe"</button>
                </form>
            </div>
        </section>
    }
}
