//! Product comparison tool
//!
//! Every tab is rendered as its own panel; exactly one panel carries the
//! `active` class, so the page never shows a mix of two categories.

use leptos::prelude::*;
use crate::types::{ComparisonCard, ComparisonSection};
use super::{Icon, ICON_CHECK, ICON_X};

/// Tab buttons plus one panel per tab
#[component]
pub fn ComparisonTable(section: ComparisonSection) -> impl IntoView {
    let active = section.active.clone();
    let buttons = section
        .tabs
        .iter()
        .map(|tab| {
            let class = if tab.id == active { "btn btn-tab active" } else { "btn btn-tab" };
            view! {
                <button class=class data-compare-tab=tab.id.clone()>{tab.label.clone()}</button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section id="compare" class="compare band-muted" data-compare="">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Compare & Choose"</h2>
                    <p class="section-description">
                        "Find the perfect sleep product for your needs. Compare features, benefits, and pricing side by side."
                    </p>
                </div>
                <div class="tab-bar">{buttons}</div>
                {section.tabs.into_iter().map(|tab| {
                    let class = if tab.id == active { "compare-panel active" } else { "compare-panel" };
                    view! {
                        <div class=class data-compare-panel=tab.id>
                            <div class="compare-grid">
                                {tab.products.into_iter().map(|card| view! { <ComparisonCardView card=card /> }).collect::<Vec<_>>()}
                            </div>
                        </div>
                    }
                }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}

/// One comparison card: image, price, features, pros and considerations
#[component]
fn ComparisonCardView(card: ComparisonCard) -> impl IntoView {
    let features = [
        ("Support:", card.support),
        ("Cooling:", card.cooling),
        ("Material:", card.material),
        ("Best for:", card.best_for),
    ];

    view! {
        <article class="card compare-card">
            <div class="card-media">
                <img src=card.image alt=card.name.clone() />
            </div>
            <h3 class="card-title">{card.name.clone()}</h3>
            <p class="price">{card.price}</p>

            <h4>"Features"</h4>
            <dl class="feature-list">
                {features.into_iter().map(|(label, value)| view! {
                    <div class="feature-row">
                        <dt class="muted">{label}</dt>
                        <dd>{value}</dd>
                    </div>
                }).collect::<Vec<_>>()}
            </dl>

            <h4 class="with-icon">
                <Icon path=ICON_CHECK size="16" class="icon-good" />
                "Pros"
            </h4>
            <ul class="bullet-list pros">
                {card.pros.into_iter().map(|pro| view! { <li>{pro}</li> }).collect::<Vec<_>>()}
            </ul>

            <h4 class="with-icon">
                <Icon path=ICON_X size="16" class="muted" />
                "Considerations"
            </h4>
            <ul class="bullet-list cons muted">
                {card.cons.into_iter().map(|con| view! { <li>{con}</li> }).collect::<Vec<_>>()}
            </ul>

            <a class="btn btn-primary btn-block" href=card.link>"View Details"</a>
        </article>
    }
}
