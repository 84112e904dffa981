//! Homepage composition
//!
//! Section order is fixed: hero, collections, comparison, quiz, products,
//! call-to-action, newsletter.

use leptos::prelude::*;
use crate::types::HomePage;
use super::{
    CallToAction, CollectionsSection, ComparisonTable, Hero, Newsletter, ProductGridSection,
    SleepQuiz,
};

#[component]
pub fn HomeSections(page: HomePage) -> impl IntoView {
    view! {
        <Hero />
        <CollectionsSection collections=page.collections loading=page.loading_collections />
        <ComparisonTable section=page.comparison />
        <SleepQuiz quiz=page.quiz />
        <ProductGridSection grid=page.products />
        <CallToAction />
        <Newsletter action=page.chrome.newsletter_action />
    }
}
