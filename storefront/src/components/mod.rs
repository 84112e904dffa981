//! Leptos UI components for rendering storefront pages.
//!
//! Each component is a Leptos `#[component]` function rendered once on the
//! server. Pages are composed from them by [`crate::render_home`],
//! [`crate::render_blog`] and [`crate::render_post`].
//!
//! # Component Hierarchy
//!
//! ```text
//! StoreDocument
//! ├── HomeSections
//! │   ├── Hero
//! │   ├── CollectionsSection
//! │   ├── ComparisonTable
//! │   ├── SleepQuiz
//! │   ├── ProductGridSection
//! │   ├── CallToAction
//! │   └── Newsletter
//! ├── BlogListing
//! └── PostArticle
//! ```

mod blog;
mod call_to_action;
mod collections;
mod comparison;
mod document;
mod hero;
mod home;
mod icons;
mod newsletter;
mod post;
mod products;
mod quiz;

pub use blog::BlogListing;
pub use call_to_action::CallToAction;
pub use collections::CollectionsSection;
pub use comparison::ComparisonTable;
pub use document::StoreDocument;
pub use hero::Hero;
pub use home::HomeSections;
pub use icons::*;
pub use newsletter::Newsletter;
pub use post::PostArticle;
pub use products::ProductGridSection;
pub use quiz::{progress_width, SleepQuiz};
