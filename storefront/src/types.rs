//! View-model types for storefront pages.
//!
//! These types carry everything a page needs, already resolved to display
//! strings. They're designed to be:
//!
//! - **Serializable** - pages can be snapshotted to JSON for debugging
//! - **Clone-friendly** - components take owned props
//! - **Default-able** - tests build partial pages with `..Default::default()`
//!
//! # Example
//!
//! ```rust
//! use storefront_leptos::types::{BlogCard, BlogPage, Chrome};
//!
//! let page = BlogPage {
//!     chrome: Chrome {
//!         store_name: "Sleepwell".into(),
//!         ..Default::default()
//!     },
//!     posts: vec![BlogCard {
//!         title: "Why side sleepers need loft".into(),
//!         href: "/blog/side-sleepers".into(),
//!         ..Default::default()
//!     }],
//!     ..Default::default()
//! };
//! assert_eq!(page.posts.len(), 1);
//! ```

use serde::{Deserialize, Serialize};

/// Shared page chrome: store name and the newsletter form target.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Chrome {
    /// Brand name shown in the header, footer and `<title>`
    pub store_name: String,
    /// Form action for the newsletter signup
    pub newsletter_action: String,
}

/// Everything the homepage renders, in section order.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct HomePage {
    /// Header/footer data
    pub chrome: Chrome,
    /// Collections still loading; the section stays hidden until they arrive
    pub loading_collections: bool,
    /// Collection cards ("Shop by Category")
    pub collections: Vec<CollectionCard>,
    /// Comparison tabs and their product cards
    pub comparison: ComparisonSection,
    /// Pre-computed quiz steps and result panels
    pub quiz: QuizSection,
    /// Product grid (possibly filtered by a collection)
    pub products: ProductGrid,
}

/// A catalog collection card.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CollectionCard {
    /// Collection identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Optional blurb
    pub description: Option<String>,
    /// Optional cover image URL
    pub image: Option<String>,
    /// Link to the filtered product listing
    pub href: String,
}

/// Comparison tool: one tab per product category.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ComparisonSection {
    /// Identifier of the tab shown on load (e.g. `"pillows"`)
    pub active: String,
    /// Tabs in display order
    pub tabs: Vec<ComparisonTab>,
}

/// A single comparison tab and the cards it shows.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ComparisonTab {
    /// Stable identifier used by the tab switcher
    pub id: String,
    /// Button label
    pub label: String,
    /// Cards rendered when this tab is active
    pub products: Vec<ComparisonCard>,
}

/// Side-by-side comparison card.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ComparisonCard {
    pub name: String,
    pub image: String,
    pub price: String,
    pub support: String,
    pub cooling: String,
    pub material: String,
    pub best_for: String,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    /// "View Details" target
    pub link: String,
}

/// Icon shown next to a quiz question.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum QuizIcon {
    #[default]
    Bed,
    Thermometer,
    Moon,
}

/// The quiz: every question step plus every possible result panel.
///
/// Results are keyed by the chosen option values joined with `-` in
/// question order (e.g. `"side-hot-pain"`), which is exactly what the
/// page script assembles from the clicked options.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct QuizSection {
    /// Questions in the order they are asked
    pub questions: Vec<QuizQuestion>,
    /// One panel per answer combination
    pub results: Vec<QuizResult>,
    /// Delay between a click and the next step, in milliseconds
    pub transition_ms: u64,
}

/// One quiz step.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuizQuestion {
    /// Question identifier (`position`, `temperature`, `concerns`)
    pub id: String,
    /// Prompt text
    pub prompt: String,
    pub icon: QuizIcon,
    /// `(value, label)` pairs
    pub options: Vec<QuizOption>,
}

/// A fixed-choice answer.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuizOption {
    pub value: String,
    pub label: String,
}

/// A pre-computed recommendation panel.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuizResult {
    /// Answer key, see [`QuizSection`]
    pub key: String,
    pub title: String,
    pub description: String,
    pub products: Vec<String>,
}

/// Product grid state.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ProductGrid {
    /// "All Products" or "Products from ..."
    pub heading: String,
    /// Present when a collection filter is applied
    pub show_all_href: Option<String>,
    /// Render skeleton cards instead of products
    pub loading: bool,
    pub products: Vec<ProductCard>,
}

/// Catalog product card.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductCard {
    pub id: String,
    pub title: String,
    /// Product detail link
    pub href: String,
    pub image: Option<String>,
    /// Formatted price
    pub price: String,
    /// Formatted "was" price when discounted
    pub compare_at_price: Option<String>,
}

/// Blog listing page.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct BlogPage {
    pub chrome: Chrome,
    /// Render skeleton cards instead of posts
    pub loading: bool,
    pub posts: Vec<BlogCard>,
}

/// Blog listing card.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlogCard {
    pub title: String,
    /// `/blog/{slug}`
    pub href: String,
    /// Pre-formatted publication date
    pub date: Option<String>,
    pub excerpt: Option<String>,
    /// First featured image
    pub image: Option<String>,
}

/// A single blog post page.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PostPage {
    pub chrome: Chrome,
    pub title: String,
    pub date: Option<String>,
    pub image: Option<String>,
    pub excerpt: Option<String>,
    /// Body split into paragraphs
    pub paragraphs: Vec<String>,
}
