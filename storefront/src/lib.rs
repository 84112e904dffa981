//! # storefront-leptos
//!
//! Leptos SSR renderer for the Sleepwell storefront.
//!
//! Pages are plain view models (see [`types`]) rendered to complete HTML
//! documents. There is no hydration and no reactive runtime: the only
//! client-side code is a small inline script that toggles panels which were
//! already rendered here (comparison tabs, quiz steps and results).
//!
//! ## Quick Start
//!
//! ```rust
//! use storefront_leptos::{render_blog, types::BlogPage};
//!
//! let html = render_blog(&BlogPage::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("No articles available at this time."));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - view models for every page and section
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS and CSP constants
//!
//! ## Leptos 0.8 SSR
//!
//! ```rust,ignore
//! use leptos::tachys::view::RenderHtml;
//!
//! let view = view! { <MyComponent /> };
//! let html: String = view.to_html();
//! ```

#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod styles;
pub mod types;

use components::{BlogListing, HomeSections, PostArticle, StoreDocument};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use types::{BlogPage, HomePage, PostPage};

/// Render the homepage.
///
/// # Example
///
/// ```rust
/// use storefront_leptos::{render_home, types::HomePage};
///
/// let html = render_home(&HomePage::default());
/// assert!(html.contains("Wake Refreshed!!"));
/// ```
pub fn render_home(page: &HomePage) -> String {
    let page = page.clone();
    let chrome = page.chrome.clone();
    let doc = view! {
        <StoreDocument chrome=chrome title="">
            <HomeSections page=page />
        </StoreDocument>
    };
    finish(doc.to_html())
}

/// Render the blog listing page.
pub fn render_blog(page: &BlogPage) -> String {
    let BlogPage {
        chrome,
        loading,
        posts,
    } = page.clone();
    let doc = view! {
        <StoreDocument chrome=chrome title="Blog">
            <BlogListing posts=posts loading=loading />
        </StoreDocument>
    };
    finish(doc.to_html())
}

/// Render a single blog article page.
pub fn render_post(page: &PostPage) -> String {
    let page = page.clone();
    let chrome = page.chrome.clone();
    let title = page.title.clone();
    let doc = view! {
        <StoreDocument chrome=chrome title=title>
            <PostArticle page=page />
        </StoreDocument>
    };
    finish(doc.to_html())
}

// Leptos doesn't include DOCTYPE, so we add it
fn finish(html: String) -> String {
    format!("<!DOCTYPE html>\n{}", html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use types::*;

    fn chrome() -> Chrome {
        Chrome {
            store_name: "Sleepwell".into(),
            newsletter_action: "https://lists.example.com/subscribe".into(),
        }
    }

    fn card(name: &str) -> ComparisonCard {
        ComparisonCard {
            name: name.into(),
            image: format!("https://img.example.com/{}.jpg", name),
            price: "$79.99".into(),
            support: "High".into(),
            cooling: "Medium".into(),
            material: "Memory Foam".into(),
            best_for: "All sleepers".into(),
            pros: vec!["Adaptive support".into()],
            cons: vec!["Heavier".into()],
            link: "/products/x".into(),
        }
    }

    fn home() -> HomePage {
        HomePage {
            chrome: chrome(),
            comparison: ComparisonSection {
                active: "pillows".into(),
                tabs: vec![
                    ComparisonTab {
                        id: "pillows".into(),
                        label: "Pillows".into(),
                        products: vec![card("Cloud Memory Foam")],
                    },
                    ComparisonTab {
                        id: "toppers".into(),
                        label: "Mattress Toppers".into(),
                        products: vec![card("Cooling Gel Topper")],
                    },
                ],
            },
            quiz: QuizSection {
                questions: vec![QuizQuestion {
                    id: "temperature".into(),
                    prompt: "How do you sleep temperature-wise?".into(),
                    icon: QuizIcon::Thermometer,
                    options: vec![QuizOption {
                        value: "hot".into(),
                        label: "I sleep hot".into(),
                    }],
                }],
                results: vec![QuizResult {
                    key: "hot".into(),
                    title: "Stay Cool All Night".into(),
                    description: "Cooling gel products.".into(),
                    products: vec!["CoolBreeze Gel Pillow".into()],
                }],
                transition_ms: 300,
            },
            products: ProductGrid {
                heading: "All Products".into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn renders_home_sections_in_order() {
        let html = render_home(&home());

        assert!(html.starts_with("<!DOCTYPE html>"));
        let order = [
            "class=\"hero\"",
            "id=\"compare\"",
            "id=\"sleep-quiz\"",
            "id=\"products\"",
            "Ready to Transform Your Sleep?",
            "id=\"newsletter\"",
        ];
        let positions: Vec<usize> = order
            .iter()
            .map(|needle| html.find(needle).unwrap_or_else(|| panic!("missing {needle}")))
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn hides_collections_when_empty_or_loading() {
        let mut page = home();
        assert!(!render_home(&page).contains("Shop by Category"));

        page.collections = vec![CollectionCard {
            id: "c1".into(),
            name: "Pillows".into(),
            href: "/collections/c1/".into(),
            ..Default::default()
        }];
        page.loading_collections = true;
        assert!(!render_home(&page).contains("Shop by Category"));

        page.loading_collections = false;
        let html = render_home(&page);
        assert!(html.contains("Shop by Category"));
        assert!(html.contains("/collections/c1/"));
    }

    #[test]
    fn only_active_comparison_panel_is_marked_active() {
        let html = render_home(&home());
        assert!(html.contains("class=\"compare-panel active\" data-compare-panel=\"pillows\""));
        assert!(html.contains("class=\"compare-panel\" data-compare-panel=\"toppers\""));
        assert!(html.contains("Cloud Memory Foam"));
        assert!(html.contains("View Details"));
    }

    #[test]
    fn quiz_renders_steps_and_results() {
        let html = render_home(&home());
        assert!(html.contains("data-transition-ms=\"300\""));
        assert!(html.contains("1 of 1"));
        assert!(html.contains("data-answer=\"hot\""));
        assert!(html.contains("data-quiz-result=\"hot\""));
        assert!(html.contains("Stay Cool All Night"));
        assert!(html.contains("Retake Quiz"));
    }

    #[test]
    fn product_grid_states() {
        let mut page = home();
        assert!(render_home(&page).contains("No products available."));

        page.products.loading = true;
        let html = render_home(&page);
        assert_eq!(html.matches("skeleton tall").count(), 8);

        page.products = ProductGrid {
            heading: "Products from Pillows".into(),
            show_all_href: Some("/#products".into()),
            loading: false,
            products: vec![ProductCard {
                id: "p1".into(),
                title: "Cervical Support Pillow".into(),
                href: "/products/cervical-support-pillow".into(),
                price: "$94.99".into(),
                compare_at_price: Some("$119.99".into()),
                ..Default::default()
            }],
        };
        let html = render_home(&page);
        assert!(html.contains("Products from Pillows"));
        assert!(html.contains("See All Products"));
        assert!(html.contains("$119.99"));
    }

    #[test]
    fn renders_blog_placeholder_when_empty() {
        let page = BlogPage {
            chrome: chrome(),
            ..Default::default()
        };
        let html = render_blog(&page);
        assert!(html.contains("No articles available at this time."));
        assert!(html.contains("<title>Blog | Sleepwell</title>"));
    }

    #[test]
    fn renders_blog_cards() {
        let page = BlogPage {
            chrome: chrome(),
            loading: false,
            posts: vec![BlogCard {
                title: "Pillow loft explained".into(),
                href: "/blog/pillow-loft".into(),
                date: Some("3 de marzo de 2025".into()),
                excerpt: Some("How high is high enough?".into()),
                image: None,
            }],
        };
        let html = render_blog(&page);
        assert!(html.contains("href=\"/blog/pillow-loft\""));
        assert!(html.contains("3 de marzo de 2025"));
        assert!(html.contains("Read more"));
        assert!(!html.contains("blog-cover"));
    }

    #[test]
    fn renders_post_page() {
        let page = PostPage {
            chrome: chrome(),
            title: "Pillow loft explained".into(),
            paragraphs: vec!["First.".into(), "Second.".into()],
            ..Default::default()
        };
        let html = render_post(&page);
        assert!(html.contains("<title>Pillow loft explained | Sleepwell</title>"));
        assert!(html.contains("<p>First.</p>"));
        assert!(html.contains("<p>Second.</p>"));
    }
}
