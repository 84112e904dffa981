//! Render a blog listing page with two articles.
//!
//! Run with: `cargo run --example sample_blog`

use storefront_leptos::render_blog;
use storefront_leptos::types::{BlogCard, BlogPage, Chrome};

fn main() {
    let page = BlogPage {
        chrome: Chrome {
            store_name: "Sleepwell".into(),
            newsletter_action: "#".into(),
        },
        loading: false,
        posts: vec![
            BlogCard {
                title: "How to choose pillow loft".into(),
                href: "/blog/pillow-loft".into(),
                date: Some("19 de octubre de 2026".into()),
                excerpt: Some("Side sleepers need more height than you think.".into()),
                image: None,
            },
            BlogCard {
                title: "Cooling down a hot bedroom".into(),
                href: "/blog/cool-bedroom".into(),
                date: Some("3 de marzo de 2025".into()),
                ..Default::default()
            },
        ],
    };

    let html = render_blog(&page);

    let output_path = "sample_blog.html";
    std::fs::write(output_path, &html).expect("Failed to write page");

    println!("Page written to: {}", output_path);
    println!("HTML size: {} bytes", html.len());
}
