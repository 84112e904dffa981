//! Domain data to `storefront-leptos` view models.

use std::time::Duration;

use storefront_leptos::types::{
    BlogCard, BlogPage, Chrome, CollectionCard, ComparisonCard, ComparisonSection, ComparisonTab,
    HomePage, PostPage, ProductCard, ProductGrid, QuizIcon, QuizOption, QuizQuestion, QuizResult,
    QuizSection,
};

use crate::catalog::{CatalogView, Collection, Product, format_price};
use crate::comparison::{ComparisonProduct, ComparisonTable, ComparisonView, comparison_products};
use crate::config::StoreConfig;
use crate::content::{BlogPost, Locale};
use crate::quiz::{QUESTIONS, QuestionIcon, all_recommendations};

/// Header/footer data from configuration.
pub fn chrome(config: &StoreConfig) -> Chrome {
    Chrome {
        store_name: config.store.name.clone(),
        newsletter_action: config.site.newsletter_action.clone(),
    }
}

fn collection_card(collection: &Collection) -> CollectionCard {
    CollectionCard {
        id: collection.id.clone(),
        name: collection.name.clone(),
        description: collection.description.clone(),
        image: collection.image.clone(),
        href: collection.href(),
    }
}

fn product_card(product: &Product) -> ProductCard {
    ProductCard {
        id: product.id.clone(),
        title: product.title.clone(),
        href: product.href(),
        image: product.cover().map(str::to_string),
        price: format_price(product.price),
        compare_at_price: product.discounted_from().map(format_price),
    }
}

fn comparison_card(product: &ComparisonProduct) -> ComparisonCard {
    ComparisonCard {
        name: product.name.to_string(),
        image: product.image_url(),
        price: product.price.to_string(),
        support: product.features.support.to_string(),
        cooling: product.features.cooling.to_string(),
        material: product.features.material.to_string(),
        best_for: product.features.best_for.to_string(),
        pros: product.pros.iter().map(|s| s.to_string()).collect(),
        cons: product.cons.iter().map(|s| s.to_string()).collect(),
        link: product.link.to_string(),
    }
}

/// Both comparison lists, with `table`'s view marked active.
pub fn comparison_section(table: &ComparisonTable) -> ComparisonSection {
    ComparisonSection {
        active: table.active().as_str().to_string(),
        tabs: ComparisonView::ALL
            .iter()
            .map(|view| ComparisonTab {
                id: view.as_str().to_string(),
                label: view.label().to_string(),
                products: comparison_products(*view).iter().map(comparison_card).collect(),
            })
            .collect(),
    }
}

fn quiz_icon(icon: QuestionIcon) -> QuizIcon {
    match icon {
        QuestionIcon::Bed => QuizIcon::Bed,
        QuestionIcon::Thermometer => QuizIcon::Thermometer,
        QuestionIcon::Moon => QuizIcon::Moon,
    }
}

/// Every quiz step plus one result panel per answer combination.
pub fn quiz_section(transition: Duration) -> QuizSection {
    let questions = QUESTIONS
        .iter()
        .map(|question| QuizQuestion {
            id: question.id.as_str().to_string(),
            prompt: question.prompt.to_string(),
            icon: quiz_icon(question.icon),
            options: question
                .id
                .options()
                .into_iter()
                .map(|(value, label)| QuizOption {
                    value: value.to_string(),
                    label: label.to_string(),
                })
                .collect(),
        })
        .collect();

    let results = all_recommendations()
        .into_iter()
        .map(|(answers, rec)| QuizResult {
            key: answers.key(),
            title: rec.title.to_string(),
            description: rec.description.to_string(),
            products: rec.products.iter().map(|s| s.to_string()).collect(),
        })
        .collect();

    QuizSection {
        questions,
        results,
        transition_ms: transition.as_millis() as u64,
    }
}

/// Product grid for the catalog's current selection.
pub fn product_grid(catalog: &CatalogView) -> ProductGrid {
    ProductGrid {
        heading: catalog.heading(),
        show_all_href: catalog
            .selected_collection()
            .map(|_| "/#products".to_string()),
        loading: catalog.loading_products,
        products: catalog.filtered_products().into_iter().map(product_card).collect(),
    }
}

/// The homepage for `catalog`, optionally filtered to one collection.
pub fn home_page(config: &StoreConfig, catalog: &CatalogView) -> HomePage {
    HomePage {
        chrome: chrome(config),
        loading_collections: catalog.loading_collections,
        collections: if catalog.shows_collections() {
            catalog.collections.iter().map(collection_card).collect()
        } else {
            Vec::new()
        },
        comparison: comparison_section(&ComparisonTable::default()),
        quiz: quiz_section(config.quiz_delay()),
        products: product_grid(catalog),
    }
}

fn blog_card(post: &BlogPost, locale: Locale) -> BlogCard {
    BlogCard {
        title: post.title.clone(),
        href: post.href(),
        date: post.created_at.as_ref().map(|d| locale.long_date(d)),
        excerpt: post.excerpt.clone(),
        image: post.cover().map(str::to_string),
    }
}

pub fn blog_page(config: &StoreConfig, posts: &[BlogPost]) -> BlogPage {
    BlogPage {
        chrome: chrome(config),
        loading: false,
        posts: posts.iter().map(|p| blog_card(p, config.site.locale)).collect(),
    }
}

pub fn post_page(config: &StoreConfig, post: &BlogPost) -> PostPage {
    PostPage {
        chrome: chrome(config),
        title: post.title.clone(),
        date: post.created_at.as_ref().map(|d| config.site.locale.long_date(d)),
        image: post.cover().map(str::to_string),
        excerpt: post.excerpt.clone(),
        paragraphs: post.paragraphs(),
    }
}
