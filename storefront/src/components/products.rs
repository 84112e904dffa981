//! Catalog product grid

use leptos::prelude::*;
use crate::types::{ProductCard, ProductGrid};

const SKELETON_CARDS: usize = 8;

#[component]
pub fn ProductGridSection(grid: ProductGrid) -> impl IntoView {
    let body = if grid.loading {
        view! {
            <div class="product-grid">
                {(0..SKELETON_CARDS).map(|_| view! { <div class="skeleton tall"></div> }).collect::<Vec<_>>()}
            </div>
        }.into_any()
    } else if grid.products.is_empty() {
        view! {
            <div class="empty-state">
                <p class="muted">"No products available."</p>
            </div>
        }.into_any()
    } else {
        view! {
            <div class="product-grid">
                {grid.products.into_iter().map(|product| view! { <ProductCardView product=product /> }).collect::<Vec<_>>()}
            </div>
        }.into_any()
    };

    view! {
        <section id="products" class="products">
            <div class="container">
                <div class="grid-header">
                    <h2 class="section-title">{grid.heading}</h2>
                    {grid.show_all_href.map(|href| view! {
                        <a class="btn btn-outline" href=href>"See All Products"</a>
                    })}
                </div>
                {body}
            </div>
        </section>
    }
}

#[component]
fn ProductCardView(product: ProductCard) -> impl IntoView {
    view! {
        <a class="card product-card" href=product.href data-product-id=product.id>
            <div class="card-media">
                {product.image.map(|src| view! { <img src=src alt=product.title.clone() /> })}
            </div>
            <h3 class="card-title">{product.title.clone()}</h3>
            <p class="price">
                {product.price}
                {product.compare_at_price.map(|was| view! { <s class="muted was-price">{was}</s> })}
            </p>
        </a>
    }
}
