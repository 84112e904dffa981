//! "Shop by Category" collection cards

use leptos::prelude::*;
use crate::types::CollectionCard;

/// Collection grid. Renders nothing while loading or when there are no
/// collections.
#[component]
#[allow(clippy::unit_arg, clippy::unused_unit)]
pub fn CollectionsSection(collections: Vec<CollectionCard>, loading: bool) -> impl IntoView {
    if loading || collections.is_empty() {
        return view! {}.into_any();
    }

    view! {
        <section id="collections" class="collections">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Shop by Category"</h2>
                    <p class="section-description">"Curated collections designed for your best sleep"</p>
                </div>
                <div class="collection-grid">
                    {collections.into_iter().map(|collection| {
                        view! {
                            <article class="collection-card" data-collection-id=collection.id.clone()>
                                {collection.image.map(|src| view! {
                                    <img class="collection-image" src=src alt=collection.name.clone() />
                                })}
                                <div class="collection-body">
                                    <h3>{collection.name.clone()}</h3>
                                    {collection.description.map(|text| view! {
                                        <p class="muted">{text}</p>
                                    })}
                                    <a class="btn btn-outline" href=collection.href>"View Products"</a>
                                </div>
                            </article>
                        }
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }.into_any()
}
