//! Fetch everything a build needs, degrading failures to empty results.
//!
//! A failed fetch is logged at `error` level and the affected section
//! renders its empty-state placeholder instead.

use std::collections::HashSet;

use tracing::{error, info, warn};

use crate::backend::ContentSource;
use crate::catalog::{CatalogView, is_path_segment};
use crate::content::{BlogPost, RawContent};

/// Everything rendered into the static site.
#[derive(Clone, Debug, Default)]
pub struct StoreData {
    pub posts: Vec<BlogPost>,
    pub catalog: CatalogView,
}

/// Validate raw rows, skipping invalid ones and duplicate slugs.
pub fn validate_posts(rows: Vec<RawContent>) -> Vec<BlogPost> {
    let mut seen = HashSet::new();
    let mut posts = Vec::with_capacity(rows.len());
    for row in rows {
        match row.validate() {
            Ok(post) => {
                if seen.insert(post.slug.clone()) {
                    posts.push(post);
                } else {
                    warn!(id = %post.id, slug = %post.slug, "skipping post with duplicate slug");
                }
            }
            Err(e) => warn!("skipping content record: {e}"),
        }
    }
    posts
}

/// Published blog posts, or none if the fetch failed.
pub async fn load_posts<S: ContentSource>(source: &S) -> Vec<BlogPost> {
    match source.fetch_published_content().await {
        Ok(rows) => {
            let total = rows.len();
            let posts = validate_posts(rows);
            info!(posts = posts.len(), skipped = total - posts.len(), "blog content loaded");
            posts
        }
        Err(e) => {
            error!("Error fetching blogs: {e}");
            Vec::new()
        }
    }
}

/// Products and collections, fetched concurrently.
pub async fn load_catalog<S: ContentSource>(source: &S) -> CatalogView {
    let (products, collections) = futures::join!(source.fetch_products(), source.fetch_collections());

    let products = products.unwrap_or_else(|e| {
        error!("Error fetching products: {e}");
        Vec::new()
    });
    let mut collections = collections.unwrap_or_else(|e| {
        error!("Error fetching collections: {e}");
        Vec::new()
    });
    collections.retain(|c| {
        let usable = is_path_segment(&c.id);
        if !usable {
            warn!(id = %c.id, name = %c.name, "skipping collection with unusable id");
        }
        usable
    });
    info!(products = products.len(), collections = collections.len(), "catalog loaded");
    CatalogView::new(products, collections)
}

/// Catalog first, then content.
pub async fn load_store<S: ContentSource>(source: &S) -> StoreData {
    let catalog = load_catalog(source).await;
    let posts = load_posts(source).await;
    StoreData { posts, catalog }
}
