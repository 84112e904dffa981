use std::cmp::Reverse;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::ContentSource;
use crate::catalog::{Collection, Product, null_as_default};
use crate::content::{RawContent, parse_timestamp};
use crate::error::{Result, StoreError};

/// Snapshot of the three tables the storefront reads.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Fixture {
    #[serde(deserialize_with = "null_as_default")]
    pub content: Vec<RawContent>,
    #[serde(deserialize_with = "null_as_default")]
    pub products: Vec<Product>,
    #[serde(deserialize_with = "null_as_default")]
    pub collections: Vec<Collection>,
}

/// Serves storefront data from a JSON file.
///
/// Answers the same queries as the REST backend: published content and
/// active products/collections of one store, newest first. Without a store
/// id every store's rows are served.
#[derive(Clone, Debug)]
pub struct FixtureBackend {
    path: PathBuf,
    store_id: Option<String>,
}

/// Sort key for `created_at desc`; rows without a parseable timestamp sort last.
fn newest_first(created_at: Option<&str>) -> Reverse<Option<DateTime<Utc>>> {
    Reverse(created_at.and_then(parse_timestamp))
}

impl FixtureBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            store_id: None,
        }
    }

    /// Only serve rows belonging to `store_id`.
    pub fn for_store(mut self, store_id: impl Into<String>) -> Self {
        self.store_id = Some(store_id.into());
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn in_store(&self, store_id: &str) -> bool {
        self.store_id.as_deref().is_none_or(|id| id == store_id)
    }

    async fn load(&self) -> Result<Fixture> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| StoreError::io("read fixture", &self.path, e))?;
        let fixture: Fixture = serde_json::from_str(&raw).map_err(|source| StoreError::Decode {
            what: format!("fixture {}", self.path.display()),
            source,
        })?;
        debug!(
            path = %self.path.display(),
            content = fixture.content.len(),
            products = fixture.products.len(),
            collections = fixture.collections.len(),
            "fixture loaded"
        );
        Ok(fixture)
    }
}

impl ContentSource for FixtureBackend {
    async fn fetch_published_content(&self) -> Result<Vec<RawContent>> {
        let mut rows: Vec<RawContent> = self
            .load()
            .await?
            .content
            .into_iter()
            .filter(|row| row.status.as_deref() == Some("published"))
            .filter(|row| self.in_store(row.store_id.as_deref().unwrap_or_default()))
            .collect();
        rows.sort_by_key(|row| newest_first(row.created_at.as_deref()));
        Ok(rows)
    }

    async fn fetch_products(&self) -> Result<Vec<Product>> {
        let mut products: Vec<Product> = self
            .load()
            .await?
            .products
            .into_iter()
            .filter(|p| p.status == "active" && self.in_store(&p.store_id))
            .collect();
        products.sort_by_key(|p| newest_first(p.created_at.as_deref()));
        Ok(products)
    }

    async fn fetch_collections(&self) -> Result<Vec<Collection>> {
        Ok(self
            .load()
            .await?
            .collections
            .into_iter()
            .filter(|c| c.status == "active" && self.in_store(&c.store_id))
            .collect())
    }
}
