use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::ContentSource;
use crate::catalog::{Collection, Product};
use crate::content::RawContent;
use crate::error::{Result, StoreError};

/// PostgREST client for the hosted store database.
#[derive(Clone, Debug)]
pub struct RestBackend {
    client: Client,
    base_url: String,
    anon_key: String,
    store_id: String,
}

impl RestBackend {
    pub fn new(
        base_url: impl Into<String>,
        anon_key: impl Into<String>,
        store_id: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            anon_key: anon_key.into(),
            store_id: store_id.into(),
        })
    }

    pub fn store_id(&self) -> &str {
        &self.store_id
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    async fn select<T: DeserializeOwned>(&self, table: &str, filters: &[(&str, String)]) -> Result<Vec<T>> {
        let url = self.table_url(table);
        let mut query: Vec<(&str, String)> = vec![("select", "*".to_string())];
        query.extend(filters.iter().cloned());

        debug!(%url, ?query, "backend select");
        let response = self
            .client
            .get(&url)
            .query(&query)
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Status {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }

        let body = response.text().await?;
        let rows: Vec<T> = serde_json::from_str(&body).map_err(|source| StoreError::Decode {
            what: format!("{table} response"),
            source,
        })?;
        debug!(table, rows = rows.len(), "backend select done");
        Ok(rows)
    }

    fn store_filter(&self) -> (&'static str, String) {
        ("store_id", format!("eq.{}", self.store_id))
    }
}

impl ContentSource for RestBackend {
    async fn fetch_published_content(&self) -> Result<Vec<RawContent>> {
        self.select(
            "content",
            &[
                ("status", "eq.published".to_string()),
                self.store_filter(),
                ("order", "created_at.desc".to_string()),
            ],
        )
        .await
    }

    async fn fetch_products(&self) -> Result<Vec<Product>> {
        self.select(
            "products",
            &[
                self.store_filter(),
                ("status", "eq.active".to_string()),
                ("order", "created_at.desc".to_string()),
            ],
        )
        .await
    }

    async fn fetch_collections(&self) -> Result<Vec<Collection>> {
        self.select(
            "collections",
            &[self.store_filter(), ("status", "eq.active".to_string())],
        )
        .await
    }
}
