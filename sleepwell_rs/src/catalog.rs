//! Products, collections and the homepage catalog view.

use serde::{Deserialize, Deserializer, Serialize};

/// Treat an explicit JSON `null` like a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Whether `s` can be both a directory name and a URL path segment unchanged:
/// letters, digits and `-_.~`, excluding `.` and `..`.
pub(crate) fn is_path_segment(s: &str) -> bool {
    !s.is_empty()
        && s != "."
        && s != ".."
        && s.chars().all(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | '.' | '~'))
}

/// A product record as returned by the backend.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub price: f64,
    pub compare_at_price: Option<f64>,
    #[serde(deserialize_with = "null_as_default")]
    pub images: Vec<String>,
    pub collection_id: Option<String>,
    pub status: String,
    pub store_id: String,
    pub created_at: Option<String>,
}

impl Product {
    /// Detail page path.
    pub fn href(&self) -> String {
        format!("/products/{}", self.slug)
    }

    pub fn cover(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// The "was" price, only when it is above the current price.
    pub fn discounted_from(&self) -> Option<f64> {
        self.compare_at_price.filter(|was| *was > self.price)
    }
}

/// A collection record as returned by the backend.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Collection {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub status: String,
    pub store_id: String,
}

impl Collection {
    /// Static page listing this collection's products.
    pub fn href(&self) -> String {
        format!("/collections/{}/", self.id)
    }
}

/// Format a price in dollars, e.g. `$79.99`.
pub fn format_price(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Homepage catalog state: what was fetched, what is still loading and
/// which collection (if any) filters the product grid.
#[derive(Clone, Debug, Default)]
pub struct CatalogView {
    pub products: Vec<Product>,
    pub collections: Vec<Collection>,
    pub loading_products: bool,
    pub loading_collections: bool,
    selected: Option<String>,
}

impl CatalogView {
    /// A loaded view over the given records.
    pub fn new(products: Vec<Product>, collections: Vec<Collection>) -> Self {
        Self {
            products,
            collections,
            ..Default::default()
        }
    }

    /// A view whose fetches have not finished yet.
    pub fn loading() -> Self {
        Self {
            loading_products: true,
            loading_collections: true,
            ..Default::default()
        }
    }

    pub fn selected_collection(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn select_collection(&mut self, id: impl Into<String>) {
        self.selected = Some(id.into());
    }

    pub fn show_all(&mut self) {
        self.selected = None;
    }

    /// Products matching the selected collection, or all of them.
    pub fn filtered_products(&self) -> Vec<&Product> {
        match &self.selected {
            None => self.products.iter().collect(),
            Some(id) => self
                .products
                .iter()
                .filter(|p| p.collection_id.as_deref() == Some(id.as_str()))
                .collect(),
        }
    }

    /// Product grid heading.
    pub fn heading(&self) -> String {
        match &self.selected {
            None => "All Products".to_string(),
            Some(id) => {
                let name = self
                    .collections
                    .iter()
                    .find(|c| &c.id == id)
                    .map(|c| c.name.as_str())
                    .filter(|name| !name.is_empty())
                    .unwrap_or("Collection");
                format!("Products from {}", name)
            }
        }
    }

    /// The collections section is shown only once loaded and non-empty.
    pub fn shows_collections(&self) -> bool {
        !self.loading_collections && !self.collections.is_empty()
    }
}
