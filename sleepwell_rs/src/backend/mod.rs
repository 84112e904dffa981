//! Where storefront data comes from.
//!
//! [`ContentSource`] is the seam between the site builder and the hosted
//! database. [`RestBackend`] talks to the PostgREST endpoint;
//! [`FixtureBackend`] reads a JSON snapshot for offline builds and tests.

mod fixture;
mod rest;

use std::future::Future;

pub use fixture::{Fixture, FixtureBackend};
pub use rest::RestBackend;

use crate::catalog::{Collection, Product};
use crate::content::RawContent;
use crate::error::Result;

/// Read-only queries the storefront issues, all scoped to one store.
pub trait ContentSource {
    /// Published content rows, newest first.
    fn fetch_published_content(&self) -> impl Future<Output = Result<Vec<RawContent>>> + Send;

    /// Active products, newest first.
    fn fetch_products(&self) -> impl Future<Output = Result<Vec<Product>>> + Send;

    /// Active collections.
    fn fetch_collections(&self) -> impl Future<Output = Result<Vec<Collection>>> + Send;
}

/// Backend chosen at runtime by the CLI.
#[derive(Debug)]
pub enum Backend {
    Rest(RestBackend),
    Fixture(FixtureBackend),
}

impl ContentSource for Backend {
    async fn fetch_published_content(&self) -> Result<Vec<RawContent>> {
        match self {
            Backend::Rest(b) => b.fetch_published_content().await,
            Backend::Fixture(b) => b.fetch_published_content().await,
        }
    }

    async fn fetch_products(&self) -> Result<Vec<Product>> {
        match self {
            Backend::Rest(b) => b.fetch_products().await,
            Backend::Fixture(b) => b.fetch_products().await,
        }
    }

    async fn fetch_collections(&self) -> Result<Vec<Collection>> {
        match self {
            Backend::Rest(b) => b.fetch_collections().await,
            Backend::Fixture(b) => b.fetch_collections().await,
        }
    }
}
