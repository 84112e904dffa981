//! # sleepwell
//!
//! **Sleepwell storefront** - the sleep-products shop rendered to a static
//! site, plus a terminal front end for the sleep setup quiz.
//!
//! ## Features
//!
//! - **Sleep Quiz** - three questions, a fixed rule table, at most four products
//! - **Product Comparison** - pillows and mattress toppers side by side
//! - **Catalog** - products and collections from the hosted store database
//! - **Blog** - published articles with localized dates
//!
//! ## Quick Start (Library Usage)
//!
//! ```rust
//! use sleepwell::quiz::{CompleteAnswers, Concern, Position, Temperature, recommend};
//!
//! let rec = recommend(&CompleteAnswers {
//!     position: Position::Stomach,
//!     temperature: Temperature::Cold,
//!     concerns: Concern::Insomnia,
//! });
//! assert_eq!(rec.title, "Warm & Cozy Setup");
//! assert_eq!(rec.products.len(), 3);
//! ```
//!
//! ## Building the Site
//!
//! ```rust,no_run
//! use sleepwell::{backend::FixtureBackend, config::StoreConfig, loader, site};
//! use std::path::Path;
//!
//! # async fn demo() -> sleepwell::error::Result<()> {
//! let config = StoreConfig::default();
//! let data = loader::load_store(&FixtureBackend::new("store.json")).await;
//! site::build_site(&config, &data, Path::new("dist"))?;
//! # Ok(())
//! # }
//! ```
//!
//! ## CLI Usage
//!
//! ```bash
//! sleepwell build --out dist           # Fetch and render the site
//! sleepwell quiz                       # Interactive quiz
//! sleepwell recommend --position side --temperature hot --concerns pain
//! sleepwell compare --view toppers
//! sleepwell posts --json
//! ```

// ============================================================================
// Domain
// ============================================================================

/// Sleep setup quiz: questions, answers, rule table and flow controller.
pub mod quiz;

/// Static pillow/topper comparison data and the tab toggle.
pub mod comparison;

/// Products, collections and the filtered catalog view.
pub mod catalog;

/// Blog content records and localized dates.
pub mod content;

// ============================================================================
// Data & Configuration
// ============================================================================

pub mod backend;
pub mod config;
pub mod error;
pub mod loader;

// ============================================================================
// Output
// ============================================================================

/// Domain data to page view models.
pub mod pages;

pub mod site;

// ============================================================================
// CLI
// ============================================================================

pub mod cli;
pub mod progress;

// Re-export commonly used types at crate root for convenience
pub use catalog::{CatalogView, Collection, Product};
pub use comparison::{ComparisonTable, ComparisonView};
pub use config::StoreConfig;
pub use content::{BlogPost, Locale};
pub use error::StoreError;
pub use quiz::{QuizController, Recommendation};
