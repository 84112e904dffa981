//! Static site writer.
//!
//! Layout under the output directory:
//!
//! ```text
//! index.html
//! collections/{id}/index.html
//! blog/index.html
//! blog/{slug}/index.html
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use storefront_leptos::{render_blog, render_home, render_post};
use tracing::{info, warn};

use crate::catalog::is_path_segment;
use crate::config::StoreConfig;
use crate::error::{Result, StoreError};
use crate::loader::StoreData;
use crate::pages::{blog_page, home_page, post_page};

/// What a build produced.
#[derive(Clone, Debug, Default, Serialize)]
pub struct BuildReport {
    pub out_dir: PathBuf,
    /// Written files, relative to `out_dir`
    pub pages: Vec<PathBuf>,
    pub products: usize,
    pub collections: usize,
    pub posts: usize,
}

struct SiteWriter<'a> {
    root: &'a Path,
    written: Vec<PathBuf>,
}

impl SiteWriter<'_> {
    fn write(&mut self, rel: PathBuf, html: String) -> Result<()> {
        let path = self.root.join(&rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| StoreError::io("create directory", parent, e))?;
        }
        fs::write(&path, html).map_err(|e| StoreError::io("write page", &path, e))?;
        self.written.push(rel);
        Ok(())
    }
}

/// Render every page for `data` into `out_dir`.
pub fn build_site(config: &StoreConfig, data: &StoreData, out_dir: &Path) -> Result<BuildReport> {
    let mut writer = SiteWriter {
        root: out_dir,
        written: Vec::new(),
    };

    let mut catalog = data.catalog.clone();
    catalog.show_all();
    writer.write(PathBuf::from("index.html"), render_home(&home_page(config, &catalog)))?;

    for collection in &data.catalog.collections {
        if !is_path_segment(&collection.id) {
            warn!(id = %collection.id, "skipping collection page with unusable id");
            continue;
        }
        catalog.select_collection(collection.id.clone());
        let rel = PathBuf::from("collections").join(&collection.id).join("index.html");
        writer.write(rel, render_home(&home_page(config, &catalog)))?;
    }

    writer.write(
        PathBuf::from("blog").join("index.html"),
        render_blog(&blog_page(config, &data.posts)),
    )?;
    for post in &data.posts {
        let rel = PathBuf::from("blog").join(&post.slug).join("index.html");
        writer.write(rel, render_post(&post_page(config, post)))?;
    }

    info!(
        out_dir = %out_dir.display(),
        pages = writer.written.len(),
        "site written"
    );
    Ok(BuildReport {
        out_dir: out_dir.to_path_buf(),
        pages: writer.written,
        products: data.catalog.products.len(),
        collections: data.catalog.collections.len(),
        posts: data.posts.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogView, Collection, Product};
    use crate::content::RawContent;
    use tempfile::TempDir;

    fn data() -> StoreData {
        let post = RawContent {
            id: Some("b1".into()),
            title: Some("Sleep hygiene".into()),
            slug: Some("sleep-hygiene".into()),
            content: Some("Dim the lights.\n\nKeep it cool.".into()),
            ..Default::default()
        }
        .validate()
        .unwrap();
        StoreData {
            posts: vec![post],
            catalog: CatalogView::new(
                vec![
                    Product {
                        id: "p1".into(),
                        title: "Cloud Memory Foam Pillow".into(),
                        slug: "cloud-memory-foam-pillow".into(),
                        price: 79.99,
                        collection_id: Some("pillows".into()),
                        ..Default::default()
                    },
                    Product {
                        id: "p2".into(),
                        title: "Lavender Eye Mask".into(),
                        slug: "lavender-eye-mask".into(),
                        price: 149.0,
                        ..Default::default()
                    },
                ],
                vec![
                    Collection {
                        id: "pillows".into(),
                        name: "Pillows".into(),
                        ..Default::default()
                    },
                    Collection {
                        id: "../escape".into(),
                        name: "Bad".into(),
                        ..Default::default()
                    },
                    Collection {
                        id: "winter sale?".into(),
                        name: "Winter".into(),
                        ..Default::default()
                    },
                ],
            ),
        }
    }

    #[test]
    fn writes_every_page() {
        let temp = TempDir::new().expect("temp dir");
        let report = build_site(&StoreConfig::default(), &data(), temp.path()).unwrap();

        let pages: Vec<String> = report
            .pages
            .iter()
            .map(|p| p.to_string_lossy().replace('\\', "/"))
            .collect();
        assert_eq!(
            pages,
            vec![
                "index.html",
                "collections/pillows/index.html",
                "blog/index.html",
                "blog/sleep-hygiene/index.html",
            ]
        );

        let home = fs::read_to_string(temp.path().join("index.html")).unwrap();
        assert!(home.contains("All Products"));
        assert!(home.contains("Lavender Eye Mask"));

        let filtered = fs::read_to_string(temp.path().join("collections/pillows/index.html")).unwrap();
        assert!(filtered.contains("Products from Pillows"));
        assert!(filtered.contains("See All Products"));
        assert!(!filtered.contains("Lavender Eye Mask"));

        let post = fs::read_to_string(temp.path().join("blog/sleep-hygiene/index.html")).unwrap();
        assert!(post.contains("<p>Keep it cool.</p>"));
    }

    #[test]
    fn empty_store_still_renders_placeholders() {
        let temp = TempDir::new().expect("temp dir");
        let report = build_site(&StoreConfig::default(), &StoreData::default(), temp.path()).unwrap();
        assert_eq!(report.pages.len(), 2);

        let blog = fs::read_to_string(temp.path().join("blog/index.html")).unwrap();
        assert!(blog.contains("No articles available at this time."));
        let home = fs::read_to_string(temp.path().join("index.html")).unwrap();
        assert!(home.contains("No products available."));
        assert!(!home.contains("Shop by Category"));
    }
}
