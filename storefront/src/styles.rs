//! CSS styles for storefront pages.
//!
//! One stylesheet inlined into every page, so the generated site has no
//! external CSS to serve.
//!
//! # Customization
//!
//! ```rust
//! use storefront_leptos::styles::STORE_CSS;
//!
//! let my_css = ".hero-title { color: navy; }";
//! let combined = format!("{}\n{}", STORE_CSS, my_css);
//! assert!(combined.contains(".hero-title"));
//! ```
//!
//! # Features
//!
//! - Soft night-sky palette with a dreamy gradient band
//! - Responsive grids for collections, comparison cards, products and posts
//! - `.active`-driven panels for tabs, quiz steps and quiz results

/// Complete CSS for the storefront.
pub const STORE_CSS: &str = r#"
:root {
    --background: #fbfaf8;
    --foreground: #1f2240;
    --muted: #eef0f6;
    --muted-foreground: #545454;
    --primary: #4b5bd6;
    --primary-foreground: #ffffff;
    --secondary: #e8ebfb;
    --border: #dcdfeb;
    --good: #16a34a;
    --radius: 12px;
    --container-max: 1200px;
    --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;
    --gradient-dreamy: linear-gradient(135deg, #eef0ff 0%, #f7ecff 50%, #eaf6ff 100%);
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    font-family: var(--font-sans);
    background: var(--background);
    color: var(--foreground);
    line-height: 1.6;
    margin: 0;
}

img {
    max-width: 100%;
    display: block;
}

a {
    color: inherit;
    text-decoration: none;
}

/* Layout */
.container {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 24px;
}

.container.narrow {
    max-width: 820px;
}

.center {
    text-align: center;
}

.muted {
    color: var(--muted-foreground);
}

.with-icon {
    display: flex;
    align-items: center;
    gap: 8px;
}

section {
    padding: 64px 0;
}

.band-muted {
    background: rgba(232, 235, 251, 0.3);
}

.band-dreamy {
    background: var(--gradient-dreamy);
}

.section-header {
    text-align: center;
    margin-bottom: 48px;
}

.section-title {
    font-size: 2.25rem;
    font-weight: 700;
    margin: 0 0 16px;
}

.section-description {
    font-size: 1.125rem;
    color: var(--muted-foreground);
    max-width: 640px;
    margin: 0 auto 32px;
}

/* Header / footer */
.site-header {
    position: sticky;
    top: 0;
    z-index: 50;
    background: rgba(251, 250, 248, 0.92);
    border-bottom: 1px solid var(--border);
}

.header-row {
    display: flex;
    align-items: center;
    justify-content: space-between;
    height: 64px;
}

.brand {
    font-weight: 700;
    font-size: 1.25rem;
    color: var(--primary);
}

.site-nav {
    display: flex;
    gap: 24px;
    font-size: 0.95rem;
}

.site-nav a:hover {
    color: var(--primary);
}

.site-footer {
    border-top: 1px solid var(--border);
    padding: 32px 0;
    color: var(--muted-foreground);
    font-size: 0.9rem;
}

/* Buttons */
.btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 8px;
    border-radius: 8px;
    border: 1px solid transparent;
    padding: 10px 18px;
    font: inherit;
    font-weight: 500;
    cursor: pointer;
    transition: background 0.2s, border-color 0.2s, color 0.2s;
}

.btn-lg {
    padding: 14px 28px;
    font-size: 1.1rem;
}

.btn-block {
    width: 100%;
}

.btn-primary {
    background: var(--primary);
    color: var(--primary-foreground);
}

.btn-outline,
.btn-tab {
    background: transparent;
    border-color: var(--border);
    color: var(--foreground);
}

.btn-tab.active {
    background: var(--primary);
    border-color: var(--primary);
    color: var(--primary-foreground);
}

.btn-icon {
    transition: transform 0.2s;
}

.btn:hover .btn-icon {
    transform: translateX(4px);
}

/* Hero */
.hero {
    position: relative;
    min-height: 600px;
    display: flex;
    align-items: center;
    overflow: hidden;
}

.hero-backdrop {
    position: absolute;
    inset: 0;
    background: linear-gradient(90deg, rgba(251, 250, 248, 0.95), rgba(251, 250, 248, 0.8), rgba(251, 250, 248, 0.4)), var(--gradient-dreamy);
}

.hero-content {
    position: relative;
    z-index: 1;
    max-width: var(--container-max);
}

.hero-title {
    font-size: 3.5rem;
    line-height: 1.15;
    margin: 0 0 24px;
    max-width: 640px;
}

.hero-title-accent {
    color: var(--primary);
}

.hero-description {
    font-size: 20px;
    font-weight: 300;
    color: var(--muted-foreground);
    max-width: 640px;
    margin-bottom: 32px;
}

.hero-actions,
.quiz-actions {
    display: flex;
    flex-wrap: wrap;
    gap: 16px;
}

/* Cards */
.card {
    background: #ffffff;
    border: 1px solid var(--border);
    border-radius: var(--radius);
    padding: 24px;
    transition: box-shadow 0.3s;
}

.card:hover {
    box-shadow: 0 10px 30px rgba(31, 34, 64, 0.08);
}

.card-media {
    aspect-ratio: 1 / 1;
    background: var(--muted);
    border-radius: 8px;
    overflow: hidden;
    margin-bottom: 16px;
}

.card-media img {
    width: 100%;
    height: 100%;
    object-fit: cover;
}

.card-title {
    font-size: 1.25rem;
    margin: 0 0 4px;
}

.price {
    font-size: 1.5rem;
    font-weight: 700;
    color: var(--primary);
    margin: 0 0 16px;
}

.was-price {
    font-size: 1rem;
    font-weight: 400;
    margin-left: 8px;
}

/* Collections */
.collection-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
    gap: 32px;
    max-width: 900px;
    margin: 0 auto;
}

.collection-card {
    border-radius: var(--radius);
    overflow: hidden;
    border: 1px solid var(--border);
    background: #ffffff;
}

.collection-image {
    width: 100%;
    height: 220px;
    object-fit: cover;
}

.collection-body {
    padding: 24px;
}

/* Comparison */
.tab-bar {
    display: flex;
    justify-content: center;
    gap: 16px;
    margin-bottom: 32px;
}

.compare-panel,
.quiz-step,
.quiz-stage,
.quiz-result {
    display: none;
}

.compare-panel.active,
.quiz-step.active,
.quiz-stage.active,
.quiz-result.active {
    display: block;
}

.compare-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
    gap: 24px;
}

.compare-card h4 {
    font-size: 0.9rem;
    margin: 16px 0 8px;
}

.feature-list {
    margin: 0;
    font-size: 0.9rem;
}

.feature-row {
    display: flex;
    justify-content: space-between;
}

.feature-row dd {
    margin: 0;
    font-weight: 500;
}

.bullet-list {
    font-size: 0.9rem;
    margin: 0 0 16px;
    padding-left: 18px;
}

.pros li::marker {
    color: var(--good);
}

.icon-good {
    color: var(--good);
}

.icon-accent {
    color: var(--primary);
}

/* Quiz */
.quiz-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.progress {
    width: 100%;
    height: 8px;
    border-radius: 999px;
    background: var(--muted);
    margin: 16px 0 24px;
}

.progress-fill {
    height: 8px;
    border-radius: 999px;
    background: var(--primary);
    transition: width 0.3s;
}

.quiz-prompt {
    font-size: 1.25rem;
}

.quiz-options {
    display: grid;
    gap: 12px;
}

.quiz-option {
    text-align: left;
    padding: 16px;
    border-radius: 8px;
    border: 2px solid var(--border);
    background: #ffffff;
    font: inherit;
    cursor: pointer;
}

.quiz-option:hover,
.quiz-option.selected {
    border-color: var(--primary);
}

.recommendations {
    list-style: none;
    padding: 0;
    display: grid;
    gap: 12px;
}

.recommendation {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 16px;
    border-radius: 8px;
    background: rgba(232, 235, 251, 0.5);
    font-weight: 500;
}

/* Products */
.grid-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
    margin-bottom: 32px;
}

.product-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
    gap: 24px;
}

.skeleton {
    height: 256px;
    border-radius: var(--radius);
    background: var(--muted);
    animation: pulse 1.5s ease-in-out infinite;
}

.skeleton.tall {
    height: 320px;
}

@keyframes pulse {
    50% { opacity: 0.5; }
}

.empty-state {
    text-align: center;
    padding: 48px 0;
}

/* Newsletter */
.newsletter-form {
    display: flex;
    gap: 12px;
    justify-content: center;
    flex-wrap: wrap;
}

.newsletter-form input {
    min-width: 280px;
    padding: 10px 14px;
    border-radius: 8px;
    border: 1px solid var(--border);
    font: inherit;
}

/* Blog */
.page-header {
    padding: 48px 0 0;
}

.page-title {
    font-size: 2.5rem;
    margin: 0 0 16px;
}

.blog-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(320px, 1fr));
    gap: 32px;
}

.blog-card {
    padding: 0;
    overflow: hidden;
}

.blog-cover img {
    width: 100%;
    height: 192px;
    object-fit: cover;
}

.blog-card-body {
    padding: 24px;
}

.blog-meta {
    font-size: 0.875rem;
    color: var(--muted-foreground);
    margin-bottom: 12px;
}

.blog-title {
    font-size: 1.25rem;
    margin: 0 0 12px;
}

.clamp-3 {
    display: -webkit-box;
    -webkit-line-clamp: 3;
    -webkit-box-orient: vertical;
    overflow: hidden;
    font-size: 0.9rem;
}

.read-more {
    display: inline-block;
    margin-top: 16px;
    font-size: 0.9rem;
    font-weight: 500;
    color: var(--primary);
}

.post-cover {
    border-radius: var(--radius);
    margin: 24px 0;
}

.lead {
    font-size: 1.2rem;
    color: var(--muted-foreground);
}

.back-link {
    display: inline-block;
    margin: 32px 0 16px;
    color: var(--primary);
}

@media (max-width: 720px) {
    .hero-title {
        font-size: 2.5rem;
    }

    .site-nav {
        gap: 14px;
        font-size: 0.85rem;
    }

    .grid-header {
        flex-direction: column;
        align-items: flex-start;
        gap: 12px;
    }
}
"#;

/// Content Security Policy header value
///
/// Product and blog images are served from the backend's storage bucket, so
/// `https:` image sources are allowed; everything else stays same-origin.
pub const CSP: &str = "default-src 'self'; img-src 'self' https: data:; style-src 'self' 'unsafe-inline'; script-src 'self' 'unsafe-inline'; connect-src 'none'; font-src 'self' data:; form-action 'self' https:;";
