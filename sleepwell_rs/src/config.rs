//! Configuration file support for sleepwell.
//!
//! Loads optional `.sleepwell/config.toml` from the working directory (or an
//! explicit path), then applies `SLEEPWELL_*` environment overrides.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::content::Locale;
use crate::error::{Result, StoreError};

pub const ENV_BACKEND_URL: &str = "SLEEPWELL_BACKEND_URL";
pub const ENV_ANON_KEY: &str = "SLEEPWELL_ANON_KEY";
pub const ENV_STORE_ID: &str = "SLEEPWELL_STORE_ID";

/// Root configuration structure
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub store: StoreSection,
    pub backend: BackendSection,
    pub site: SiteSection,
    /// File this was loaded from, if any
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

/// Which store every query is scoped to
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSection {
    pub id: String,
    /// Brand name shown in page chrome
    pub name: String,
}

impl Default for StoreSection {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: "Sleepwell".to_string(),
        }
    }
}

/// Hosted database endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendSection {
    /// Project URL, without the `/rest/v1` suffix
    pub url: String,
    /// Public (anon) API key
    pub anon_key: String,
    pub timeout_ms: u64,
}

impl Default for BackendSection {
    fn default() -> Self {
        Self {
            url: String::new(),
            anon_key: String::new(),
            timeout_ms: 10_000,
        }
    }
}

/// Static site output
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    pub out_dir: PathBuf,
    pub locale: Locale,
    /// Delay between a quiz answer and the next step
    pub quiz_delay_ms: u64,
    /// Newsletter form target
    pub newsletter_action: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("dist"),
            locale: Locale::default(),
            quiz_delay_ms: 300,
            newsletter_action: "#".to_string(),
        }
    }
}

impl StoreConfig {
    /// Load config from `.sleepwell/config.toml` in the given root directory.
    pub fn load(root: &Path) -> Result<Self> {
        let config_path = root.join(".sleepwell").join("config.toml");
        Self::load_from_path(&config_path)
    }

    /// Load config from a specific path. A missing file yields defaults.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| StoreError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let mut config: StoreConfig = toml::from_str(&content).map_err(|e| StoreError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        config.source = Some(path.to_path_buf());
        Ok(config)
    }

    /// Apply `SLEEPWELL_*` overrides from the process environment.
    pub fn with_env(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup`; empty values are ignored.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v: &String| !v.trim().is_empty());
        if let Some(url) = get(ENV_BACKEND_URL) {
            self.backend.url = url;
        }
        if let Some(key) = get(ENV_ANON_KEY) {
            self.backend.anon_key = key;
        }
        if let Some(id) = get(ENV_STORE_ID) {
            self.store.id = id;
        }
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.backend.timeout_ms)
    }

    pub fn quiz_delay(&self) -> Duration {
        Duration::from_millis(self.site.quiz_delay_ms)
    }

    /// Fail unless the backend URL, key and store id are all set.
    pub fn require_backend(&self) -> Result<()> {
        let missing: Vec<&str> = [
            ("backend.url", &self.backend.url),
            ("backend.anon_key", &self.backend.anon_key),
            ("store.id", &self.store.id),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect();

        if missing.is_empty() {
            return Ok(());
        }
        Err(StoreError::Config {
            path: self
                .source
                .clone()
                .unwrap_or_else(|| PathBuf::from(".sleepwell/config.toml")),
            message: format!("missing {} (or set the SLEEPWELL_* environment variables)", missing.join(", ")),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_config(temp: &TempDir, body: &str) {
        let dir = temp.path().join(".sleepwell");
        std::fs::create_dir_all(&dir).expect("create .sleepwell");
        let mut file = std::fs::File::create(dir.join("config.toml")).expect("create config");
        writeln!(file, "{body}").expect("write config");
    }

    #[test]
    fn test_default_config() {
        let config = StoreConfig::default();
        assert_eq!(config.store.name, "Sleepwell");
        assert_eq!(config.site.out_dir, PathBuf::from("dist"));
        assert_eq!(config.site.locale, Locale::EsEs);
        assert_eq!(config.quiz_delay(), Duration::from_millis(300));
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert!(config.require_backend().is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().expect("temp dir");
        let config = StoreConfig::load(temp.path()).expect("defaults");
        assert!(config.source.is_none());
        assert!(config.backend.url.is_empty());
    }

    #[test]
    fn test_load_valid_config() {
        let temp = TempDir::new().expect("temp dir");
        write_config(
            &temp,
            r#"
[store]
id = "store-42"
name = "Dreamy"

[backend]
url = "https://db.example.com"
anon_key = "anon"

[site]
locale = "en-US"
quiz_delay_ms = 0
"#,
        );

        let config = StoreConfig::load(temp.path()).expect("valid config");
        assert_eq!(config.store.id, "store-42");
        assert_eq!(config.store.name, "Dreamy");
        assert_eq!(config.backend.timeout_ms, 10_000);
        assert_eq!(config.site.locale, Locale::EnUs);
        assert_eq!(config.quiz_delay(), Duration::ZERO);
        assert_eq!(config.site.newsletter_action, "#");
        assert!(config.require_backend().is_ok());
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let temp = TempDir::new().expect("temp dir");
        write_config(&temp, "[site]\nlocale = \"fr-FR\"\n");
        match StoreConfig::load(temp.path()) {
            Err(StoreError::Config { path, .. }) => assert!(path.ends_with("config.toml")),
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn test_env_overrides() {
        let config = StoreConfig::default().with_overrides(|key| match key {
            ENV_BACKEND_URL => Some("https://env.example.com".into()),
            ENV_ANON_KEY => Some("  ".into()),
            ENV_STORE_ID => Some("env-store".into()),
            _ => None,
        });
        assert_eq!(config.backend.url, "https://env.example.com");
        assert!(config.backend.anon_key.is_empty());
        assert_eq!(config.store.id, "env-store");

        let err = config.require_backend().unwrap_err().to_string();
        assert!(err.contains("backend.anon_key"), "{err}");
        assert!(!err.contains("store.id"), "{err}");
    }
}
