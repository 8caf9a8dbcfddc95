//! Site configuration (_config.yml)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub language: String,

    // URL
    pub root: String,

    // Directory
    pub tag_dir: String,
    pub category_dir: String,
    pub i18n_dir: String,

    /// Build mode; production hides drafts
    pub mode: Mode,

    #[serde(default)]
    pub cms: CmsConfig,

    #[serde(default)]
    pub taxonomy: TaxonomyConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Blog".to_string(),
            language: "en".to_string(),

            root: "/".to_string(),

            tag_dir: "tags".to_string(),
            category_dir: "categories".to_string(),
            i18n_dir: "languages".to_string(),

            mode: Mode::Development,

            cms: CmsConfig::default(),
            taxonomy: TaxonomyConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
        let config: SiteConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse {:?}", path))?;
        Ok(config)
    }

    /// Whether drafts must be hidden from fetched listings
    pub fn is_production(&self) -> bool {
        self.mode == Mode::Production
    }
}

/// Build mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Development,
    Production,
}

/// Headless CMS connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CmsConfig {
    /// Service subdomain, as in `{service_domain}.microcms.io`
    pub service_domain: String,
    /// Overrides the origin computed from `service_domain`
    pub base_url: Option<String>,
    /// API key; falls back to the `api_key_env` environment variable
    pub api_key: Option<String>,
    pub api_key_env: String,
    pub blog_endpoint: String,
    pub category_endpoint: String,
    pub tag_endpoint: String,
    pub page_size: usize,
    pub timeout_secs: u64,
}

impl Default for CmsConfig {
    fn default() -> Self {
        Self {
            service_domain: String::new(),
            base_url: None,
            api_key: None,
            api_key_env: "MICROCMS_API_KEY".to_string(),
            blog_endpoint: "blogs".to_string(),
            category_endpoint: "categories".to_string(),
            tag_endpoint: "tags".to_string(),
            page_size: 100,
            timeout_secs: 30,
        }
    }
}

impl CmsConfig {
    /// API origin, e.g. `https://my-blog.microcms.io`
    pub fn origin(&self) -> Option<String> {
        if let Some(base) = &self.base_url {
            return Some(base.trim_end_matches('/').to_string());
        }
        if self.service_domain.is_empty() {
            return None;
        }
        Some(format!("https://{}.microcms.io", self.service_domain))
    }

    /// Resolve the API key from config or environment
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|k| !k.is_empty())
            .or_else(|| std::env::var(&self.api_key_env).ok())
    }
}

/// Tag and category aggregation settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxonomyConfig {
    pub canonical: CanonicalPolicy,
}

/// How the separately fetched canonical tag/category collection is used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CanonicalPolicy {
    /// Counts come from posts only
    #[default]
    Ignore,
    /// Only names present in the canonical collection are counted
    Restrict,
    /// Canonical names without posts are listed with a zero count
    Supplement,
}
