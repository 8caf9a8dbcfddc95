//! cms-blog: blog content from a headless CMS, adapted for a static site
//!
//! This crate fetches posts, tags and categories from a microCMS-style API
//! and reshapes them into the post, listing and taxonomy data a static-site
//! generator renders: normalized fields, previous/next navigation and
//! per-tag/per-category counts.

pub mod adapter;
pub mod cms;
pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;
pub mod i18n;
pub mod taxonomy;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub use adapter::BlogSource;

/// The main application: a site directory and its configuration
#[derive(Clone)]
pub struct CmsBlog {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
}

impl CmsBlog {
    /// Create a new instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            tracing::debug!("No _config.yml in {:?}, using defaults", base_dir);
            config::SiteConfig::default()
        };

        Ok(Self { config, base_dir })
    }

    /// Build a CMS client: the fixture file when given, the HTTP API otherwise
    pub fn client(&self, fixture: Option<&Path>) -> Result<Box<dyn cms::CmsClient>> {
        match fixture {
            Some(path) => {
                let path = self.base_dir.join(path);
                let client = cms::MemoryClient::from_file(&path)
                    .with_context(|| format!("Failed to load fixture {:?}", path))?;
                Ok(Box::new(client))
            }
            None => {
                let client = cms::HttpClient::new(&self.config.cms)?;
                Ok(Box::new(client))
            }
        }
    }

    /// Content source over the given client, configured for this site
    pub fn source<C: cms::CmsClient>(&self, client: C) -> BlogSource<C> {
        BlogSource::from_config(client, &self.config)
    }

    /// Translations for the site language, with files from the i18n directory
    pub fn i18n(&self) -> Result<i18n::I18n> {
        let mut i18n = i18n::I18n::new(&self.config.language);
        i18n.load_languages(self.base_dir.join(&self.config.i18n_dir))?;
        Ok(i18n)
    }

    /// URL helpers for this site
    pub fn helpers(&self) -> helpers::Helpers {
        helpers::Helpers::new(self.config.clone())
    }
}
