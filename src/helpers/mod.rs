//! Helper functions for building site URLs
//!
//! These are handed to the adapter as plain closures, so aggregation
//! never depends on routing directly.

mod url;

pub use url::*;

use crate::config::SiteConfig;

/// URL helpers bound to a site configuration
pub struct Helpers {
    config: SiteConfig,
}

impl Helpers {
    /// Create a new helpers instance
    pub fn new(config: SiteConfig) -> Self {
        Self { config }
    }

    /// Category page URL
    pub fn category_url(&self, name: &str) -> String {
        category_url(&self.config, name)
    }

    /// Tag page URL
    pub fn tag_url(&self, name: &str) -> String {
        tag_url(&self.config, name)
    }

    /// Post page URL
    pub fn post_url(&self, slug: &str) -> String {
        post_url(&self.config, slug)
    }
}
