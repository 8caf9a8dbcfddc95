//! Headless CMS access
//!
//! The adapter only talks to the CMS through [`CmsClient`], so the
//! HTTP client and the in-memory fixture client are interchangeable.

mod error;
mod http;
mod memory;
mod query;
mod types;

use async_trait::async_trait;

pub use error::{CmsError, Result};
pub use http::HttpClient;
pub use memory::{Collection, Fixture, MemoryClient};
pub use query::{draft_filter, PostQuery, NEWEST_FIRST, PUBLISHED_ONLY, SUMMARY_FIELDS};
pub use types::{BlogPost, CategoryRecord, ImageRecord, ListResponse, TagRecord};

/// Read access to blog content in the CMS
#[async_trait]
pub trait CmsClient: Send + Sync {
    /// List posts matching the query
    async fn get_blog_posts(&self, query: &PostQuery) -> Result<ListResponse<BlogPost>>;

    /// Fetch one post by id
    async fn get_blog_post(&self, id: &str) -> Result<BlogPost>;

    /// The canonical category collection
    async fn get_categories(&self) -> Result<Vec<CategoryRecord>>;

    /// The canonical tag collection
    async fn get_tags(&self) -> Result<Vec<TagRecord>>;
}

#[async_trait]
impl<T: CmsClient + ?Sized> CmsClient for Box<T> {
    async fn get_blog_posts(&self, query: &PostQuery) -> Result<ListResponse<BlogPost>> {
        (**self).get_blog_posts(query).await
    }

    async fn get_blog_post(&self, id: &str) -> Result<BlogPost> {
        (**self).get_blog_post(id).await
    }

    async fn get_categories(&self) -> Result<Vec<CategoryRecord>> {
        (**self).get_categories().await
    }

    async fn get_tags(&self) -> Result<Vec<TagRecord>> {
        (**self).get_tags().await
    }
}
