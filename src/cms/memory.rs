//! In-memory CMS client backed by a fixture
//!
//! Answers the same queries the HTTP client sends, which makes it usable
//! both for offline runs (`--fixture`) and for tests. Every list query it
//! receives is recorded so callers can check what was sent downstream.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::Mutex;

use super::{
    BlogPost, CategoryRecord, CmsClient, CmsError, ListResponse, PostQuery, Result, TagRecord,
    NEWEST_FIRST, PUBLISHED_ONLY,
};

/// Fixture file layout
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Fixture {
    pub posts: Vec<BlogPost>,
    pub categories: Vec<CategoryRecord>,
    pub tags: Vec<TagRecord>,
}

/// Which collection a simulated failure applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Posts,
    Categories,
    Tags,
}

/// CMS client serving a fixed set of records
#[derive(Default)]
pub struct MemoryClient {
    fixture: Fixture,
    failing: Vec<Collection>,
    queries: Mutex<Vec<PostQuery>>,
}

impl MemoryClient {
    /// Create a client serving the given posts
    pub fn new(posts: Vec<BlogPost>) -> Self {
        Self {
            fixture: Fixture {
                posts,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Load a JSON fixture file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let fixture: Fixture = serde_json::from_str(&content)?;
        tracing::debug!(
            "Loaded fixture {:?} with {} posts",
            path.as_ref(),
            fixture.posts.len()
        );
        Ok(Self {
            fixture,
            ..Default::default()
        })
    }

    /// Set the canonical category collection
    pub fn with_categories(mut self, categories: Vec<CategoryRecord>) -> Self {
        self.fixture.categories = categories;
        self
    }

    /// Set the canonical tag collection
    pub fn with_tags(mut self, tags: Vec<TagRecord>) -> Self {
        self.fixture.tags = tags;
        self
    }

    /// Make every request for a collection fail
    pub fn with_failure(mut self, collection: Collection) -> Self {
        self.failing.push(collection);
        self
    }

    /// Post list queries received so far
    pub fn queries(&self) -> Vec<PostQuery> {
        self.queries
            .lock()
            .map(|q| q.clone())
            .unwrap_or_default()
    }

    fn check(&self, collection: Collection) -> Result<()> {
        if self.failing.contains(&collection) {
            return Err(CmsError::Status {
                status: 503,
                body: format!("simulated failure for {:?}", collection),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl CmsClient for MemoryClient {
    async fn get_blog_posts(&self, query: &PostQuery) -> Result<ListResponse<BlogPost>> {
        if let Ok(mut queries) = self.queries.lock() {
            queries.push(query.clone());
        }
        self.check(Collection::Posts)?;

        let mut posts: Vec<BlogPost> = self
            .fixture
            .posts
            .iter()
            .filter(|p| query.filters.as_deref() != Some(PUBLISHED_ONLY) || !p.draft.unwrap_or(false))
            .cloned()
            .collect();

        match query.orders.as_deref() {
            Some(NEWEST_FIRST) => posts.sort_by(|a, b| b.published_at.cmp(&a.published_at)),
            Some("publishedAt") => posts.sort_by(|a, b| a.published_at.cmp(&b.published_at)),
            _ => {}
        }

        let total_count = posts.len();
        let offset = query.offset.unwrap_or(0);
        let mut contents: Vec<BlogPost> = posts
            .into_iter()
            .skip(offset)
            .take(query.limit.unwrap_or(usize::MAX))
            .collect();
        if !query.includes_body() {
            for post in &mut contents {
                post.content.clear();
            }
        }

        Ok(ListResponse {
            limit: contents.len(),
            contents,
            total_count,
            offset,
        })
    }

    async fn get_blog_post(&self, id: &str) -> Result<BlogPost> {
        self.check(Collection::Posts)?;
        self.fixture
            .posts
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| CmsError::NotFound(id.to_string()))
    }

    async fn get_categories(&self) -> Result<Vec<CategoryRecord>> {
        self.check(Collection::Categories)?;
        Ok(self.fixture.categories.clone())
    }

    async fn get_tags(&self) -> Result<Vec<TagRecord>> {
        self.check(Collection::Tags)?;
        Ok(self.fixture.tags.clone())
    }
}
