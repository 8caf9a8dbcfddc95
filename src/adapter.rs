//! Blog content source: CMS records adapted for the site generator
//!
//! Every operation is a fresh round trip to the CMS. Errors from the
//! client are returned unchanged.

use crate::cms::{CmsClient, PostQuery, Result};
use crate::config::{CanonicalPolicy, SiteConfig};
use crate::content::{link_neighbors, normalize_post, summarize_post, Post, PostSummary};
use crate::i18n::I18nKey;
use crate::taxonomy::{count_categories, count_tags, CategoryCount, TagCount};

/// Adapts content from a CMS client
pub struct BlogSource<C> {
    client: C,
    production: bool,
    canonical: CanonicalPolicy,
}

impl<C: CmsClient> BlogSource<C> {
    /// Create a source; in production drafts are filtered out downstream
    pub fn new(client: C, production: bool) -> Self {
        Self {
            client,
            production,
            canonical: CanonicalPolicy::default(),
        }
    }

    /// Create a source using the mode and taxonomy settings of a site
    pub fn from_config(client: C, config: &SiteConfig) -> Self {
        Self::new(client, config.is_production())
            .with_canonical_policy(config.taxonomy.canonical)
    }

    /// Choose how canonical tag/category collections are used
    pub fn with_canonical_policy(mut self, policy: CanonicalPolicy) -> Self {
        self.canonical = policy;
        self
    }

    /// The underlying client
    pub fn client(&self) -> &C {
        &self.client
    }

    /// All posts, newest first, with previous/next links filled in
    pub async fn sorted_posts(&self) -> Result<Vec<Post>> {
        let response = self
            .client
            .get_blog_posts(&PostQuery::listing(true, self.production))
            .await?;

        let mut posts: Vec<Post> = response.contents.into_iter().map(normalize_post).collect();
        link_neighbors(&mut posts);

        tracing::info!("Loaded {} posts", posts.len());
        Ok(posts)
    }

    /// All posts, newest first, without bodies or links
    pub async fn sorted_post_list(&self) -> Result<Vec<PostSummary>> {
        let query = PostQuery::listing(true, self.production).without_body();
        let response = self.client.get_blog_posts(&query).await?;

        let list: Vec<PostSummary> = response.contents.into_iter().map(summarize_post).collect();
        tracing::debug!("Loaded {} post summaries", list.len());
        Ok(list)
    }

    /// Tags with the number of posts using each, sorted by name
    pub async fn tag_list(&self) -> Result<Vec<TagCount>> {
        let query = PostQuery::listing(false, self.production);
        let (posts, tags) = tokio::try_join!(
            self.client.get_blog_posts(&query),
            self.client.get_tags()
        )?;

        let counts = count_tags(&posts.contents, &tags, self.canonical);
        tracing::debug!(
            "Counted {} tags over {} posts",
            counts.len(),
            posts.contents.len()
        );
        Ok(counts)
    }

    /// Categories with post counts and page URLs, sorted by name
    ///
    /// `translate` resolves the label for posts without a category and
    /// `category_url` builds each entry's link.
    pub async fn category_list<T, U>(
        &self,
        translate: T,
        category_url: U,
    ) -> Result<Vec<CategoryCount>>
    where
        T: Fn(&str) -> String,
        U: Fn(&str) -> String,
    {
        let query = PostQuery::listing(false, self.production);
        let (posts, categories) = tokio::try_join!(
            self.client.get_blog_posts(&query),
            self.client.get_categories()
        )?;

        let uncategorized = translate(I18nKey::Uncategorized.as_str());
        let counts = count_categories(
            &posts.contents,
            &categories,
            self.canonical,
            &uncategorized,
            category_url,
        );
        tracing::debug!(
            "Counted {} categories over {} posts",
            counts.len(),
            posts.contents.len()
        );
        Ok(counts)
    }

    /// One post by id, without neighbor links
    pub async fn post_by_slug(&self, slug: &str) -> Result<Post> {
        let record = self.client.get_blog_post(slug).await?;
        Ok(normalize_post(record))
    }
}
