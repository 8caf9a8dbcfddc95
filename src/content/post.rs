//! Normalized post models

use serde::Serialize;

use super::Timestamp;

/// Collection name every normalized post belongs to
pub const POSTS_COLLECTION: &str = "posts";

/// Words per minute used for reading time
const WORDS_PER_MINUTE: usize = 200;

/// A blog post in the shape the site generator expects
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    /// CMS record id
    pub id: String,

    /// URL-facing identifier (same as the id)
    pub slug: String,

    /// Full rich-text body
    pub body: String,

    pub collection: &'static str,

    pub data: PostData,
}

/// Post front-matter
#[derive(Debug, Clone, Serialize)]
pub struct PostData {
    pub title: String,

    /// Publication date
    pub published: Timestamp,

    /// Last updated date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<Timestamp>,

    pub description: String,

    /// Cover image URL, empty when absent
    pub image: String,

    pub tags: Vec<String>,

    pub category: Option<String>,

    pub draft: bool,

    pub lang: String,

    /// Neighbor links, filled by the linking pass
    #[serde(flatten)]
    pub nav: PostNav,
}

/// Previous/next navigation for a post
///
/// `next` is the newer neighbor, `prev` the older one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostNav {
    pub prev_title: String,
    pub prev_slug: String,
    pub next_title: String,
    pub next_slug: String,
}

impl PostNav {
    /// True when no neighbor has been assigned
    pub fn is_empty(&self) -> bool {
        self.prev_slug.is_empty() && self.next_slug.is_empty()
    }
}

/// Listing entry without the body
#[derive(Debug, Clone, Serialize)]
pub struct PostSummary {
    pub slug: String,
    pub data: PostData,
}

/// Word count and reading time of a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadingStats {
    pub excerpt: String,
    pub words: usize,
    pub minutes: usize,
}

impl Post {
    /// Word count and estimated reading time
    pub fn reading_stats(&self) -> ReadingStats {
        let words = self.body.split(' ').count();
        let minutes = ((words as f64 / WORDS_PER_MINUTE as f64).round() as usize).max(1);
        ReadingStats {
            excerpt: self.data.description.clone(),
            words,
            minutes,
        }
    }

    /// Drop the body, keeping the listing fields
    pub fn into_summary(self) -> PostSummary {
        PostSummary {
            slug: self.slug,
            data: self.data,
        }
    }
}
