//! Conversion of CMS records into normalized posts

use super::{Post, PostData, PostNav, PostSummary, Timestamp, POSTS_COLLECTION};
use crate::cms::BlogPost;

/// Convert one CMS record into a normalized post
///
/// Navigation links start empty; see [`link_neighbors`].
pub fn normalize_post(record: BlogPost) -> Post {
    let BlogPost {
        id,
        title,
        content,
        description,
        published_at,
        updated_at,
        image,
        tags,
        category,
        draft,
        ..
    } = record;

    let data = PostData {
        title,
        published: Timestamp::parse(&published_at),
        updated: updated_at
            .filter(|s| !s.is_empty())
            .map(|s| Timestamp::parse(&s)),
        description: description.unwrap_or_default(),
        image: image.map(|i| i.url).unwrap_or_default(),
        tags: tags
            .unwrap_or_default()
            .into_iter()
            .map(|t| t.name)
            .collect(),
        category: category.map(|c| c.name).filter(|name| !name.is_empty()),
        draft: draft.unwrap_or(false),
        lang: String::new(),
        nav: PostNav::default(),
    };

    Post {
        slug: id.clone(),
        id,
        body: content,
        collection: POSTS_COLLECTION,
        data,
    }
}

/// Convert one CMS record into a listing entry without the body
pub fn summarize_post(record: BlogPost) -> PostSummary {
    normalize_post(record).into_summary()
}

/// Fill previous/next links from array position
///
/// Posts must already be newest first. `next` of post `i` is post `i - 1`
/// and `prev` is post `i + 1`; the ends keep their empty links.
pub fn link_neighbors(posts: &mut [Post]) {
    for i in 1..posts.len() {
        let (newer, rest) = posts.split_at_mut(i);
        let newer = &newer[i - 1];
        let nav = &mut rest[0].data.nav;
        nav.next_slug = newer.slug.clone();
        nav.next_title = newer.data.title.clone();
    }

    for i in 0..posts.len().saturating_sub(1) {
        let (current, older) = posts.split_at_mut(i + 1);
        let older = &older[0];
        let nav = &mut current[i].data.nav;
        nav.prev_slug = older.slug.clone();
        nav.prev_title = older.data.title.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cms::{CategoryRecord, ImageRecord, TagRecord};

    fn record(id: &str) -> BlogPost {
        BlogPost {
            id: id.to_string(),
            title: format!("Title {}", id),
            content: "<p>body</p>".to_string(),
            published_at: "2024-01-15T10:30:00.000Z".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults_for_missing_fields() {
        let post = normalize_post(record("a"));
        assert_eq!(post.id, "a");
        assert_eq!(post.slug, "a");
        assert_eq!(post.body, "<p>body</p>");
        assert_eq!(post.collection, "posts");
        assert_eq!(post.data.description, "");
        assert_eq!(post.data.image, "");
        assert!(post.data.tags.is_empty());
        assert_eq!(post.data.category, None);
        assert!(!post.data.draft);
        assert!(post.data.updated.is_none());
        assert!(post.data.published.is_valid());
        assert!(post.data.nav.is_empty());
    }

    #[test]
    fn test_copies_present_fields() {
        let mut source = record("b");
        source.description = Some("About b".to_string());
        source.updated_at = Some("2024-02-01T00:00:00Z".to_string());
        source.image = Some(ImageRecord {
            url: "https://img.example.com/b.png".to_string(),
            ..Default::default()
        });
        source.tags = Some(vec![
            TagRecord {
                id: "1".to_string(),
                name: "Rust".to_string(),
            },
            TagRecord {
                id: "2".to_string(),
                name: "CLI".to_string(),
            },
        ]);
        source.category = Some(CategoryRecord {
            id: "c".to_string(),
            name: "Tech".to_string(),
        });
        source.draft = Some(true);

        let post = normalize_post(source);
        assert_eq!(post.data.description, "About b");
        assert_eq!(post.data.image, "https://img.example.com/b.png");
        assert_eq!(post.data.tags, vec!["Rust", "CLI"]);
        assert_eq!(post.data.category.as_deref(), Some("Tech"));
        assert!(post.data.draft);
        assert!(post.data.updated.unwrap().is_valid());
    }

    #[test]
    fn test_malformed_date_is_invalid_not_an_error() {
        let mut source = record("c");
        source.published_at = "yesterday-ish".to_string();
        let post = normalize_post(source);
        assert!(!post.data.published.is_valid());
    }

    #[test]
    fn test_empty_category_name_is_none() {
        let mut source = record("d");
        source.category = Some(CategoryRecord::default());
        assert_eq!(normalize_post(source).data.category, None);
    }

    #[test]
    fn test_link_empty_list() {
        let mut posts: Vec<Post> = Vec::new();
        link_neighbors(&mut posts);
        assert!(posts.is_empty());
    }

    #[test]
    fn test_link_single_post_stays_empty() {
        let mut posts = vec![normalize_post(record("only"))];
        link_neighbors(&mut posts);
        assert!(posts[0].data.nav.is_empty());
    }

    #[test]
    fn test_link_neighbors() {
        let mut posts: Vec<Post> = ["new", "mid", "old"]
            .iter()
            .map(|id| normalize_post(record(id)))
            .collect();
        link_neighbors(&mut posts);

        let first = &posts[0].data.nav;
        assert_eq!(first.next_slug, "");
        assert_eq!(first.next_title, "");
        assert_eq!(first.prev_slug, "mid");
        assert_eq!(first.prev_title, "Title mid");

        let middle = &posts[1].data.nav;
        assert_eq!(middle.next_slug, "new");
        assert_eq!(middle.prev_slug, "old");

        let last = &posts[2].data.nav;
        assert_eq!(last.prev_slug, "");
        assert_eq!(last.prev_title, "");
        assert_eq!(last.next_slug, "mid");
        assert_eq!(last.next_title, "Title mid");
    }

    #[test]
    fn test_summary_drops_body() {
        let summary = summarize_post(record("s"));
        assert_eq!(summary.slug, "s");
        let json = serde_json::to_value(&summary).unwrap();
        assert!(json.get("body").is_none());
        assert_eq!(json["data"]["nextSlug"], "");
    }
}
