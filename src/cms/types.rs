//! Records as returned by the CMS API

use serde::{Deserialize, Serialize};

/// A blog post record
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: String,

    #[serde(default)]
    pub title: String,

    /// Rich-text body (HTML)
    #[serde(default)]
    pub content: String,

    pub description: Option<String>,

    /// Publication timestamp, usually RFC 3339
    #[serde(default)]
    pub published_at: String,

    pub updated_at: Option<String>,
    pub created_at: Option<String>,
    pub revised_at: Option<String>,

    pub image: Option<ImageRecord>,

    pub tags: Option<Vec<TagRecord>>,

    pub category: Option<CategoryRecord>,

    pub draft: Option<bool>,
}

/// An image field
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImageRecord {
    #[serde(default)]
    pub url: String,
    pub height: Option<u32>,
    pub width: Option<u32>,
}

/// A tag as referenced by a post or listed by the tag endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TagRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// A category as referenced by a post or listed by the category endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// Paged list envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse<T> {
    pub contents: Vec<T>,
    #[serde(default)]
    pub total_count: usize,
    #[serde(default)]
    pub offset: usize,
    #[serde(default)]
    pub limit: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_post() {
        let json = r#"{
            "id": "hello-world",
            "title": "Hello",
            "content": "<p>Hi</p>",
            "publishedAt": "2024-01-15T10:30:00.000Z",
            "revisedAt": "2024-01-16T00:00:00.000Z",
            "image": {"url": "https://images.example.com/a.png", "width": 800},
            "tags": [{"id": "t1", "name": "Rust"}, {"name": "Web"}],
            "category": {"id": "c1", "name": "Tech"},
            "someCustomField": 42
        }"#;
        let post: BlogPost = serde_json::from_str(json).unwrap();
        assert_eq!(post.id, "hello-world");
        assert_eq!(post.published_at, "2024-01-15T10:30:00.000Z");
        assert!(post.updated_at.is_none());
        assert!(post.description.is_none());
        assert_eq!(post.image.unwrap().width, Some(800));
        assert_eq!(post.tags.unwrap()[1].name, "Web");
        assert_eq!(post.category.unwrap().name, "Tech");
        assert!(post.draft.is_none());
    }

    #[test]
    fn test_parse_list_response() {
        let json = r#"{"contents": [{"id": "a", "name": "A"}], "totalCount": 5, "offset": 0, "limit": 1}"#;
        let list: ListResponse<TagRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(list.contents.len(), 1);
        assert_eq!(list.total_count, 5);
    }
}
