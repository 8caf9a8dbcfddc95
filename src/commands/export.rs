//! Export adapted content as JSON data files for the site generator

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::cms::CmsClient;
use crate::{BlogSource, CmsBlog};

pub const POSTS_FILE: &str = "posts.json";
pub const POST_LIST_FILE: &str = "post-list.json";
pub const TAGS_FILE: &str = "tags.json";
pub const CATEGORIES_FILE: &str = "categories.json";

/// Fetch everything and write one JSON file per listing into `out_dir`
pub async fn run<C: CmsClient>(
    app: &CmsBlog,
    source: &BlogSource<C>,
    out_dir: &Path,
) -> Result<()> {
    let start = std::time::Instant::now();
    let i18n = app.i18n()?;
    let helpers = app.helpers();

    let posts = source.sorted_posts().await?;
    let list = source.sorted_post_list().await?;
    let tags = source.tag_list().await?;
    let categories = source
        .category_list(|key| i18n.get(key), |name| helpers.category_url(name))
        .await?;

    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory {:?}", out_dir))?;

    write_json(&out_dir.join(POSTS_FILE), &posts)?;
    write_json(&out_dir.join(POST_LIST_FILE), &list)?;
    write_json(&out_dir.join(TAGS_FILE), &tags)?;
    write_json(&out_dir.join(CATEGORIES_FILE), &categories)?;

    tracing::info!(
        "Exported {}: {} posts, {} tags, {} categories to {:?} in {:.2}s",
        app.config.title,
        posts.len(),
        tags.len(),
        categories.len(),
        out_dir,
        start.elapsed().as_secs_f64()
    );
    Ok(())
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(value)?;
    fs::write(path, content).with_context(|| format!("Failed to write {:?}", path))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cms::{BlogPost, CategoryRecord, MemoryClient, TagRecord};

    fn post(id: &str, published_at: &str, category: Option<&str>) -> BlogPost {
        BlogPost {
            id: id.to_string(),
            title: id.to_string(),
            content: "body".to_string(),
            published_at: published_at.to_string(),
            tags: Some(vec![TagRecord {
                id: String::new(),
                name: "Rust".to_string(),
            }]),
            category: category.map(|name| CategoryRecord {
                id: String::new(),
                name: name.to_string(),
            }),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_export_writes_all_files() {
        let dir = tempfile::tempdir().unwrap();
        let app = CmsBlog::new(dir.path()).unwrap();
        let source = app.source(MemoryClient::new(vec![
            post("a", "2024-01-01T00:00:00Z", Some("Web Dev")),
            post("b", "2024-02-01T00:00:00Z", None),
        ]));

        let out = dir.path().join("data");
        run(&app, &source, &out).await.unwrap();

        let posts: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(out.join(POSTS_FILE)).unwrap()).unwrap();
        assert_eq!(posts[0]["slug"], "b");
        assert_eq!(posts[0]["data"]["prevSlug"], "a");
        assert_eq!(posts[1]["data"]["nextSlug"], "b");

        let list: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(out.join(POST_LIST_FILE)).unwrap()).unwrap();
        assert!(list[0].get("body").is_none());

        let tags: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(out.join(TAGS_FILE)).unwrap()).unwrap();
        assert_eq!(tags[0]["name"], "Rust");
        assert_eq!(tags[0]["count"], 2);

        let categories: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(out.join(CATEGORIES_FILE)).unwrap())
                .unwrap();
        assert_eq!(categories[0]["name"], "Uncategorized");
        assert_eq!(categories[0]["url"], "/categories/Uncategorized/");
        assert_eq!(categories[1]["name"], "Web Dev");
        assert_eq!(categories[1]["url"], "/categories/Web%20Dev/");
    }
}
