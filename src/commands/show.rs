//! Show a single post

use anyhow::Result;
use serde::Serialize;

use crate::cms::CmsClient;
use crate::content::{Post, ReadingStats};
use crate::BlogSource;

#[derive(Serialize)]
struct ShowOutput {
    #[serde(flatten)]
    post: Post,
    stats: ReadingStats,
}

/// Print one post as JSON, with its reading stats
pub async fn run<C: CmsClient>(source: &BlogSource<C>, slug: &str) -> Result<()> {
    let post = source.post_by_slug(slug).await?;
    let stats = post.reading_stats();
    let output = ShowOutput { post, stats };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
