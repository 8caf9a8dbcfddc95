//! List site content

use anyhow::Result;

use crate::cms::CmsClient;
use crate::{BlogSource, CmsBlog};

/// List site content by type
pub async fn run<C: CmsClient>(
    app: &CmsBlog,
    source: &BlogSource<C>,
    content_type: &str,
) -> Result<()> {
    match content_type {
        "post" | "posts" => {
            let posts = source.sorted_posts().await?;
            let helpers = app.helpers();
            println!("Posts ({}):", posts.len());
            for post in posts {
                let date = post
                    .data
                    .published
                    .as_datetime()
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_else(|| "????-??-??".to_string());
                let draft = if post.data.draft { " (draft)" } else { "" };
                println!(
                    "  {} - {} [{}]{}",
                    date,
                    post.data.title,
                    helpers.post_url(&post.slug),
                    draft
                );
                if !post.data.nav.is_empty() {
                    println!(
                        "      prev: {}  next: {}",
                        or_dash(&post.data.nav.prev_slug),
                        or_dash(&post.data.nav.next_slug)
                    );
                }
            }
        }
        "list" => {
            let list = source.sorted_post_list().await?;
            println!("Post list ({}):", list.len());
            for entry in list {
                println!("  {} [{}]", entry.data.title, entry.slug);
            }
        }
        "tag" | "tags" => {
            let tags = source.tag_list().await?;
            let helpers = app.helpers();
            println!("Tags ({}):", tags.len());
            for tag in tags {
                println!("  {} ({}) {}", tag.name, tag.count, helpers.tag_url(&tag.name));
            }
        }
        "category" | "categories" => {
            let i18n = app.i18n()?;
            let helpers = app.helpers();
            let categories = source
                .category_list(|key| i18n.get(key), |name| helpers.category_url(name))
                .await?;
            println!("Categories ({}):", categories.len());
            for category in categories {
                println!("  {} ({}) {}", category.name, category.count, category.url);
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, list, tag, category",
                content_type
            );
        }
    }

    Ok(())
}

fn or_dash(s: &str) -> &str {
    if s.is_empty() {
        "-"
    } else {
        s
    }
}
