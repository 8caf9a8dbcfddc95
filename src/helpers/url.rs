//! URL helper functions

use crate::config::SiteConfig;

/// Generate a URL with the root path
///
/// # Examples
/// ```ignore
/// url_for(&config, "/css/style.css") // -> "/blog/css/style.css"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    let root = config.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Encode a single URL path segment
pub fn encode_url(segment: &str) -> String {
    percent_encoding::utf8_percent_encode(segment, percent_encoding::NON_ALPHANUMERIC).to_string()
}

/// URL of a category listing page
///
/// # Examples
/// ```ignore
/// category_url(&config, " Web Dev ") // -> "/blog/categories/Web%20Dev/"
/// ```
pub fn category_url(config: &SiteConfig, name: &str) -> String {
    url_for(
        config,
        &format!("{}/{}/", config.category_dir, encode_url(name.trim())),
    )
}

/// URL of a tag listing page
pub fn tag_url(config: &SiteConfig, name: &str) -> String {
    url_for(
        config,
        &format!("{}/{}/", config.tag_dir, encode_url(name.trim())),
    )
}

/// URL of a post page
pub fn post_url(config: &SiteConfig, slug: &str) -> String {
    url_for(config, &format!("posts/{}/", encode_url(slug)))
}
