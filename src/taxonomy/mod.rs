//! Tag and category frequency listings

use indexmap::IndexMap;
use serde::Serialize;
use std::collections::HashSet;

use crate::cms::{BlogPost, CategoryRecord, TagRecord};
use crate::config::CanonicalPolicy;

/// A tag with the number of posts using it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCount {
    pub name: String,
    pub count: usize,
}

/// A category with the number of posts in it and its listing URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub name: String,
    pub count: usize,
    pub url: String,
}

/// Count tag usage across posts, sorted by name ignoring case
///
/// Names are counted case-sensitively; `canonical` is consulted only as
/// directed by `policy`.
pub fn count_tags(
    posts: &[BlogPost],
    canonical: &[TagRecord],
    policy: CanonicalPolicy,
) -> Vec<TagCount> {
    let allowed: HashSet<&str> = canonical.iter().map(|t| t.name.as_str()).collect();
    let mut counts: IndexMap<String, usize> = IndexMap::new();

    for post in posts {
        for tag in post.tags.iter().flatten() {
            if policy == CanonicalPolicy::Restrict && !allowed.contains(tag.name.as_str()) {
                continue;
            }
            *counts.entry(tag.name.clone()).or_insert(0) += 1;
        }
    }

    if policy == CanonicalPolicy::Supplement {
        for tag in canonical {
            counts.entry(tag.name.clone()).or_insert(0);
        }
    }

    sorted_by_name(counts)
        .into_iter()
        .map(|(name, count)| TagCount { name, count })
        .collect()
}

/// Count posts per category, sorted by name ignoring case
///
/// Names are trimmed before counting. Posts without a category are counted
/// under `uncategorized`, which is kept under every policy.
pub fn count_categories<F>(
    posts: &[BlogPost],
    canonical: &[CategoryRecord],
    policy: CanonicalPolicy,
    uncategorized: &str,
    category_url: F,
) -> Vec<CategoryCount>
where
    F: Fn(&str) -> String,
{
    let allowed: HashSet<&str> = canonical.iter().map(|c| c.name.trim()).collect();
    let mut counts: IndexMap<String, usize> = IndexMap::new();

    for post in posts {
        let key = match post.category.as_ref().map(|c| c.name.trim()) {
            Some(name) => {
                if policy == CanonicalPolicy::Restrict && !allowed.contains(name) {
                    continue;
                }
                name
            }
            None => uncategorized,
        };
        *counts.entry(key.to_string()).or_insert(0) += 1;
    }

    if policy == CanonicalPolicy::Supplement {
        for category in canonical {
            let name = category.name.trim();
            if !name.is_empty() {
                counts.entry(name.to_string()).or_insert(0);
            }
        }
    }

    sorted_by_name(counts)
        .into_iter()
        .map(|(name, count)| {
            let url = category_url(&name);
            CategoryCount { name, count, url }
        })
        .collect()
}

/// Sort entries by lowercase name; names equal ignoring case keep first-seen order
fn sorted_by_name(counts: IndexMap<String, usize>) -> Vec<(String, usize)> {
    let mut entries: Vec<(String, usize)> = counts.into_iter().collect();
    entries.sort_by_cached_key(|(name, _)| name.to_lowercase());
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(tags: &[&str], category: Option<&str>) -> BlogPost {
        BlogPost {
            id: "p".to_string(),
            tags: Some(
                tags.iter()
                    .map(|name| TagRecord {
                        id: String::new(),
                        name: name.to_string(),
                    })
                    .collect(),
            ),
            category: category.map(|name| CategoryRecord {
                id: String::new(),
                name: name.to_string(),
            }),
            ..Default::default()
        }
    }

    fn tag(name: &str) -> TagRecord {
        TagRecord {
            id: String::new(),
            name: name.to_string(),
        }
    }

    fn category(name: &str) -> CategoryRecord {
        CategoryRecord {
            id: String::new(),
            name: name.to_string(),
        }
    }

    fn url(name: &str) -> String {
        format!("/categories/{}/", name)
    }

    #[test]
    fn test_count_tags() {
        let posts = vec![post(&["B", "A"], None), post(&["A"], None)];
        let tags = count_tags(&posts, &[], CanonicalPolicy::Ignore);
        assert_eq!(
            tags,
            vec![
                TagCount {
                    name: "A".to_string(),
                    count: 2
                },
                TagCount {
                    name: "B".to_string(),
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn test_tags_sorted_ignoring_case_but_counted_by_case() {
        let posts = vec![post(&["rust", "Zig", "Rust", "apple"], None)];
        let names: Vec<_> = count_tags(&posts, &[], CanonicalPolicy::Ignore)
            .into_iter()
            .map(|t| (t.name, t.count))
            .collect();
        assert_eq!(
            names,
            vec![
                ("apple".to_string(), 1),
                ("rust".to_string(), 1),
                ("Rust".to_string(), 1),
                ("Zig".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_posts_without_tags() {
        let mut untagged = post(&[], None);
        untagged.tags = None;
        assert!(count_tags(&[untagged], &[], CanonicalPolicy::Ignore).is_empty());
    }

    #[test]
    fn test_canonical_tags_ignored_by_default() {
        let posts = vec![post(&["A"], None)];
        let tags = count_tags(&posts, &[tag("Unused")], CanonicalPolicy::Ignore);
        assert_eq!(tags.len(), 1);
    }

    #[test]
    fn test_canonical_tags_restrict() {
        let posts = vec![post(&["A", "Stray"], None)];
        let tags = count_tags(&posts, &[tag("A")], CanonicalPolicy::Restrict);
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].name, "A");
    }

    #[test]
    fn test_canonical_tags_supplement() {
        let posts = vec![post(&["B"], None)];
        let tags = count_tags(&posts, &[tag("A"), tag("B")], CanonicalPolicy::Supplement);
        assert_eq!(tags[0].name, "A");
        assert_eq!(tags[0].count, 0);
        assert_eq!(tags[1].name, "B");
        assert_eq!(tags[1].count, 1);
    }

    #[test]
    fn test_count_categories() {
        let posts = vec![
            post(&[], Some(" Tech ")),
            post(&[], Some("Tech")),
            post(&[], None),
            post(&[], Some("art")),
            post(&[], None),
        ];
        let categories =
            count_categories(&posts, &[], CanonicalPolicy::Ignore, "Uncategorized", url);

        assert_eq!(
            categories,
            vec![
                CategoryCount {
                    name: "art".to_string(),
                    count: 1,
                    url: "/categories/art/".to_string(),
                },
                CategoryCount {
                    name: "Tech".to_string(),
                    count: 2,
                    url: "/categories/Tech/".to_string(),
                },
                CategoryCount {
                    name: "Uncategorized".to_string(),
                    count: 2,
                    url: "/categories/Uncategorized/".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_blank_category_counts_under_trimmed_name() {
        let posts = vec![post(&[], Some("   ")), post(&[], None)];
        let counts: Vec<_> =
            count_categories(&posts, &[], CanonicalPolicy::Ignore, "未分類", url)
                .into_iter()
                .map(|c| (c.name, c.count))
                .collect();
        assert_eq!(counts, vec![("".to_string(), 1), ("未分類".to_string(), 1)]);
    }

    #[test]
    fn test_categories_restrict_keeps_uncategorized() {
        let posts = vec![
            post(&[], Some("Tech")),
            post(&[], Some("Stray")),
            post(&[], None),
        ];
        let names: Vec<_> = count_categories(
            &posts,
            &[category(" Tech")],
            CanonicalPolicy::Restrict,
            "Uncategorized",
            url,
        )
        .into_iter()
        .map(|c| c.name)
        .collect();
        assert_eq!(names, vec!["Tech", "Uncategorized"]);
    }

    #[test]
    fn test_categories_supplement() {
        let categories = count_categories(
            &[],
            &[category("Life"), category("")],
            CanonicalPolicy::Supplement,
            "Uncategorized",
            url,
        );
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].name, "Life");
        assert_eq!(categories[0].count, 0);
    }
}
