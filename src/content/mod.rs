//! Content module - normalized posts built from CMS records

mod date;
mod normalize;
mod post;

pub use date::Timestamp;
pub use normalize::{link_neighbors, normalize_post, summarize_post};
pub use post::{Post, PostData, PostNav, PostSummary, ReadingStats, POSTS_COLLECTION};
