//! Feed aggregation pipeline
//!
//! filter -> (group -> representative | merge) -> sort -> paginate.
//! The pipeline is a pure function of the post slice and a `FilterConfig`; it
//! is re-run from scratch for every configuration.

pub mod filter;
pub mod grouping;
pub mod paginate;
pub mod signature;
pub mod sort;

pub use filter::filter_posts;
pub use grouping::{dedupe_posts, group_posts, merge_group};
pub use paginate::paginate;
pub use sort::sort_items;
// Exposed for consumers that group or inspect posts outside a full run
#[allow(unused_imports)]
pub use grouping::select_representative;
#[allow(unused_imports)]
pub use signature::{signature, text_signature};

use crate::domain::entities::{DisplayMode, FeedItem, FeedPage, FilterConfig, Post};
use crate::error::DomainError;

/// Run the whole pipeline over `posts` for one configuration.
///
/// Fails only when `config` does not validate.
pub fn build_feed(posts: &[Post], config: &FilterConfig) -> Result<FeedPage<FeedItem>, DomainError> {
    config.validate()?;

    let filtered = filter_posts(posts, config);
    let filtered_count = filtered.len();

    let mut items: Vec<FeedItem> = match config.display_mode() {
        DisplayMode::Flat => filtered.into_iter().map(FeedItem::Single).collect(),
        DisplayMode::Deduped => dedupe_posts(&group_posts(&filtered))
            .into_iter()
            .map(FeedItem::Single)
            .collect(),
        DisplayMode::Merged => group_posts(&filtered)
            .into_iter()
            .filter_map(merge_group)
            .map(FeedItem::Merged)
            .collect(),
    };

    sort_items(&mut items, config.sort_by);
    let page = paginate(items, config.page, config.page_size);

    tracing::debug!(
        posts = posts.len(),
        filtered = filtered_count,
        total = page.total,
        shown = page.items.len(),
        mode = ?config.display_mode(),
        sort = %config.sort_by,
        "Built feed"
    );

    Ok(page)
}
