//! Domain entities
//!
//! Pure domain models for posts, feed configuration and feed output.

pub mod feed_item;
pub mod filter_config;
pub mod post;

pub use feed_item::{FeedItem, FeedPage, Group, MergedItem};
pub use filter_config::{DisplayMode, FilterConfig, SortBy, DEFAULT_PAGE_SIZE};
pub use post::{MetricsRecord, PlatformId, Post, PostId, PostMetrics, PostRecord, PostUser};
