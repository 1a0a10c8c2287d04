//! Feed item entities
//!
//! Structures produced by the feed pipeline. They are built fresh on every run
//! and own clones of the posts they reference.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::{PlatformId, Post};

/// Posts sharing one content signature, in first-seen order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub key: String,
    pub sources: Vec<Post>,
}

/// Aggregate view of a signature group, used in merge mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergedItem {
    /// Stable id derived from the signature
    pub id: Uuid,
    pub key: String,
    pub primary: Post,
    /// Position of `primary` within `sources`
    pub primary_index: usize,
    pub sources: Vec<Post>,
    /// Distinct platforms, in order of first appearance
    pub platforms: Vec<PlatformId>,
    pub total_engagement: u128,
    pub latest_created_at: DateTime<Utc>,
}

/// One row of the feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FeedItem {
    Single(Post),
    Merged(MergedItem),
}

impl FeedItem {
    /// Timestamp used by the newest/oldest sorts
    pub fn sort_timestamp(&self) -> DateTime<Utc> {
        match self {
            FeedItem::Single(post) => post.created_at,
            FeedItem::Merged(item) => item.latest_created_at,
        }
    }

    /// Engagement used by the engagement sort
    pub fn sort_engagement(&self) -> u128 {
        match self {
            FeedItem::Single(post) => post.engagement(),
            FeedItem::Merged(item) => item.total_engagement,
        }
    }

    /// Post shown as the headline of this row
    pub fn headline(&self) -> &Post {
        match self {
            FeedItem::Single(post) => post,
            FeedItem::Merged(item) => &item.primary,
        }
    }
}

/// A paginated pipeline result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedPage<T> {
    pub items: Vec<T>,
    /// Number of items before pagination
    pub total: usize,
    pub has_more: bool,
}
