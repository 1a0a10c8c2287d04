//! Feed ordering
//!
//! Flat rows sort on the post's own timestamp/engagement; merged rows sort on
//! the aggregate's latest timestamp and total engagement. The sort is stable, so
//! rows with equal keys keep the order they arrived in.

use std::cmp::Reverse;

use crate::domain::entities::{FeedItem, SortBy};

pub fn sort_items(items: &mut [FeedItem], sort_by: SortBy) {
    match sort_by {
        SortBy::Newest => items.sort_by_key(|item| Reverse(item.sort_timestamp())),
        SortBy::Oldest => items.sort_by_key(FeedItem::sort_timestamp),
        SortBy::Engagement => items.sort_by_key(|item| Reverse(item.sort_engagement())),
    }
}
