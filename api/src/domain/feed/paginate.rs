//! Cumulative pagination
//!
//! Page N shows the first `N * page_size` items; "load more" widens the window
//! instead of moving it.

use crate::domain::entities::FeedPage;

pub fn paginate<T>(mut items: Vec<T>, page: usize, page_size: usize) -> FeedPage<T> {
    let total = items.len();
    let end = page.saturating_mul(page_size).min(total);
    items.truncate(end);

    FeedPage {
        has_more: end < total,
        items,
        total,
    }
}
