//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid post that can be customized.

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::domain::entities::{PlatformId, Post, PostId, PostMetrics, PostUser};

/// Fixed reference instant so timestamps in tests are reproducible
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
}

/// Create a test post with default values
pub fn test_post(id: &str) -> Post {
    Post {
        id: PostId::from(id),
        platform_id: PlatformId::Twitter,
        user: PostUser {
            name: "Alex Johnson".to_string(),
            handle: "@alex".to_string(),
        },
        text: "Reading about accessibility.".to_string(),
        media_url: None,
        created_at: base_time(),
        metrics: PostMetrics {
            comments: 1,
            likes: 2,
            shares: 3,
        },
    }
}

/// Create a test post on a specific platform
pub fn test_post_on(id: &str, platform: PlatformId) -> Post {
    Post {
        platform_id: platform,
        ..test_post(id)
    }
}

/// Create a test post with specific text
pub fn test_post_with_text(id: &str, text: &str) -> Post {
    Post {
        text: text.to_string(),
        ..test_post(id)
    }
}

/// Create a test post with an exact engagement (all likes), created `at_secs`
/// after the Unix epoch
pub fn test_post_scored(id: &str, text: &str, engagement: u64, at_secs: i64) -> Post {
    Post {
        text: text.to_string(),
        created_at: Utc.timestamp_opt(at_secs, 0).unwrap(),
        metrics: PostMetrics {
            comments: 0,
            likes: engagement,
            shares: 0,
        },
        ..test_post(id)
    }
}

/// Create a test post `minutes` before `base_time()`
pub fn test_post_aged(id: &str, minutes: i64) -> Post {
    Post {
        created_at: base_time() - Duration::minutes(minutes),
        ..test_post(id)
    }
}
