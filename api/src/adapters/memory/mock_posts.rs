//! Demo dataset
//!
//! Deterministic posts spread across every platform, with repeated texts so the
//! dedupe and merge views have something to group.

use chrono::{DateTime, Utc};

use crate::domain::entities::{MetricsRecord, PlatformId, Post, PostRecord, PostUser};
use crate::error::DomainError;

const SAMPLE_TEXTS: [&str; 12] = [
    "Loving the new SocialSphere UI! #design #frontend",
    "Just published a video on building a social feed aggregator ▶️ https://example.com",
    "What are your go-to tools for web performance? #webperf",
    "We are hiring frontend engineers! Apply now @careers",
    "Dark mode is life. Change my mind.",
    "Deploying a new feature today. Wish me luck!",
    "Have you tried the new CSS color-mix()? Game changer.",
    "Productivity tip: batch your notifications.",
    "Reading about accessibility. ARIA roles are super helpful.",
    "Just crossed 10k subs on my channel! Thank you!",
    "Launching our community page soon. Stay tuned.",
    "Refactoring state management for clarity and scale.",
];

const USERS: [(&str, &str); 6] = [
    ("Alex Johnson", "@alex"),
    ("Priya Sharma", "@priya"),
    ("Mei Lin", "@meilin"),
    ("Carlos Ruiz", "@carlos"),
    ("Sarah Lee", "@sarah"),
    ("Omar Haddad", "@omar"),
];

const MEDIA: [Option<&str>; 6] = [
    None,
    Some("https://images.unsplash.com/photo-1522202176988-66273c2fd55f?q=80&w=1200&auto=format&fit=crop"),
    Some("https://images.unsplash.com/photo-1555099962-4199c345e5dd?q=80&w=1200&auto=format&fit=crop"),
    None,
    None,
    Some("https://images.unsplash.com/photo-1556157382-97eda2d62296?q=80&w=1200&auto=format&fit=crop"),
];

/// Raw records for `count` demo posts, the i-th one `i` hours (plus jitter) before `now`
pub fn mock_post_records(now: DateTime<Utc>, count: usize) -> Vec<PostRecord> {
    let now_ms = now.timestamp_millis();

    (0..count)
        .map(|i| {
            let n = i as i64;
            let platform = PlatformId::ALL[i % PlatformId::ALL.len()];
            let (name, handle) = USERS[i % USERS.len()];
            let age_secs = n * 3600 + (n % 5) * 237;

            PostRecord {
                id: format!("post_{}", i),
                platform_id: platform.to_string(),
                user: PostUser {
                    name: name.to_string(),
                    handle: handle.to_string(),
                },
                text: SAMPLE_TEXTS[i % SAMPLE_TEXTS.len()].to_string(),
                media_url: MEDIA[i % MEDIA.len()].map(str::to_string),
                created_at: now_ms - age_secs * 1000,
                metrics: MetricsRecord {
                    comments: (n * 7) % 120,
                    likes: (n * 13) % 500,
                    shares: (n * 5) % 200,
                },
            }
        })
        .collect()
}

/// Validated demo posts
pub fn generate_mock_posts(now: DateTime<Utc>, count: usize) -> Result<Vec<Post>, DomainError> {
    mock_post_records(now, count)
        .into_iter()
        .map(Post::try_from)
        .collect()
}
