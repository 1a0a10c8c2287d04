//! Feed renderer
//!
//! Renders feed pages to a plain-text markdown listing for terminals and LLMs.

use chrono::{DateTime, Utc};

use crate::app::PlatformSummary;
use crate::domain::entities::{FeedItem, FeedPage, MergedItem, Post, PostMetrics};

/// Render a feed page to markdown format
pub fn render_feed(page: &FeedPage<FeedItem>, now: DateTime<Utc>) -> String {
    let mut buf = String::new();

    // Header
    buf.push_str("# SocialSphere Feed\n\n");
    buf.push_str(&format!("{}\n\n", results_label(page.total)));

    if page.items.is_empty() {
        buf.push_str("_No posts match the current filters._\n");
        return buf;
    }

    for item in &page.items {
        match item {
            FeedItem::Single(post) => buf.push_str(&render_single(post, now)),
            FeedItem::Merged(merged) => buf.push_str(&render_merged(merged, now)),
        }
        buf.push('\n');
    }

    if page.has_more {
        buf.push_str("---\n\n");
        buf.push_str(&format!(
            "Showing {} of {}. Request the next `page` to load more.\n",
            page.items.len(),
            page.total
        ));
    }

    buf
}

fn results_label(total: usize) -> String {
    format!("{} result{}", total, if total == 1 { "" } else { "s" })
}

fn render_metrics(metrics: &PostMetrics) -> String {
    format!(
        "💬 {}  ❤️ {}  🔁 {}",
        metrics.comments, metrics.likes, metrics.shares
    )
}

fn render_single(post: &Post, now: DateTime<Utc>) -> String {
    let mut buf = format!(
        "## {} ({}) [{}] {}\n",
        post.user.name,
        post.user.handle,
        post.platform_id.display_name(),
        time_ago(post.created_at, now)
    );
    buf.push_str(&format!("{}\n", post.text));
    if let Some(media) = &post.media_url {
        buf.push_str(&format!("Media: {}\n", media));
    }
    buf.push_str(&format!("{}\n", render_metrics(&post.metrics)));
    buf
}

fn render_merged(item: &MergedItem, now: DateTime<Utc>) -> String {
    let primary = &item.primary;
    let platforms: Vec<&str> = item.platforms.iter().map(|p| p.display_name()).collect();
    let sources = item.sources.len();

    let mut buf = format!(
        "## {} ({}) [{}]\n",
        primary.user.name,
        primary.user.handle,
        platforms.join(", ")
    );
    buf.push_str(&format!(
        "Latest {} • {} source{} • ▲ {}\n",
        time_ago(item.latest_created_at, now),
        sources,
        if sources == 1 { "" } else { "s" },
        item.total_engagement
    ));
    buf.push_str(&format!("{}\n", primary.text));
    if let Some(media) = &primary.media_url {
        buf.push_str(&format!("Media: {}\n", media));
    }

    for (index, source) in item.sources.iter().enumerate() {
        let marker = if index == item.primary_index {
            " (primary)"
        } else {
            ""
        };
        buf.push_str(&format!(
            "  - [{}] {} {}{}: {} | {}\n",
            source.platform_id.display_name(),
            source.user.handle,
            time_ago(source.created_at, now),
            marker,
            truncate(&source.text, 60),
            render_metrics(&source.metrics)
        ));
    }

    buf
}

/// Compact age of `at` relative to `now` ("3h", "2w", "45s")
pub fn time_ago(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - at).num_seconds();
    const INTERVALS: [(i64, &str); 6] = [
        (31_536_000, "y"),
        (2_592_000, "mo"),
        (604_800, "w"),
        (86_400, "d"),
        (3_600, "h"),
        (60, "m"),
    ];

    for (span, label) in INTERVALS {
        let count = seconds / span;
        if count >= 1 {
            return format!("{}{}", count, label);
        }
    }
    format!("{}s", seconds.max(0))
}

/// Truncate a string with ellipsis
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}

/// Render full post details
pub fn render_post_details(post: &Post, now: DateTime<Utc>) -> String {
    let mut buf = String::new();

    buf.push_str(&format!("# Post {}\n\n", post.id));
    buf.push_str(&format!("{}\n\n", post.text));

    buf.push_str("## Details\n\n");
    buf.push_str(&format!(
        "- **Author:** {} ({})\n",
        post.user.name, post.user.handle
    ));
    buf.push_str(&format!(
        "- **Platform:** {} {}\n",
        post.platform_id.emoji(),
        post.platform_id.display_name()
    ));
    buf.push_str(&format!(
        "- **Posted:** {} ({} ago)\n",
        post.created_at.format("%Y-%m-%d %H:%M UTC"),
        time_ago(post.created_at, now)
    ));
    if let Some(media) = &post.media_url {
        buf.push_str(&format!("- **Media:** {}\n", media));
    }
    buf.push_str(&format!("- **Engagement:** {}\n", post.engagement()));
    buf.push_str(&format!("- **Metrics:** {}\n", render_metrics(&post.metrics)));

    buf
}

/// Render the platform catalogue
pub fn render_platforms(platforms: &[PlatformSummary]) -> String {
    let mut buf = String::new();

    buf.push_str("# Platforms\n\n");
    buf.push_str("| Platform | Id | Posts |\n");
    buf.push_str("|----------|----|-------|\n");
    for platform in platforms {
        buf.push_str(&format!(
            "| {} {} | {} | {} |\n",
            platform.emoji, platform.name, platform.id, platform.post_count
        ));
    }

    buf
}
