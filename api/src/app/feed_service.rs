//! Feed service
//!
//! Runs the aggregation pipeline over the post store for one filter configuration.
//! Every request snapshots the store and rebuilds the feed from scratch.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::entities::{FeedItem, FeedPage, FilterConfig, PlatformId, Post, PostId};
use crate::domain::feed::build_feed;
use crate::domain::ports::PostStore;
use crate::error::AppError;

/// A platform entry with the number of posts collected from it
#[derive(Debug, Clone, Serialize)]
pub struct PlatformSummary {
    pub id: PlatformId,
    pub name: &'static str,
    pub emoji: &'static str,
    pub post_count: usize,
}

/// Service for building aggregated feeds
pub struct FeedService<PS>
where
    PS: PostStore,
{
    posts: Arc<PS>,
}

impl<PS> FeedService<PS>
where
    PS: PostStore,
{
    pub fn new(posts: Arc<PS>) -> Self {
        Self { posts }
    }

    /// Build the feed page for a configuration
    pub async fn generate_feed(&self, config: &FilterConfig) -> Result<FeedPage<FeedItem>, AppError> {
        let posts = self.posts.all().await?;

        build_feed(&posts, config).map_err(|e| {
            tracing::warn!("Rejected feed configuration: {}", e);
            AppError::from(e)
        })
    }

    /// Get a single post by ID
    pub async fn get_post(&self, id: &PostId) -> Result<Post, AppError> {
        self.posts
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Post {} not found", id)))
    }

    /// Platform catalogue with per-platform post counts
    pub async fn list_platforms(&self) -> Result<Vec<PlatformSummary>, AppError> {
        let posts = self.posts.all().await?;

        Ok(PlatformId::ALL
            .into_iter()
            .map(|platform| PlatformSummary {
                id: platform,
                name: platform.display_name(),
                emoji: platform.emoji(),
                post_count: posts.iter().filter(|p| p.platform_id == platform).count(),
            })
            .collect())
    }
}
