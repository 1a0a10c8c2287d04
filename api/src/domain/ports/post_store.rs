//! Post store port trait
//!
//! Defines the interface to the external data source that supplies posts.
//! Implementations are provided by adapters (e.g., the in-memory store).

use async_trait::async_trait;

use crate::domain::entities::{Post, PostId};
use crate::error::DomainError;

/// Source of post records for the feed
#[async_trait]
pub trait PostStore: Send + Sync {
    /// All posts, in source order
    async fn all(&self) -> Result<Vec<Post>, DomainError>;

    /// Find a post by ID
    async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>, DomainError>;

    /// Number of posts held
    async fn count(&self) -> Result<usize, DomainError>;
}
