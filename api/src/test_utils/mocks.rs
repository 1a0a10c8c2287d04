//! Mock implementations of port traits
//!
//! The in-memory store lives in `adapters::memory`; this covers the failure path.

use async_trait::async_trait;

use crate::domain::entities::{Post, PostId};
use crate::domain::ports::PostStore;
use crate::error::DomainError;

/// Post store whose every call fails
#[derive(Default)]
pub struct FailingPostStore;

impl FailingPostStore {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PostStore for FailingPostStore {
    async fn all(&self) -> Result<Vec<Post>, DomainError> {
        Err(DomainError::Internal("post source unavailable".to_string()))
    }

    async fn find_by_id(&self, _id: &PostId) -> Result<Option<Post>, DomainError> {
        Err(DomainError::Internal("post source unavailable".to_string()))
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Err(DomainError::Internal("post source unavailable".to_string()))
    }
}
