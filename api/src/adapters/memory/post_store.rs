//! In-memory post store

use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::domain::entities::{Post, PostId, PostRecord};
use crate::domain::ports::PostStore;
use crate::error::DomainError;

/// Post store holding a fixed, validated collection of posts
#[derive(Default, Clone)]
pub struct InMemoryPostStore {
    posts: Arc<RwLock<Vec<Post>>>,
}

fn poisoned<E>(_: E) -> DomainError {
    DomainError::Internal("post store lock poisoned".to_string())
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from already validated posts, rejecting duplicate ids
    pub fn from_posts(posts: Vec<Post>) -> Result<Self, DomainError> {
        let mut seen = HashSet::new();
        for post in &posts {
            if !seen.insert(&post.id) {
                return Err(DomainError::AlreadyExists(format!("post {}", post.id)));
            }
        }

        Ok(Self {
            posts: Arc::new(RwLock::new(posts)),
        })
    }

    /// Validate raw records and build a store. The first bad record fails the whole load.
    pub fn from_records(records: Vec<PostRecord>) -> Result<Self, DomainError> {
        let posts = records
            .into_iter()
            .map(Post::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_posts(posts)
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn all(&self) -> Result<Vec<Post>, DomainError> {
        let posts = self.posts.read().map_err(poisoned)?;
        Ok(posts.clone())
    }

    async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>, DomainError> {
        let posts = self.posts.read().map_err(poisoned)?;
        Ok(posts.iter().find(|p| &p.id == id).cloned())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let posts = self.posts.read().map_err(poisoned)?;
        Ok(posts.len())
    }
}
