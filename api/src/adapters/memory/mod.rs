//! In-memory adapters
//!
//! A post store backed by a vector, plus the deterministic demo dataset used to
//! seed it.

pub mod mock_posts;
pub mod post_store;

pub use mock_posts::generate_mock_posts;
pub use post_store::InMemoryPostStore;
