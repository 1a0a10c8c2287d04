//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod feed;
pub mod platforms;

pub use feed::{get_feed, get_post};
pub use platforms::list_platforms;
