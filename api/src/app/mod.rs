//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between the domain pipeline and the post store port.

pub mod feed_service;

pub use feed_service::{FeedService, PlatformSummary};
