//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Domain models for posts and feed output
//! - `ports`: Trait definitions for external dependencies
//! - `feed`: The feed aggregation pipeline

pub mod entities;
pub mod feed;
pub mod ports;
