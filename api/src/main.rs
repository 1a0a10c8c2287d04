//! SocialSphere API Server
//!
//! Aggregates posts from several social platforms into one filtered, de-duplicated,
//! sortable and paginated feed.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Json, Router};
use chrono::Utc;
use serde::Serialize;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod feed;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{generate_mock_posts, InMemoryPostStore};
use app::FeedService;
use config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub feed_service: Arc<FeedService<InMemoryPostStore>>,
    pub config: Config,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the router. Rate limiting keys on the peer address, so it needs a
/// server that provides connect info.
fn router(state: AppState, rate_limited: bool) -> anyhow::Result<Router> {
    let mut feed_routes = Router::new().route("/feed", get(handlers::get_feed));

    if rate_limited {
        let governor_config = Arc::new(
            GovernorConfigBuilder::default()
                .key_extractor(PeerIpKeyExtractor)
                .per_second(state.config.rate_limit_per_second)
                .burst_size(state.config.rate_limit_burst)
                .finish()
                .context("Failed to build governor config")?,
        );
        feed_routes = feed_routes.layer(GovernorLayer {
            config: governor_config,
        });
    }

    let app = Router::new()
        .route("/health", get(health))
        .route("/platforms", get(handlers::list_platforms))
        .route("/posts/:id", get(handlers::get_post))
        .merge(feed_routes)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,socialsphere_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting SocialSphere API...");

    // Load configuration
    let config = Config::from_env();

    // Seed the post store
    let posts = generate_mock_posts(Utc::now(), config.seed_post_count)
        .context("Failed to generate demo posts")?;
    let post_store =
        Arc::new(InMemoryPostStore::from_posts(posts).context("Failed to seed post store")?);
    tracing::info!("Seeded {} posts", config.seed_post_count);

    // Create application services
    let feed_service = Arc::new(FeedService::new(post_store));

    let state = AppState {
        feed_service,
        config: config.clone(),
    };

    let app = router(state, true)?;

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("Server error")?;

    Ok(())
}
