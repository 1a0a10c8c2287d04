use std::env;
use std::str::FromStr;

use crate::domain::entities::DEFAULT_PAGE_SIZE;

#[derive(Clone, Debug)]
pub struct Config {
    /// Port the HTTP server listens on
    pub port: u16,
    /// Page size used when a feed request doesn't set one
    pub default_page_size: usize,
    /// Largest page size a feed request may ask for
    pub max_page_size: usize,
    /// Number of demo posts seeded into the store at startup
    pub seed_post_count: usize,
    /// Sustained feed requests per second per client
    pub rate_limit_per_second: u64,
    /// Burst allowance for the feed rate limiter
    pub rate_limit_burst: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: 100,
            seed_post_count: 36,
            rate_limit_per_second: 10,
            rate_limit_burst: 20,
        }
    }
}

fn var_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        let config = Self {
            port: var_or("PORT", defaults.port),
            default_page_size: var_or("DEFAULT_PAGE_SIZE", defaults.default_page_size).max(1),
            max_page_size: var_or("MAX_PAGE_SIZE", defaults.max_page_size).max(1),
            seed_post_count: var_or("SEED_POST_COUNT", defaults.seed_post_count),
            rate_limit_per_second: var_or("RATE_LIMIT_PER_SECOND", defaults.rate_limit_per_second)
                .max(1),
            rate_limit_burst: var_or("RATE_LIMIT_BURST", defaults.rate_limit_burst).max(1),
        };
        config.normalized()
    }

    /// Keep the default page size within the maximum a request may ask for
    fn normalized(mut self) -> Self {
        if self.default_page_size > self.max_page_size {
            tracing::warn!(
                default_page_size = self.default_page_size,
                max_page_size = self.max_page_size,
                "DEFAULT_PAGE_SIZE exceeds MAX_PAGE_SIZE, clamping"
            );
            self.default_page_size = self.max_page_size;
        }
        self
    }
}
