//! Feed handlers
//!
//! Endpoints for the aggregated feed and single posts.
//! Supports content negotiation: Accept: application/json for JSON, otherwise text/plain.

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::Deserialize;

use crate::config::Config;
use crate::domain::entities::{FilterConfig, PlatformId, PostId, SortBy};
use crate::error::AppError;
use crate::feed::{render_feed, render_post_details};
use crate::AppState;

/// Check if the client wants JSON response
pub(crate) fn wants_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.contains("application/json"))
        .unwrap_or(false)
}

/// Query params for GET /feed
#[derive(Debug, Default, Deserialize)]
pub struct FeedQuery {
    /// Comma-separated platform ids; empty means all platforms
    pub platforms: Option<String>,
    /// Keyword matched against text, author name and handle
    pub q: Option<String>,
    pub sort: Option<String>,
    pub dedupe: Option<bool>,
    pub merge: Option<bool>,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

impl FeedQuery {
    /// Translate query params into a filter configuration
    pub fn into_config(self, config: &Config) -> Result<FilterConfig, AppError> {
        let page_size = self.page_size.unwrap_or(config.default_page_size);
        if page_size > config.max_page_size {
            return Err(AppError::BadRequest(format!(
                "page_size {} exceeds the maximum of {}",
                page_size, config.max_page_size
            )));
        }

        let platforms = self
            .platforms
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| s.parse::<PlatformId>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(AppError::BadRequest)?;

        let sort_by = match self.sort.as_deref() {
            Some(s) => s.parse::<SortBy>().map_err(AppError::BadRequest)?,
            None => SortBy::default(),
        };

        let filter = FilterConfig::with_page_size(page_size)
            .with_platforms(platforms)
            .with_keyword(self.q.as_deref().unwrap_or_default())
            .with_sort(sort_by)
            .with_dedupe(self.dedupe.unwrap_or(false))
            .with_merge_view(self.merge.unwrap_or(false))
            .at_page(self.page.unwrap_or(1));

        Ok(filter)
    }
}

/// GET /feed
///
/// Returns the aggregated feed for the requested filters.
/// - Accept: application/json → JSON response
/// - Otherwise → Plain text (LLM-readable)
pub async fn get_feed(
    State(state): State<AppState>,
    query: Result<Query<FeedQuery>, QueryRejection>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let Query(query) = query?;
    let filter = query.into_config(&state.config)?;
    let page = state.feed_service.generate_feed(&filter).await?;

    if wants_json(&headers) {
        Ok(Json(page).into_response())
    } else {
        Ok((
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            render_feed(&page, Utc::now()),
        )
            .into_response())
    }
}

/// GET /posts/:id
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let post = state.feed_service.get_post(&PostId(id)).await?;

    if wants_json(&headers) {
        Ok(Json(post).into_response())
    } else {
        Ok((
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            render_post_details(&post, Utc::now()),
        )
            .into_response())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_is_default_config() {
        let config = Config::default();
        let filter = FeedQuery::default().into_config(&config).unwrap();
        assert_eq!(filter, FilterConfig::with_page_size(config.default_page_size));
    }

    #[test]
    fn query_maps_every_field() {
        let query = FeedQuery {
            platforms: Some("reddit, youtube,".to_string()),
            q: Some("  hiring ".to_string()),
            sort: Some("engagement".to_string()),
            dedupe: Some(true),
            merge: None,
            page: Some(3),
            page_size: Some(4),
        };

        let filter = query.into_config(&Config::default()).unwrap();

        assert_eq!(filter.selected_platform_ids.len(), 2);
        assert!(filter.selected_platform_ids.contains(&PlatformId::Youtube));
        assert_eq!(filter.keyword, "hiring");
        assert_eq!(filter.sort_by, SortBy::Engagement);
        assert!(filter.dedupe);
        assert!(!filter.merge_view);
        assert_eq!(filter.page, 3);
        assert_eq!(filter.page_size, 4);
    }

    #[test]
    fn merge_implies_dedupe() {
        let query = FeedQuery {
            merge: Some(true),
            dedupe: Some(false),
            ..Default::default()
        };
        let filter = query.into_config(&Config::default()).unwrap();
        assert!(filter.dedupe);
        assert!(filter.merge_view);
    }

    #[test]
    fn page_survives_mode_flags() {
        let query = FeedQuery {
            merge: Some(true),
            page: Some(4),
            ..Default::default()
        };
        let filter = query.into_config(&Config::default()).unwrap();
        assert_eq!(filter.page, 4);
        assert!(filter.merge_view);
    }

    #[test]
    fn unknown_platform_is_bad_request() {
        let query = FeedQuery {
            platforms: Some("myspace".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            query.into_config(&Config::default()),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn oversized_page_is_bad_request() {
        let query = FeedQuery {
            page_size: Some(1_000),
            ..Default::default()
        };
        assert!(matches!(
            query.into_config(&Config::default()),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn wants_json_checks_accept_header() {
        let mut headers = HeaderMap::new();
        assert!(!wants_json(&headers));
        headers.insert(header::ACCEPT, "application/json".parse().unwrap());
        assert!(wants_json(&headers));
    }
}
