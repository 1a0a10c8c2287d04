//! Platform handlers

use axum::{
    extract::State,
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
    Json,
};

use super::feed::wants_json;
use crate::error::AppError;
use crate::feed::render_platforms;
use crate::AppState;

/// GET /platforms
///
/// Returns the platform catalogue with post counts, for building filter chips.
pub async fn list_platforms(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let platforms = state.feed_service.list_platforms().await?;

    if wants_json(&headers) {
        Ok(Json(platforms).into_response())
    } else {
        Ok((
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            render_platforms(&platforms),
        )
            .into_response())
    }
}
