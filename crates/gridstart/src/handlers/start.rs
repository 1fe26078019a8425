use axum::{extract::Query, Json};

use gridstart_core::{
    query::{Column, RawQuery},
    start::{process_start_query, GridParams},
};

use crate::handlers::AppError;

/// Validate and normalize a grid request (GET /start).
///
/// Query parameters:
/// - `cols` - comma-separated column counts
/// - `fonts`, `prefix` - passed through untouched
/// - anything else - a named media query, or a bare width like `48em`
pub async fn start(
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<GridParams>, AppError> {
    let raw = RawQuery::from_pairs(params);

    let grid = process_start_query(&raw).inspect_err(|err| {
        tracing::warn!(error = ?err, params = raw.len(), "Rejected start request");
    })?;

    tracing::debug!(
        cols = grid.cols().map_or(0, <[Column]>::len),
        media_queries = grid.media_queries.len(),
        params = raw.len(),
        "Normalized start request"
    );

    Ok(Json(grid))
}
