//! Analysis history endpoints.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::api::types::{parse_id, ApiContext};
use crate::history::HistoryEntry;

#[derive(Deserialize)]
pub struct HistoryQuery {
    pub limit: Option<usize>,
}

/// `GET /api/history?limit=`: newest first.
pub async fn list(
    State(ctx): State<ApiContext>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<Vec<HistoryEntry>>, ApiError> {
    Ok(Json(ctx.state.history.list(query.limit)?))
}

/// `GET /api/history/:id`
pub async fn detail(
    State(ctx): State<ApiContext>,
    Path(id): Path<String>,
) -> Result<Json<HistoryEntry>, ApiError> {
    let id = parse_id(&id)?;
    ctx.state
        .history
        .get(&id)?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("History entry not found: {id}")))
}
