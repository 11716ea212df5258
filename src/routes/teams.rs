use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::TeamSummary,
    routes::AppState,
    services::teams::search_teams,
};

#[derive(Debug, Deserialize)]
pub struct TeamQuery {
    #[serde(default)]
    q: String,
    limit: Option<usize>,
}

/// Handler for team search
pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TeamQuery>,
) -> AppResult<Json<Vec<TeamSummary>>> {
    if params.limit == Some(0) {
        return Err(AppError::InvalidInput(
            "limit must be at least 1".to_string(),
        ));
    }

    let snapshot = state.snapshot().await;
    Ok(Json(search_teams(&snapshot.index, &params.q, params.limit)))
}
