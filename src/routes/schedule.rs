use axum::{extract::State, Extension, Json};
use std::sync::Arc;

use crate::{
    error::AppResult,
    middleware::request_id::RequestId,
    models::{RankingRequest, ScheduledMatch},
    routes::AppState,
    services::schedule::match_schedule,
};

/// Handler listing the selected teams' matches and where to watch them
pub async fn schedule(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<RankingRequest>,
) -> AppResult<Json<Vec<ScheduledMatch>>> {
    let snapshot = state.snapshot().await;
    let matches = match_schedule(&snapshot.index, request.team_names());

    tracing::info!(
        request_id = %request_id,
        teams = request.teams.len(),
        matches = matches.len(),
        "Schedule built"
    );

    Ok(Json(matches))
}
