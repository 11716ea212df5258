use axum::{extract::State, Extension, Json};
use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    models::{RankingRequest, RankingResult},
    routes::AppState,
    services::ranking::calculate_package_rankings,
};

/// Handler for the package ranking endpoint
pub async fn rank(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<RankingRequest>,
) -> AppResult<Json<RankingResult>> {
    tracing::info!(
        request_id = %request_id,
        teams = ?request.team_names(),
        "Processing ranking request"
    );

    let snapshot = state.snapshot().await;
    let config = state.ranking;

    // The combination search is CPU-bound; keep it off the async workers
    let result = tokio::task::spawn_blocking(move || {
        calculate_package_rankings(&snapshot.index, request.team_names(), &config)
    })
    .await
    .map_err(|e| AppError::Internal(format!("Ranking task failed: {}", e)))?;

    tracing::info!(
        request_id = %request_id,
        total_games = result.total_games,
        best_coverage = result.combinations.first().map(|c| c.coverage),
        "Ranking completed"
    );

    Ok(Json(result))
}
