use axum::{extract::State, Extension, Json};
use std::sync::Arc;

use crate::{
    error::AppResult, middleware::request_id::RequestId, models::DatasetSummary,
    routes::AppState,
};

/// Describes the dataset snapshot currently served
pub async fn summary(State(state): State<Arc<AppState>>) -> Json<DatasetSummary> {
    Json(state.snapshot().await.summary())
}

/// Reloads the datasets from their source and rebuilds the index
pub async fn reload(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
) -> AppResult<Json<DatasetSummary>> {
    tracing::info!(request_id = %request_id, "Reloading datasets");
    Ok(Json(state.reload().await?))
}
