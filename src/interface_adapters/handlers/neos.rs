use crate::interface_adapters::protocol::{ErrorResponse, NeoSummary};
use crate::interface_adapters::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::Value;
use std::sync::Arc;

#[tracing::instrument(name = "list_neos", skip_all)]
pub async fn list_neos(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<NeoSummary>>, (StatusCode, Json<ErrorResponse>)> {
    tracing::info!("fetching NEO catalog from NASA API.");

    // Fetch one browse page from the upstream catalog.
    let page = state.catalog.browse().await.map_err(|e| {
        tracing::error!(error = %e, "failed to fetch the NEO catalog.");
        error_response("failed to fetch asteroid catalog from NASA API")
    })?;

    // Project each upstream entry down to the reduced summary shape.
    let summaries = page
        .near_earth_objects
        .into_iter()
        .map(|entry| NeoSummary {
            id: entry.id,
            name: entry.name,
        })
        .collect();

    Ok(Json(summaries))
}

#[tracing::instrument(name = "get_neo", skip_all, fields(neo_id = %neo_id))]
pub async fn get_neo(
    State(state): State<Arc<AppState>>,
    Path(neo_id): Path<String>,
) -> Result<Json<Value>, (StatusCode, Json<ErrorResponse>)> {
    // The id is opaque to this service; upstream decides whether it exists.
    let detail = state.catalog.lookup(&neo_id).await.map_err(|e| {
        tracing::error!(error = %e, "failed to fetch asteroid detail.");
        error_response(&format!("failed to fetch asteroid {neo_id} from NASA API"))
    })?;

    // Return the upstream record verbatim.
    Ok(Json(detail))
}

// Helper to build a JSON error response.
fn error_response(message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            message: message.to_string(),
        }),
    )
}
