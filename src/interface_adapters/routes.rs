use crate::interface_adapters::handlers::neos::{get_neo, list_neos};
use crate::interface_adapters::state::AppState;
use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

// Build the HTTP router for the public NEO endpoints.
pub fn app(state: Arc<AppState>) -> Router {
    // Browser clients fetch straight from this service; allow any origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/neos", get(list_neos))
        .route("/api/neo/{neo_id}", get(get_neo))
        .layer(cors)
        .with_state(state)
}
