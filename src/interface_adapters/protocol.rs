use serde::Serialize;

// Reduced catalog entry returned by the list endpoint.
#[derive(Serialize)]
pub struct NeoSummary {
    pub id: String,
    pub name: String,
}

// Uniform payload for failed upstream calls.
#[derive(Serialize)]
pub struct ErrorResponse {
    pub message: String,
}
