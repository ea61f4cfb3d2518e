use crate::domain::inventory::Inventory;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;
use utoipa::ToSchema;

#[derive(Clone)]
pub struct AppState {
    pub inventory: Arc<RwLock<Inventory>>,
}

impl AppState {
    pub fn new(inventory: Inventory) -> Self {
        Self {
            inventory: Arc::new(RwLock::new(inventory)),
        }
    }
}

/// Error body, shaped like the `{"detail": ...}` responses the production backend sends.
#[derive(Serialize, Debug, ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
}

pub fn not_found(detail: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            detail: detail.to_string(),
        }),
    )
}
