use crate::transport::http::types::AppState;
use axum::extract::State;
use axum::Json;

#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Server is up"))
)]
pub async fn healthcheck_handler(State(state): State<AppState>) -> Json<serde_json::Value> {
    let cars = state.inventory.read().await.all().len();
    Json(serde_json::json!({ "status": "ok", "cars": cars }))
}
