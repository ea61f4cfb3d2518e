use crate::transport::api::types::{MakesResponse, ModelsResponse};
use crate::transport::http::types::AppState;
use axum::extract::{Path, State};
use axum::Json;

#[utoipa::path(
    get,
    path = "/api/makes",
    responses((status = 200, description = "Distinct makes, sorted", body = MakesResponse))
)]
pub async fn makes_handler(State(state): State<AppState>) -> Json<MakesResponse> {
    let inventory = state.inventory.read().await;
    Json(MakesResponse {
        makes: inventory.makes(),
    })
}

#[utoipa::path(
    get,
    path = "/api/models/{make}",
    params(("make" = String, Path, description = "Make, URL-encoded")),
    responses((status = 200, description = "Distinct models of the make, sorted", body = ModelsResponse))
)]
pub async fn models_handler(
    State(state): State<AppState>,
    Path(make): Path<String>,
) -> Json<ModelsResponse> {
    let inventory = state.inventory.read().await;
    Json(ModelsResponse {
        models: inventory.models(&make),
    })
}
