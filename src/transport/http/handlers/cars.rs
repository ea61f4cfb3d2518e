use crate::domain::car::Car;
use crate::domain::search::SearchCriteria;
use crate::transport::http::types::{not_found, AppState, ErrorResponse};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

#[utoipa::path(
    get,
    path = "/api/cars",
    responses((status = 200, description = "Every car in the inventory", body = Vec<Car>))
)]
pub async fn list_cars_handler(State(state): State<AppState>) -> Json<Vec<Car>> {
    let inventory = state.inventory.read().await;
    Json(inventory.all())
}

#[utoipa::path(
    get,
    path = "/api/cars/{id}",
    params(("id" = i64, Path, description = "Car id")),
    responses(
        (status = 200, description = "The car", body = Car),
        (status = 404, description = "No car with that id", body = ErrorResponse)
    )
)]
pub async fn get_car_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    let inventory = state.inventory.read().await;
    match inventory.get(id) {
        Some(car) => Json(car).into_response(),
        None => not_found("Car not found").into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/featured",
    responses((status = 200, description = "Newest cars", body = Vec<Car>))
)]
pub async fn featured_cars_handler(State(state): State<AppState>) -> Json<Vec<Car>> {
    let inventory = state.inventory.read().await;
    Json(inventory.featured())
}

#[utoipa::path(
    post,
    path = "/api/cars/search",
    request_body = SearchCriteria,
    responses(
        (status = 200, description = "Cars matching every present filter", body = Vec<Car>),
        (status = 422, description = "Body is not a valid filter set", body = ErrorResponse)
    )
)]
pub async fn search_cars_handler(
    State(state): State<AppState>,
    payload: Result<Json<SearchCriteria>, JsonRejection>,
) -> impl IntoResponse {
    let Json(criteria) = match payload {
        Ok(p) => p,
        Err(e) => {
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorResponse {
                    detail: format!("Invalid search body: {}", e),
                }),
            )
                .into_response()
        }
    };
    let inventory = state.inventory.read().await;
    let results = inventory.search(&criteria);
    tracing::debug!(?criteria, matches = results.len(), "search");
    Json(results).into_response()
}
