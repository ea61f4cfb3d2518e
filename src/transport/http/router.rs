use crate::domain::car::Car;
use crate::domain::search::SearchCriteria;
use crate::transport::api::types::{MakesResponse, ModelsResponse};
use crate::transport::http::handlers::{cars, catalog, health};
use crate::transport::http::types::{AppState, ErrorResponse};
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        cars::list_cars_handler,
        cars::get_car_handler,
        cars::featured_cars_handler,
        cars::search_cars_handler,
        catalog::makes_handler,
        catalog::models_handler
    ),
    components(schemas(Car, SearchCriteria, MakesResponse, ModelsResponse, ErrorResponse))
)]
pub struct ApiDoc;

async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn create_router(app_state: AppState) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route("/api-docs/openapi.json", get(openapi_handler))
        .route("/api/cars", get(cars::list_cars_handler))
        .route("/api/cars/search", post(cars::search_cars_handler))
        .route("/api/cars/:id", get(cars::get_car_handler))
        .route("/api/featured", get(cars::featured_cars_handler))
        .route("/api/makes", get(catalog::makes_handler))
        .route("/api/models/:make", get(catalog::models_handler))
        .layer(cors)
        .with_state(app_state)
}
