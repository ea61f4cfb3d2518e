//! Card clicks, the detail lookup and the overlay's close paths.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use showroom::app::page::ids;
use showroom::{App, Car, DomEvent, Inventory, SiteConfig, Target};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Clone)]
struct DetailBackend {
    cars: Arc<Vec<Car>>,
    lookups: Arc<AtomicUsize>,
}

async fn car_handler(State(backend): State<DetailBackend>, Path(id): Path<i64>) -> Response {
    backend.lookups.fetch_add(1, Ordering::SeqCst);
    match backend.cars.iter().find(|c| c.id == id) {
        Some(car) => Json(car.clone()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn start(cars: Vec<Car>) -> Result<(App, Arc<AtomicUsize>), Box<dyn std::error::Error>> {
    let lookups = Arc::new(AtomicUsize::new(0));
    let backend = DetailBackend {
        cars: Arc::new(cars),
        lookups: lookups.clone(),
    };
    let router = Router::new()
        .route("/api/cars/:id", get(car_handler))
        .with_state(backend);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let port = listener.local_addr()?.port();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    let app = App::showroom(SiteConfig::new(format!("http://127.0.0.1:{}", port)))?;
    app.start().await;
    Ok((app, lookups))
}

async fn modal_visible(app: &App) -> bool {
    app.context().page.lock().await.modal_visible()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_view_details_issues_one_lookup() -> Result<(), Box<dyn std::error::Error>> {
    let (app, lookups) = start(Inventory::seeded().all()).await?;

    app.dispatch(DomEvent::click(Target::ViewDetails(1))).await;

    assert_eq!(lookups.load(Ordering::SeqCst), 1);
    assert!(modal_visible(&app).await);

    let detail = app.context().inner_html(ids::CAR_DETAIL).await.unwrap_or_default();
    assert!(detail.contains("Toyota Camry"));
    assert!(detail.contains("<div class=\"detail-price\">$28,500</div>"));
    // Detail lists every feature with no overflow tag.
    assert_eq!(detail.matches("class=\"feature-pill\"").count(), 5);
    assert!(!detail.contains("more</span>"));
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_modal_close_paths() -> Result<(), Box<dyn std::error::Error>> {
    let (app, _) = start(Inventory::seeded().all()).await?;

    // Escape while hidden does nothing.
    app.dispatch(DomEvent::key_down("Escape")).await;
    assert!(!modal_visible(&app).await);

    app.dispatch(DomEvent::click(Target::Card(3))).await;
    assert!(modal_visible(&app).await);

    app.dispatch(DomEvent::click(Target::ModalContent)).await;
    assert!(modal_visible(&app).await);

    app.dispatch(DomEvent::click(Target::ModalBackdrop)).await;
    assert!(!modal_visible(&app).await);

    app.dispatch(DomEvent::click(Target::Card(3))).await;
    app.dispatch(DomEvent::key_down("Escape")).await;
    assert!(!modal_visible(&app).await);

    app.dispatch(DomEvent::click(Target::Card(3))).await;
    app.dispatch(DomEvent::click(Target::ModalClose)).await;
    assert!(!modal_visible(&app).await);
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_missing_car_keeps_modal_closed() -> Result<(), Box<dyn std::error::Error>> {
    let (app, lookups) = start(Inventory::seeded().all()).await?;

    app.dispatch(DomEvent::click(Target::Card(99))).await;

    assert_eq!(lookups.load(Ordering::SeqCst), 1);
    assert!(!modal_visible(&app).await);
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_backend_text_is_escaped() -> Result<(), Box<dyn std::error::Error>> {
    let mut car = Inventory::seeded().get(1).ok_or("seed car missing")?;
    car.description = "<script>alert(1)</script>".to_string();
    car.features = vec!["Tow & Go".to_string()];
    let (app, _) = start(vec![car]).await?;

    app.dispatch(DomEvent::click(Target::Card(1))).await;

    let detail = app.context().inner_html(ids::CAR_DETAIL).await.unwrap_or_default();
    assert!(detail.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(!detail.contains("<script>"));
    assert!(detail.contains("Tow &amp; Go"));
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_teardown_detaches_listeners() -> Result<(), Box<dyn std::error::Error>> {
    let (app, lookups) = start(Inventory::seeded().all()).await?;

    app.teardown().await;
    let ran = app.dispatch(DomEvent::click(Target::ViewDetails(1))).await;

    assert!(ran.is_empty());
    assert_eq!(lookups.load(Ordering::SeqCst), 0);
    assert!(!modal_visible(&app).await);
    Ok(())
}
