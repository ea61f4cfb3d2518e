//! Card grids, the make/model cascade and detail lookups.

use crate::app::context::AppContext;
use crate::app::events::{EventKind, Handler, Node, Subscription};
use crate::app::page::{ids, MAKE_PLACEHOLDER, MODEL_PLACEHOLDER};
use crate::domain::Car;
use crate::render::{render_car_detail, render_cars, templates};

pub const FEATURED_ERROR_MESSAGE: &str = "Error loading featured cars";
pub const ALL_CARS_ERROR_MESSAGE: &str = "Error loading cars";

#[derive(Clone)]
pub struct CatalogController {
    ctx: AppContext,
}

impl CatalogController {
    pub fn new(ctx: AppContext) -> Self {
        Self { ctx }
    }

    pub fn subscriptions() -> Vec<Subscription> {
        vec![
            Subscription::new(EventKind::Change, Node::MakeSelect, Handler::LoadModels),
            Subscription::new(EventKind::Click, Node::Cards, Handler::OpenDetail),
            // The link sits inside the card; stop here so the card handler
            // doesn't issue a second lookup.
            Subscription::new(EventKind::Click, Node::ViewDetailsLinks, Handler::OpenDetail)
                .stopping_propagation(),
        ]
    }

    pub async fn load_featured(&self) {
        let cars = self.ctx.api.featured_cars().await;
        self.fill_grid(ids::FEATURED_CARS, cars, FEATURED_ERROR_MESSAGE)
            .await;
    }

    pub async fn load_all(&self) {
        let cars = self.ctx.api.all_cars().await;
        self.fill_grid(ids::ALL_CARS, cars, ALL_CARS_ERROR_MESSAGE).await;
    }

    async fn fill_grid(&self, container: &str, cars: Option<Vec<Car>>, error_message: &str) {
        let html = match cars {
            Some(cars) => render_cars(Some(cars.as_slice()), &self.ctx.images).unwrap_or_else(|e| {
                tracing::error!(container, "{:#}", e);
                templates::message(error_message)
            }),
            None => templates::message(error_message),
        };
        self.ctx.fill(container, html).await;
    }

    /// Fills the make selector. A failed fetch leaves it untouched.
    pub async fn load_makes(&self) {
        let Some(response) = self.ctx.api.makes().await else {
            return;
        };
        tracing::debug!(count = response.makes.len(), "makes loaded");
        self.ctx
            .page
            .lock()
            .await
            .select_mut(ids::MAKE_SELECT)
            .replace_options(MAKE_PLACEHOLDER, &response.makes);
    }

    /// Refills the model selector for `make`. An empty make resets it without
    /// touching the network; a failed fetch leaves it untouched.
    pub async fn load_models(&self, make: &str) {
        if make.is_empty() {
            self.ctx
                .page
                .lock()
                .await
                .select_mut(ids::MODEL_SELECT)
                .replace_options(MODEL_PLACEHOLDER, &[]);
            return;
        }

        let Some(response) = self.ctx.api.models(make).await else {
            return;
        };
        self.ctx
            .page
            .lock()
            .await
            .select_mut(ids::MODEL_SELECT)
            .replace_options(MODEL_PLACEHOLDER, &response.models);
    }

    /// Detail markup for car `id`, or `None` when the lookup or render fails.
    pub async fn car_detail(&self, id: i64) -> Option<String> {
        let car = self.ctx.api.car(id).await?;
        match render_car_detail(&car, &self.ctx.images) {
            Ok(html) => Some(html),
            Err(e) => {
                tracing::error!(car_id = id, "{:#}", e);
                None
            }
        }
    }
}
