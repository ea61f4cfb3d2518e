//! Card list rendering for the featured, inventory and search-result grids.

use crate::domain::car::Car;
use crate::domain::media::ImageResolver;
use crate::render::escape::Html;
use crate::render::format::{format_number, group_thousands};
use crate::render::templates;
use serde::Serialize;

/// Cards show this many feature tags before collapsing the rest into "+N more".
pub const CARD_FEATURE_LIMIT: usize = 3;

pub const NO_CARS_MESSAGE: &str = "No cars found";
pub const NO_MATCHES_MESSAGE: &str = "No cars found matching your criteria";

#[derive(Debug, Clone, Serialize)]
pub struct CardView {
    pub id: i64,
    pub title: Html,
    pub image: Option<Html>,
    pub year: i32,
    pub mileage: String,
    pub color: Html,
    pub fuel_type: Html,
    pub price: String,
    pub features: Vec<Html>,
    pub overflow: Option<usize>,
}

impl CardView {
    pub fn from_car(car: &Car, images: &ImageResolver) -> Self {
        let overflow = car.features.len().saturating_sub(CARD_FEATURE_LIMIT);
        Self {
            id: car.id,
            title: Html::escape(&car.title()),
            image: images.resolve(car.image_url.as_deref()).map(|u| Html::escape(&u)),
            year: car.year,
            mileage: group_thousands(car.mileage),
            color: Html::escape(&car.color),
            fuel_type: Html::escape(&car.fuel_type),
            price: format_number(car.price),
            features: car
                .features
                .iter()
                .take(CARD_FEATURE_LIMIT)
                .map(|f| Html::escape(f))
                .collect(),
            overflow: (overflow > 0).then_some(overflow),
        }
    }
}

#[derive(Serialize)]
struct CardsView {
    cars: Vec<CardView>,
}

fn cards_view(cars: &[Car], images: &ImageResolver) -> CardsView {
    CardsView {
        cars: cars.iter().map(|c| CardView::from_car(c, images)).collect(),
    }
}

/// Markup for a card grid container. Empty or absent → "No cars found".
pub fn render_cars(cars: Option<&[Car]>, images: &ImageResolver) -> anyhow::Result<String> {
    match cars {
        Some(cars) if !cars.is_empty() => templates::render("cards.html", cards_view(cars, images)),
        _ => Ok(templates::message(NO_CARS_MESSAGE)),
    }
}

/// Search-results variant: a count header above the same cards.
pub fn render_search_results(
    cars: Option<&[Car]>,
    images: &ImageResolver,
) -> anyhow::Result<String> {
    match cars {
        Some(cars) if !cars.is_empty() => {
            templates::render("search_results.html", cards_view(cars, images))
        }
        _ => Ok(templates::message(NO_MATCHES_MESSAGE)),
    }
}
