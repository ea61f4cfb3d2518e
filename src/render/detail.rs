//! Expanded single-car view shown inside the modal.
//!
//! Unlike cards, the detail view lists every feature.

use crate::domain::car::Car;
use crate::domain::media::ImageResolver;
use crate::render::escape::Html;
use crate::render::format::{format_number, group_thousands};
use crate::render::templates;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SpecRow {
    pub label: &'static str,
    pub value: Html,
}

#[derive(Debug, Clone, Serialize)]
pub struct DetailView {
    pub id: i64,
    pub title: Html,
    pub image: Option<Html>,
    pub year: i32,
    pub price: String,
    pub specs: Vec<SpecRow>,
    pub features: Vec<Html>,
    pub description: Html,
}

impl DetailView {
    pub fn from_car(car: &Car, images: &ImageResolver) -> Self {
        let spec = |label, value: &str| SpecRow {
            label,
            value: Html::escape(value),
        };
        Self {
            id: car.id,
            title: Html::escape(&car.title()),
            image: images.resolve(car.image_url.as_deref()).map(|u| Html::escape(&u)),
            year: car.year,
            price: format_number(car.price),
            specs: vec![
                spec("Mileage", &format!("{} mi", group_thousands(car.mileage))),
                spec("Color", &car.color),
                spec("Fuel Type", &car.fuel_type),
                spec("Transmission", &car.transmission),
                spec("Engine", &car.engine),
            ],
            features: car.features.iter().map(|f| Html::escape(f)).collect(),
            description: Html::escape(&car.description),
        }
    }
}

#[derive(Serialize)]
struct DetailContext {
    car: DetailView,
}

pub fn render_car_detail(car: &Car, images: &ImageResolver) -> anyhow::Result<String> {
    templates::render(
        "car_detail.html",
        DetailContext {
            car: DetailView::from_car(car, images),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::config::SiteConfig;
    use crate::render::card::render_cars;
    use crate::render::card::tests::sample_car;

    fn resolver() -> ImageResolver {
        ImageResolver::new(&SiteConfig::new("http://cars.local"))
    }

    #[test]
    fn detail_lists_every_feature() {
        let car = sample_car(1, &["A", "B", "C", "D", "E"]);
        let html = render_car_detail(&car, &resolver()).unwrap();

        assert_eq!(html.matches(r#"class="feature-pill""#).count(), 5);
        assert!(!html.contains("more</span>"));

        // Same car as a card is truncated.
        let card = render_cars(Some(std::slice::from_ref(&car)), &resolver()).unwrap();
        assert!(card.contains("+2 more"));
    }

    #[test]
    fn detail_shows_all_specifications() {
        let html = render_car_detail(&sample_car(4, &[]), &resolver()).unwrap();
        for needle in [
            "<strong>Mileage:</strong> 15,000 mi",
            "<strong>Color:</strong> Silver",
            "<strong>Fuel Type:</strong> Hybrid",
            "<strong>Transmission:</strong> CVT",
            "<strong>Engine:</strong> 2.5L",
            "<div class=\"detail-price\">$28,500</div>",
            "Clean.",
            "Contact Dealer",
            "Schedule Test Drive",
        ] {
            assert!(html.contains(needle), "missing {:?}", needle);
        }
    }

    #[test]
    fn detail_price_matches_card_price() {
        let car = sample_car(2, &[]);
        let detail = render_car_detail(&car, &resolver()).unwrap();
        let card = render_cars(Some(std::slice::from_ref(&car)), &resolver()).unwrap();

        assert!(detail.contains("$28,500<"));
        assert!(card.contains("$28,500<"));
        assert!(!detail.contains("$28,500.00"));
    }

    #[test]
    fn description_is_escaped() {
        let mut car = sample_car(1, &[]);
        car.description = "<img src=x onerror=alert(1)>".into();
        let html = render_car_detail(&car, &resolver()).unwrap();
        assert!(!html.contains("<img src=x"));
        assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
    }
}
