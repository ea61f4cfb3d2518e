//! In-memory inventory backing the development server.

use crate::domain::car::Car;
use crate::domain::search::SearchCriteria;
use std::collections::BTreeSet;

pub mod seed;

/// How many cars the featured endpoint returns.
pub const FEATURED_LIMIT: usize = 3;

/// A fixed set of cars with the queries the listing API needs.
pub struct Inventory {
    cars: Vec<Car>,
}

impl Inventory {
    pub fn new(cars: Vec<Car>) -> Self {
        Self { cars }
    }

    /// The demo inventory the site ships with.
    pub fn seeded() -> Self {
        Self::new(seed::demo_cars())
    }

    pub fn all(&self) -> Vec<Car> {
        self.cars.clone()
    }

    pub fn get(&self, id: i64) -> Option<Car> {
        self.cars.iter().find(|c| c.id == id).cloned()
    }

    /// Newest cars first, at most [`FEATURED_LIMIT`].
    pub fn featured(&self) -> Vec<Car> {
        let mut cars = self.cars.clone();
        // Stable sort keeps insertion order between cars of the same year.
        cars.sort_by(|a, b| b.year.cmp(&a.year));
        cars.truncate(FEATURED_LIMIT);
        cars
    }

    /// Distinct makes, sorted.
    pub fn makes(&self) -> Vec<String> {
        self.cars
            .iter()
            .map(|c| c.make.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Distinct models of one make, sorted. Unknown make → empty.
    pub fn models(&self, make: &str) -> Vec<String> {
        self.cars
            .iter()
            .filter(|c| c.make == make)
            .map(|c| c.model.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn search(&self, criteria: &SearchCriteria) -> Vec<Car> {
        self.cars
            .iter()
            .filter(|c| matches(c, criteria))
            .cloned()
            .collect()
    }
}

fn matches(car: &Car, q: &SearchCriteria) -> bool {
    fn text_eq(filter: &Option<String>, value: &str) -> bool {
        match filter.as_deref() {
            None | Some("") => true,
            Some(f) => f == value,
        }
    }

    if !text_eq(&q.make, &car.make)
        || !text_eq(&q.model, &car.model)
        || !text_eq(&q.fuel_type, &car.fuel_type)
        || !text_eq(&q.transmission, &car.transmission)
    {
        return false;
    }
    if q.min_price.is_some_and(|min| car.price < min as f64) {
        return false;
    }
    if q.max_price.is_some_and(|max| car.price > max as f64) {
        return false;
    }
    if q.min_year.is_some_and(|min| i64::from(car.year) < min) {
        return false;
    }
    if q.max_year.is_some_and(|max| i64::from(car.year) > max) {
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ids(cars: &[Car]) -> Vec<i64> {
        cars.iter().map(|c| c.id).collect()
    }

    #[test]
    fn featured_is_newest_three() {
        let inv = Inventory::seeded();
        // 2024 Tesla, then the two 2023s in insertion order.
        assert_eq!(ids(&inv.featured()), vec![6, 2, 5]);
    }

    #[test]
    fn makes_are_distinct_and_sorted() {
        let inv = Inventory::seeded();
        assert_eq!(
            inv.makes(),
            vec!["Audi", "BMW", "Honda", "Mercedes-Benz", "Tesla", "Toyota"]
        );
        assert_eq!(inv.models("Toyota"), vec!["Camry"]);
        assert!(inv.models("Lada").is_empty());
    }

    #[test]
    fn price_and_year_ranges_are_inclusive() {
        let inv = Inventory::seeded();
        let q = SearchCriteria {
            min_price: Some(40000),
            max_price: Some(50000),
            min_year: Some(2022),
            ..Default::default()
        };
        assert_eq!(ids(&inv.search(&q)), vec![4, 5, 6]);
    }

    #[test]
    fn text_filters_are_exact() {
        let inv = Inventory::seeded();
        let q = SearchCriteria {
            fuel_type: Some("Electric".into()),
            ..Default::default()
        };
        assert_eq!(ids(&inv.search(&q)), vec![6]);

        let q = SearchCriteria {
            make: Some("toyota".into()),
            ..Default::default()
        };
        assert!(inv.search(&q).is_empty());
    }

    #[test]
    fn empty_criteria_returns_everything() {
        let inv = Inventory::seeded();
        assert_eq!(inv.search(&SearchCriteria::default()).len(), inv.all().len());
    }
}
