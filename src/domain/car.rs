//! The car record as the backend sends it.

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// One inventory item.
///
/// Only `id`, the make/model/year block and the numeric fields are required on
/// the wire; optional text fields fall back to empty so a sparse record still
/// renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Car {
    pub id: i64,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub mileage: u64,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub fuel_type: String,
    pub price: f64,
    #[serde(default)]
    pub transmission: String,
    #[serde(default)]
    pub engine: String,
    #[serde(default)]
    pub description: String,
    /// Absolute URL, site-relative path or bare filename. `null` and missing
    /// both decode to `None`.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
}

impl Car {
    /// "Make Model", used for titles and image alt text.
    pub fn title(&self) -> String {
        format!("{} {}", self.make, self.model)
    }
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sparse_record_decodes_with_defaults() {
        let car: Car = serde_json::from_value(json!({
            "id": 9,
            "make": "Honda",
            "model": "Civic",
            "year": 2020,
            "mileage": 42000,
            "price": 18999.5,
            "image_url": ""
        }))
        .unwrap();

        assert_eq!(car.title(), "Honda Civic");
        assert!(car.image_url.is_none());
        assert!(car.features.is_empty());
        assert_eq!(car.description, "");
    }

    #[test]
    fn null_image_is_absent() {
        let car: Car = serde_json::from_value(json!({
            "id": 1, "make": "A", "model": "B", "year": 2000,
            "mileage": 0, "price": 1, "image_url": null
        }))
        .unwrap();
        assert!(car.image_url.is_none());
    }

    #[test]
    fn negative_mileage_is_rejected() {
        let res: Result<Car, _> = serde_json::from_value(json!({
            "id": 1, "make": "A", "model": "B", "year": 2000,
            "mileage": -5, "price": 1
        }));
        assert!(res.is_err());
    }
}
