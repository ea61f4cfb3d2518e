//! Search criteria and how they are built from the filter form.
//!
//! The backend treats the presence of a key as "filter active", so an empty
//! field must be left out of the request entirely, never sent as `null` or `""`.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Present-only filter set sent to `POST /api/cars/search`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SearchCriteria {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub make: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_price: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_price: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_year: Option<i64>,
    /// Accepted by the backend; the filter form has no field for it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_year: Option<i64>,
    /// Accepted by the backend; the filter form has no field for it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transmission: Option<String>,
}

impl SearchCriteria {
    pub fn is_empty(&self) -> bool {
        *self == SearchCriteria::default()
    }
}

/// Raw values of the six filter inputs, exactly as read from the page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchForm {
    pub make: String,
    pub model: String,
    pub fuel_type: String,
    pub min_price: String,
    pub max_price: String,
    pub min_year: String,
}

impl SearchForm {
    /// Drops empty text fields and coerces the numeric ones.
    ///
    /// A numeric field with no leading integer is dropped as well.
    pub fn to_criteria(&self) -> SearchCriteria {
        SearchCriteria {
            make: non_empty(&self.make),
            model: non_empty(&self.model),
            fuel_type: non_empty(&self.fuel_type),
            min_price: numeric_field("min_price", &self.min_price),
            max_price: numeric_field("max_price", &self.max_price),
            min_year: numeric_field("min_year", &self.min_year),
            max_year: None,
            transmission: None,
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn numeric_field(name: &str, value: &str) -> Option<i64> {
    if value.is_empty() {
        return None;
    }
    let parsed = parse_leading_int(value);
    if parsed.is_none() {
        tracing::warn!(field = name, value, "Ignoring non-numeric search filter");
    }
    parsed
}

/// Parses an optional sign and the leading run of digits, ignoring leading
/// whitespace and anything after the digits (`" 42k"` is 42).
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits_len = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits_len == 0 {
        return None;
    }
    let magnitude: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
