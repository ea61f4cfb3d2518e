//! Consumer side of the listing API.

pub mod client;
pub mod types;

pub use client::ApiClient;
pub use types::{MakesResponse, ModelsResponse};
