use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of `GET /api/makes`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MakesResponse {
    pub makes: Vec<String>,
}

/// Body of `GET /api/models/{make}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ModelsResponse {
    pub models: Vec<String>,
}
