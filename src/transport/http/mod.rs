//! Development inventory server implementing the listing API.

pub mod router;
pub mod types;
pub mod handlers {
    pub mod cars;
    pub mod catalog;
    pub mod health;
}

pub use router::{create_router, ApiDoc};
pub use types::AppState;
